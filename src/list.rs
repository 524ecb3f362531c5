//! Ordered collections of compiled patterns.

use std::path::Path;
use std::sync::Arc;

use crate::error::{MatchError, PatternError};
use crate::pattern::Pattern;
use crate::rules::{self, RuleFileError};

/// Immutable, ordered collection of compiled exclude rules.
///
/// Built once from the lines of an exclude file and reused for any number
/// of candidate paths; a path is excluded when any rule in the list matches
/// it. Inert rules (blank lines, comments) are kept so the list mirrors the
/// source file line for line, but they never match anything.
///
/// `PatternList` is cheaply cloneable (the compiled patterns live behind an
/// [`Arc`]) and safe for unsynchronised concurrent use.
///
/// # Examples
///
/// ```
/// use rsync_patterns::PatternList;
/// use std::path::Path;
///
/// let list = PatternList::from_lines(["# build artefacts", "*.o", "target/"])?;
///
/// assert!(list.is_excluded(Path::new("/srv/src"), Path::new("main.o"))?);
/// assert!(!list.is_excluded(Path::new("/srv/src"), Path::new("main.c"))?);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct PatternList {
    patterns: Arc<Vec<Pattern>>,
}

impl PatternList {
    /// Compiles each line into a pattern, preserving order.
    ///
    /// # Errors
    ///
    /// Returns the first [`PatternError`] encountered.
    pub fn from_lines<I, S>(lines: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = lines
            .into_iter()
            .map(|line| Pattern::compile(line.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_patterns(patterns))
    }

    /// Wraps already-compiled patterns.
    #[must_use]
    pub fn from_patterns<I>(patterns: I) -> Self
    where
        I: IntoIterator<Item = Pattern>,
    {
        Self {
            patterns: Arc::new(patterns.into_iter().collect()),
        }
    }

    /// Reads and compiles a rule file, one rule per line.
    ///
    /// # Errors
    ///
    /// Returns [`RuleFileError`] when the file cannot be read or a line
    /// fails to compile.
    pub fn from_file(path: &Path) -> Result<Self, RuleFileError> {
        Ok(Self::from_patterns(rules::read_rules(path)?))
    }

    /// Returns `true` when the list holds no patterns at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Number of patterns in the list, inert ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Iterates the patterns in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &Pattern> {
        self.patterns.iter()
    }

    /// Returns whether any rule selects `path` (resolved against `root`)
    /// for exclusion.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::RelativeRoot`] when `root` is not absolute.
    pub fn is_excluded(&self, root: &Path, path: &Path) -> Result<bool, MatchError> {
        for pattern in self.patterns.iter() {
            if pattern.matches(root, path)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Single-argument form of [`is_excluded`](Self::is_excluded); the
    /// transfer root is the path's filesystem-root component.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::RelativePath`] when `path` is not absolute.
    pub fn is_excluded_path(&self, path: &Path) -> Result<bool, MatchError> {
        for pattern in self.patterns.iter() {
            if pattern.matches_path(path)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::PatternList;
    use crate::pattern::Pattern;

    fn root() -> &'static Path {
        Path::new("/srv/data")
    }

    #[test]
    fn default_list_excludes_nothing() {
        let list = PatternList::default();
        assert!(list.is_empty());
        assert!(!list.is_excluded(root(), Path::new("anything")).unwrap());
    }

    #[test]
    fn any_matching_rule_excludes() {
        let list = PatternList::from_lines(["*.tmp", "*.bak"]).unwrap();
        assert!(list.is_excluded(root(), Path::new("note.tmp")).unwrap());
        assert!(list.is_excluded(root(), Path::new("a/b/old.bak")).unwrap());
        assert!(!list.is_excluded(root(), Path::new("note.txt")).unwrap());
    }

    #[test]
    fn inert_lines_are_kept_but_never_match() {
        let list = PatternList::from_lines(["# comment", "", "*.tmp"]).unwrap();
        assert_eq!(list.len(), 3);
        assert!(matches!(list.iter().next(), Some(Pattern::Comment { .. })));
        assert!(!list.is_excluded(root(), Path::new("# comment")).unwrap());
    }

    #[test]
    fn bad_line_fails_list_construction() {
        assert!(PatternList::from_lines(["*.tmp", "+ keep"]).is_err());
    }

    #[test]
    fn relative_root_is_rejected() {
        let list = PatternList::from_lines(["*.tmp"]).unwrap();
        assert!(
            list.is_excluded(Path::new("not/absolute"), Path::new("x.tmp"))
                .is_err()
        );
    }
}
