//! Rule classification and the compiled [`Pattern`] value type.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;
use std::path::Path;

use regex::{Regex, RegexBuilder};

use crate::error::{MatchError, PatternError};
use crate::matcher;
use crate::trace;
use crate::translate;

/// One compiled filter rule.
///
/// Built once via [`Pattern::compile`] and reused for any number of
/// subsequent matches; a pattern holds no mutable state. Blank lines and
/// comment lines become inert variants that never match, mirroring how an
/// exclude file is read one rule per line.
///
/// Equality and hashing follow the canonical compiled form: two different
/// rule spellings that translate to the same expression compare equal, while
/// comments compare by their original text and all blank patterns are
/// interchangeable.
#[derive(Clone, Debug)]
pub enum Pattern {
    /// An absent or all-whitespace rule line. Never matches.
    Blank {
        /// Original line text, when one existed at all.
        text: Option<String>,
    },
    /// A line starting with `#` or `;`. Never matches.
    Comment {
        /// Original line text.
        text: String,
    },
    /// A rule compiled to a ready-to-evaluate expression.
    Compiled(CompiledPattern),
}

impl Pattern {
    /// Classifies and compiles one line of filter-rule text.
    ///
    /// - `None` or all-whitespace text yields [`Pattern::Blank`].
    /// - Text whose trimmed form starts with `#` or `;` yields
    ///   [`Pattern::Comment`].
    /// - Everything else is translated to a regular expression.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] when the rule uses the unsupported `+ `
    /// include marker, names an unknown POSIX class, or produces an
    /// expression the regex engine rejects.
    ///
    /// # Examples
    ///
    /// ```
    /// use rsync_patterns::Pattern;
    ///
    /// assert!(matches!(Pattern::compile(None), Ok(Pattern::Blank { .. })));
    /// assert!(matches!(Pattern::compile("# note"), Ok(Pattern::Comment { .. })));
    /// assert!(matches!(Pattern::compile("*.tmp"), Ok(Pattern::Compiled(_))));
    /// ```
    pub fn compile<'a, T>(text: T) -> Result<Self, PatternError>
    where
        T: Into<Option<&'a str>>,
    {
        let Some(text) = text.into() else {
            return Ok(Self::Blank { text: None });
        };
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(Self::Blank {
                text: Some(text.to_owned()),
            });
        }
        if trimmed.starts_with('#') || trimmed.starts_with(';') {
            return Ok(Self::Comment {
                text: text.to_owned(),
            });
        }
        CompiledPattern::new(text).map(Self::Compiled)
    }

    /// Returns the original rule text, when any existed.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Blank { text } => text.as_deref(),
            Self::Comment { text } => Some(text),
            Self::Compiled(pattern) => Some(pattern.text()),
        }
    }

    /// Tests `path`, resolved against the absolute transfer root `root`.
    ///
    /// Inert patterns never match, but the root precondition is enforced for
    /// every variant.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::RelativeRoot`] when `root` is not absolute.
    pub fn matches(&self, root: &Path, path: &Path) -> Result<bool, MatchError> {
        if !root.is_absolute() {
            return Err(MatchError::RelativeRoot(root.to_path_buf()));
        }
        match self {
            Self::Blank { .. } | Self::Comment { .. } => Ok(false),
            Self::Compiled(pattern) => pattern.matches(root, path),
        }
    }

    /// Tests an absolute `path`, deriving the transfer root from its
    /// filesystem-root component.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::RelativePath`] when `path` is not absolute.
    pub fn matches_path(&self, path: &Path) -> Result<bool, MatchError> {
        if !path.is_absolute() {
            return Err(MatchError::RelativePath(path.to_path_buf()));
        }
        match self {
            Self::Blank { .. } | Self::Comment { .. } => Ok(false),
            Self::Compiled(pattern) => pattern.matches_path(path),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blank { text } => f.write_str(text.as_deref().unwrap_or("")),
            Self::Comment { text } => f.write_str(text),
            Self::Compiled(pattern) => f.write_str(pattern.as_regex_str()),
        }
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Blank { .. }, Self::Blank { .. }) => true,
            (Self::Comment { text: a }, Self::Comment { text: b }) => a == b,
            (Self::Compiled(a), Self::Compiled(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Pattern {}

impl Hash for Pattern {
    fn hash<H: Hasher>(&self, state: &mut H) {
        mem::discriminant(self).hash(state);
        match self {
            Self::Blank { .. } => {}
            Self::Comment { text } => text.hash(state),
            Self::Compiled(pattern) => pattern.hash(state),
        }
    }
}

/// A rule translated to a compiled regular expression.
///
/// The expression evaluates against `/`-separated paths relative to the
/// transfer root. Immutable after construction and safe to share across
/// threads without synchronisation.
#[derive(Clone, Debug)]
pub struct CompiledPattern {
    text: String,
    regex: Regex,
}

impl CompiledPattern {
    pub(crate) fn new(text: &str) -> Result<Self, PatternError> {
        let expression = translate::rule_to_regex(text)?;
        let regex = RegexBuilder::new(&expression)
            .size_limit(translate::SIZE_LIMIT)
            .build()
            .map_err(|source| PatternError::Regex {
                pattern: text.to_owned(),
                source,
            })?;
        trace::pattern_compiled(text, regex.as_str());
        Ok(Self {
            text: text.to_owned(),
            regex,
        })
    }

    /// Returns the original rule text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the generated expression, the pattern's canonical form.
    #[must_use]
    pub fn as_regex_str(&self) -> &str {
        self.regex.as_str()
    }

    pub(crate) fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Whether the rule text ends in exactly one `/`, restricting matches
    /// to directories and enabling ancestor inheritance.
    #[must_use]
    pub fn is_dir_only(&self) -> bool {
        self.text.ends_with('/') && !self.text.ends_with("//")
    }

    /// Tests `path`, resolved against the absolute transfer root `root`.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::RelativeRoot`] when `root` is not absolute.
    pub fn matches(&self, root: &Path, path: &Path) -> Result<bool, MatchError> {
        matcher::matches(self, root, path, true)
    }

    /// Tests an absolute `path` with the transfer root taken as its
    /// filesystem-root component.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::RelativePath`] when `path` is not absolute.
    pub fn matches_path(&self, path: &Path) -> Result<bool, MatchError> {
        if !path.is_absolute() {
            return Err(MatchError::RelativePath(path.to_path_buf()));
        }
        let root = matcher::filesystem_root(path);
        self.matches(&root, path)
    }
}

impl fmt::Display for CompiledPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_regex_str())
    }
}

impl PartialEq for CompiledPattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_regex_str() == other.as_regex_str()
    }
}

impl Eq for CompiledPattern {}

impl Hash for CompiledPattern {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_regex_str().hash(state);
    }
}
