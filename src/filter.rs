//! Filesystem predicate trait shared by patterns and pattern lists.

use std::path::Path;

use crate::error::MatchError;
use crate::list::PatternList;
use crate::pattern::{CompiledPattern, Pattern};

/// A predicate over absolute filesystem paths.
///
/// Implementors derive the transfer root from the path's filesystem-root
/// component, making the trait usable anywhere a bare "does this path
/// match?" question suffices.
pub trait PathFilter {
    /// Tests an absolute path against the filter.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::RelativePath`] when `path` is not absolute.
    fn matches_path(&self, path: &Path) -> Result<bool, MatchError>;

    /// Convenience form taking the path as a string.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::RelativePath`] when `path` is not absolute.
    fn matches_str(&self, path: &str) -> Result<bool, MatchError> {
        self.matches_path(Path::new(path))
    }
}

impl PathFilter for Pattern {
    fn matches_path(&self, path: &Path) -> Result<bool, MatchError> {
        Self::matches_path(self, path)
    }
}

impl PathFilter for CompiledPattern {
    fn matches_path(&self, path: &Path) -> Result<bool, MatchError> {
        Self::matches_path(self, path)
    }
}

impl PathFilter for PatternList {
    fn matches_path(&self, path: &Path) -> Result<bool, MatchError> {
        self.is_excluded_path(path)
    }
}
