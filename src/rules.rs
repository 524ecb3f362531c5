//! Reading rule files, one rule per line.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::error::PatternError;
use crate::pattern::Pattern;

/// Error produced while loading a rule file.
#[derive(Debug, Error)]
pub enum RuleFileError {
    /// The file could not be read at all.
    #[error("failed to read rule file '{}'", path.display())]
    Io {
        /// The file that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// One line of the file failed to compile.
    #[error("invalid rule at {}:{line}", path.display())]
    Pattern {
        /// The file containing the bad rule.
        path: PathBuf,
        /// 1-based line number of the bad rule.
        line: usize,
        /// The compilation failure.
        #[source]
        source: PatternError,
    },
}

/// Compiles every line of `text` into a pattern, in order.
///
/// Blank and comment lines become inert patterns rather than being dropped,
/// so the result maps one-to-one onto the input lines.
///
/// # Errors
///
/// Returns the first [`PatternError`] encountered.
pub fn parse_rules(text: &str) -> Result<Vec<Pattern>, PatternError> {
    text.lines().map(Pattern::compile).collect()
}

/// Reads a rule file from disk and compiles every line.
///
/// # Errors
///
/// Returns [`RuleFileError::Io`] when the file cannot be read and
/// [`RuleFileError::Pattern`] naming the 1-based line number when a rule
/// fails to compile.
pub fn read_rules(path: &Path) -> Result<Vec<Pattern>, RuleFileError> {
    let text = fs::read_to_string(path).map_err(|source| RuleFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    text.lines()
        .enumerate()
        .map(|(index, line)| {
            Pattern::compile(line).map_err(|source| RuleFileError::Pattern {
                path: path.to_path_buf(),
                line: index + 1,
                source,
            })
        })
        .collect()
}
