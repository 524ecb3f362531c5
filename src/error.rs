//! Error types for pattern compilation and path matching.

use std::path::PathBuf;

use thiserror::Error;

/// Error produced when a rule cannot be compiled into a matcher.
///
/// Every variant carries the offending rule text so callers can point at the
/// exact line of a rule file. Compilation failures inside the regex engine,
/// including rules large enough to exhaust its size limit, are wrapped rather
/// than propagated raw.
#[derive(Debug, Error)]
pub enum PatternError {
    /// The rule begins with the `+ ` include marker, which is unsupported.
    #[error("include rules are unsupported (cannot start with '+ '): '{pattern}'")]
    UnsupportedInclude {
        /// The offending rule text.
        pattern: String,
    },
    /// A `[[:NAME:]]` token named a class absent from the POSIX table.
    #[error("unknown POSIX class '{class}' in '{pattern}'")]
    UnknownPosixClass {
        /// The offending rule text.
        pattern: String,
        /// The unrecognised class name.
        class: String,
    },
    /// The generated expression was rejected by the regex engine.
    #[error("failed to compile pattern '{pattern}'")]
    Regex {
        /// The offending rule text.
        pattern: String,
        /// The underlying engine error.
        #[source]
        source: regex::Error,
    },
}

impl PatternError {
    /// Returns the offending rule text.
    #[must_use]
    pub fn pattern(&self) -> &str {
        match self {
            Self::UnsupportedInclude { pattern }
            | Self::UnknownPosixClass { pattern, .. }
            | Self::Regex { pattern, .. } => pattern,
        }
    }
}

/// Error produced when match arguments violate the absolute-path
/// preconditions.
#[derive(Debug, Error)]
pub enum MatchError {
    /// The transfer root supplied at match time was not absolute.
    #[error("transfer root '{}' must be absolute", .0.display())]
    RelativeRoot(PathBuf),
    /// The single-argument form was given a relative candidate path.
    #[error("path '{}' must be absolute when no transfer root is supplied", .0.display())]
    RelativePath(PathBuf),
}
