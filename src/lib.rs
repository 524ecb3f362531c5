#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `rsync-patterns` compiles rsync-style exclude rules into reusable path
//! matchers. One rule per line of an exclude file becomes one [`Pattern`]:
//! blank lines and `#`/`;` comments compile to inert variants that never
//! match, while everything else is translated into a regular expression
//! implementing rsync's documented pattern-matching semantics, including
//! wildcards (`*`, `**`, `?`), POSIX character classes, escape sequences,
//! anchoring (leading `/`), and directory-only rules (trailing `/`) with
//! ancestor inheritance. Include (`+ `) operations and rsync's
//! negation/merge combinators are out of scope.
//!
//! # Design
//!
//! - [`Pattern::compile`] classifies raw rule text and, for real rules,
//!   drives a two-stage translation: rule-level anchoring and suffix logic
//!   wrapped around a character-level rewrite of the body. The result is an
//!   immutable value intended to be compiled once and matched many times.
//! - [`Pattern::matches`] resolves the candidate against an absolute
//!   transfer root, relativises it to `/`-separated text, and evaluates the
//!   expression. Directory-only rules walk the candidate's ancestors up to
//!   the root and probe the filesystem to reject symlinked directories.
//! - [`PatternList`] holds an ordered exclude list compiled from a whole
//!   rule file; [`rules::read_rules`] and [`rules::parse_rules`] load one.
//!
//! # Invariants
//!
//! - The transfer root must be absolute at match time; the single-argument
//!   form additionally requires an absolute candidate. Violations are
//!   [`MatchError`]s, never silently corrected.
//! - Compiled patterns compare equal exactly when their generated
//!   expressions are textually identical; blank patterns are all
//!   interchangeable and comments compare by their original text.
//! - Patterns hold no mutable state and are safe for unsynchronised
//!   concurrent reuse.
//!
//! # Errors
//!
//! [`Pattern::compile`] reports [`PatternError`] for unsupported include
//! markers, unknown POSIX class names, and expressions the regex engine
//! rejects, including rule text large enough to exhaust the engine's size
//! limit. The error always carries the offending rule text.
//!
//! # Examples
//!
//! ```
//! use rsync_patterns::Pattern;
//! use std::path::Path;
//!
//! let pattern = Pattern::compile("*.java")?;
//! let root = Path::new("/srv/code");
//!
//! assert!(pattern.matches(root, Path::new("src/Main.java"))?);
//! assert!(!pattern.matches(root, Path::new("src/Main.class"))?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod classes;
mod error;
mod filter;
mod list;
mod matcher;
mod pattern;
pub mod rules;
mod trace;
mod translate;

pub use error::{MatchError, PatternError};
pub use filter::PathFilter;
pub use list::PatternList;
pub use pattern::{CompiledPattern, Pattern};
pub use rules::{RuleFileError, parse_rules, read_rules};
