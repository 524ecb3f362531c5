//! Structured tracing for pattern compilation and matching.
//!
//! Everything here is conditionally compiled behind the `tracing` feature
//! and collapses to inline no-ops when the feature is disabled.

/// Target name for tracing events.
#[cfg(feature = "tracing")]
const PATTERN_TARGET: &str = "rsync_patterns";

/// Traces a rule being translated and compiled.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn pattern_compiled(pattern: &str, regex: &str) {
    tracing::debug!(
        target: PATTERN_TARGET,
        pattern = %pattern,
        regex = %regex,
        "pattern_compiled"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn pattern_compiled(_pattern: &str, _regex: &str) {}

/// Traces one expression evaluation against a relativised path.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn match_evaluated(pattern: &str, relative: &str, matched: bool) {
    tracing::trace!(
        target: PATTERN_TARGET,
        pattern = %pattern,
        relative = %relative,
        matched = matched,
        "match_evaluated"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn match_evaluated(_pattern: &str, _relative: &str, _matched: bool) {}

/// Traces an ancestor directory causing inherited exclusion.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn ancestor_matched(pattern: &str, ancestor: &str) {
    tracing::debug!(
        target: PATTERN_TARGET,
        pattern = %pattern,
        ancestor = %ancestor,
        "ancestor_matched"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn ancestor_matched(_pattern: &str, _ancestor: &str) {}
