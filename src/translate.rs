//! Two-stage translation from rsync rule text to a regular expression.
//!
//! [`rule_to_regex`] handles the rule-level semantics: the `- ` exclusion
//! marker, anchoring, full-path versus tail matching, and the directory
//! suffix. [`body_to_regex`] performs the character-level rewrite of the
//! remaining text, covering wildcards, escape sequences, and POSIX classes.
//! The generated expression always matches against the `/`-separated path
//! relative to the transfer root, never against an absolute path.

use crate::classes;
use crate::error::PatternError;

/// Upper bound handed to the regex engine for the compiled program size.
///
/// Rule text long enough to exceed it (for example hundreds of consecutive
/// wildcards) is rejected as a pattern-syntax error instead of exhausting
/// the engine during compilation.
pub(crate) const SIZE_LIMIT: usize = 1 << 20;

/// Translates one non-blank, non-comment rule into a full regex.
pub(crate) fn rule_to_regex(rule: &str) -> Result<String, PatternError> {
    let mut rest = rule;
    if let Some(stripped) = rest.strip_prefix("- ") {
        rest = stripped;
    }
    if rest.starts_with("+ ") {
        return Err(PatternError::UnsupportedInclude {
            pattern: rule.to_owned(),
        });
    }

    // The expression is anchored at both ends; matching never begins or
    // ends partway through a segment.
    let mut out = String::new();
    let anchored = if let Some(stripped) = rest.strip_prefix('/') {
        out.push('^');
        rest = stripped;
        true
    } else {
        // Unanchored rules may begin matching at any directory boundary,
        // including the final path segment alone.
        out.push_str("^(.*/)?");
        false
    };

    // Exactly one trailing slash marks a directory-only rule; a doubled
    // slash stays literal.
    let dir_only = rest.ends_with('/') && !rest.ends_with("//");
    let body = if dir_only { &rest[..rest.len() - 1] } else { rest };

    // Multi-segment and double-star rules are evaluated against the whole
    // relative path, not merely its last segment.
    if body.contains('/') || rest.contains("**") {
        out.push_str("(^|.*/)");
    }

    out.push_str(&body_to_regex(rule, body)?);

    if anchored {
        // An anchored rule still matches descendants of the named prefix.
        out.push_str("($|/.*)");
        if dir_only {
            out.push('?');
        }
    } else if dir_only {
        // Also match the bare directory path itself, not only its contents.
        out.push_str("(/.*)?");
    }

    out.push('$');
    Ok(out)
}

/// Rewrites rule text into a regex fragment, one character at a time.
///
/// `rule` is the original rule line, kept only for error reporting.
fn body_to_regex(rule: &str, body: &str) -> Result<String, PatternError> {
    // Without any wildcard character in the rule, rsync treats every
    // backslash as a literal.
    let has_wildcards = body.contains(['*', '?', '[']);

    let chars: Vec<char> = body.chars().collect();
    let mut out = String::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            '*' => {
                if chars.get(i + 1) == Some(&'*') {
                    out.push_str(".*");
                    i += 2;
                } else {
                    // A single star never crosses a path separator.
                    out.push_str("[^/]*");
                    i += 1;
                }
            }
            '\\' => {
                out.push('\\');
                if has_wildcards {
                    match chars.get(i + 1) {
                        Some(&next) if is_escapable(next) => {
                            // The escape means the same thing in rsync and
                            // regex; keep it as-is.
                            out.push(next);
                            i += 2;
                        }
                        Some(&next) => {
                            // The backslash escapes nothing in rsync, so it
                            // must survive as a literal backslash followed
                            // by a literal copy of the next character.
                            out.push('\\');
                            push_literal(&mut out, next);
                            i += 2;
                        }
                        None => {
                            out.push('\\');
                            i += 1;
                        }
                    }
                } else {
                    out.push('\\');
                    i += 1;
                }
            }
            '?' => {
                out.push('.');
                i += 1;
            }
            '[' => {
                if let Some((expression, end)) = posix_token(&chars, i, rule)? {
                    out.push_str(expression);
                    i = end;
                } else {
                    // A bare bracket opens a character class in both
                    // syntaxes; the regex engine validates it.
                    out.push('[');
                    i += 1;
                }
            }
            _ => {
                push_literal(&mut out, c);
                i += 1;
            }
        }
    }

    Ok(out)
}

/// Characters whose backslash escapes carry over from rsync to regex.
const fn is_escapable(c: char) -> bool {
    matches!(c, '*' | '?' | '[' | '-' | ']' | '#' | ';' | '\\' | '/')
}

/// Appends `c`, escaping it when it is a regex metacharacter with no
/// special meaning in rsync.
fn push_literal(out: &mut String, c: char) {
    if matches!(c, '.' | '^' | '$' | '+' | '{' | '}' | '|' | '(' | ')') {
        out.push('\\');
    }
    out.push(c);
}

/// Recognises a `[[:NAME:]]` token starting at `start`.
///
/// Returns the class bracket expression and the index just past the token,
/// or `None` when the text is not a POSIX token at all (in which case the
/// bracket falls through as a plain character class opener). An
/// unknown class name is a pattern-syntax error.
fn posix_token(
    chars: &[char],
    start: usize,
    rule: &str,
) -> Result<Option<(&'static str, usize)>, PatternError> {
    if chars.get(start + 1) != Some(&'[') || chars.get(start + 2) != Some(&':') {
        return Ok(None);
    }
    let mut j = start + 3;
    while j + 2 < chars.len() {
        if chars[j] == ':' && chars[j + 1] == ']' && chars[j + 2] == ']' {
            let name: String = chars[start + 3..j].iter().collect();
            return match classes::lookup(&name) {
                Some(expression) => Ok(Some((expression, j + 3))),
                None => Err(PatternError::UnknownPosixClass {
                    pattern: rule.to_owned(),
                    class: name,
                }),
            };
        }
        j += 1;
    }
    Ok(None)
}
