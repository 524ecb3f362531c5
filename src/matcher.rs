//! Path evaluation against compiled patterns.
//!
//! Candidates are resolved against the transfer root, relativised, and
//! normalised to `/`-separated text before the expression runs. Directory-only
//! rules additionally walk the candidate's ancestors (a matching parent
//! directory causes inherited exclusion of everything beneath it) and probe
//! the filesystem to reject symlinked directories. The ancestor walk is an
//! explicit loop bounded at the transfer root, so deep trees never grow the
//! call stack.

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::error::MatchError;
use crate::pattern::CompiledPattern;
use crate::trace;

/// Evaluates `pattern` against `path` resolved under `root`.
///
/// `recursive` selects the full algorithm; the ancestor walk re-enters with
/// it cleared so ancestors are only tested against the expression itself.
pub(crate) fn matches(
    pattern: &CompiledPattern,
    root: &Path,
    path: &Path,
    recursive: bool,
) -> Result<bool, MatchError> {
    if !root.is_absolute() {
        return Err(MatchError::RelativeRoot(root.to_path_buf()));
    }

    let resolved = normalize(&root.join(path));
    let relative = relative_text(root, &resolved);

    let matched = pattern.regex().is_match(&relative);
    trace::match_evaluated(pattern.text(), &relative, matched);
    if !matched {
        return Ok(false);
    }

    if recursive && pattern.is_dir_only() {
        let mut ancestor = resolved.parent();
        while let Some(current) = ancestor {
            if !current.starts_with(root) {
                break;
            }
            let ancestor_relative = relative_text(root, current);
            if pattern.regex().is_match(&ancestor_relative) {
                // A matching parent directory excludes everything below it.
                trace::ancestor_matched(pattern.text(), &ancestor_relative);
                return Ok(true);
            }
            ancestor = current.parent();
        }

        // The rule named the path itself. A symlink pointing at a directory
        // never satisfies a directory-only rule; anything else, including a
        // path that does not exist on disk, falls through to a match.
        if let Ok(metadata) = fs::symlink_metadata(&resolved) {
            if metadata.file_type().is_symlink() && fs::metadata(&resolved).is_ok_and(|m| m.is_dir())
            {
                return Ok(false);
            }
        }
    }

    Ok(true)
}

/// Lexically normalises `.` and `..` components after resolution.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}

/// Renders `path` relative to `root` as `/`-separated text.
///
/// A candidate resolving outside the root is stepped up through `..`
/// segments, one per root component past the shared prefix, so the text
/// never carries the root's own absolute form.
fn relative_text(root: &Path, path: &Path) -> String {
    if let Ok(relative) = path.strip_prefix(root) {
        return relative.to_string_lossy().replace('\\', "/");
    }

    let root_components: Vec<Component<'_>> = root.components().collect();
    let path_components: Vec<Component<'_>> = path.components().collect();
    let shared = root_components
        .iter()
        .zip(path_components.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts = Vec::new();
    for _ in shared..root_components.len() {
        parts.push(String::from(".."));
    }
    for component in &path_components[shared..] {
        parts.push(component.as_os_str().to_string_lossy().replace('\\', "/"));
    }
    parts.join("/")
}

/// Returns the filesystem-root component of an absolute path, used as the
/// implied transfer root by the single-argument match form.
pub(crate) fn filesystem_root(path: &Path) -> PathBuf {
    path.components()
        .take_while(|component| matches!(component, Component::Prefix(_) | Component::RootDir))
        .collect()
}
