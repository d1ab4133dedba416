//! Path utilities for building tool command lines.
//!
//! Tools run with their working directory set to the base path, so file
//! arguments are rewritten relative to it. That keeps directory-relative
//! options such as flake8's `--per-file-ignores` resolving correctly.

use std::path::{Component, Path, PathBuf};

/// Express `path` relative to `base`.
///
/// Relative inputs are resolved against the current directory first. Both
/// sides are normalized lexically (no symlink resolution), so `..` segments
/// are folded before comparing. Returns `.` when both name the same directory.
///
/// Examples:
/// - `/base/sub/x.py` from `/base` -> `sub/x.py`
/// - `/other/x.py` from `/base` -> `../other/x.py`
pub fn relative_to(path: &Path, base: &Path) -> PathBuf {
    let path = normalize(&absolutize(path));
    let base = normalize(&absolutize(base));

    let path_parts: Vec<Component> = path.components().collect();
    let base_parts: Vec<Component> = base.components().collect();

    let common = path_parts
        .iter()
        .zip(base_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = PathBuf::new();
    for _ in common..base_parts.len() {
        relative.push("..");
    }
    for part in &path_parts[common..] {
        relative.push(part.as_os_str());
    }

    if relative.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        relative
    }
}

fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

/// Remove `.` segments and fold `..` into their parent.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root
                if !out.pop() && !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
