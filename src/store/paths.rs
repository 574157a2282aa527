//! Lexical path helpers for annotation rows
//!
//! Paths are resolved without touching the filesystem: symlinks are not
//! followed and the referenced files need not exist.

use std::path::{Component, Path, PathBuf};

/// Resolve `path` against `cwd` and fold `.`/`..` components.
#[must_use]
pub fn absolutize(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        clean_path(path)
    } else {
        clean_path(&cwd.join(path))
    }
}

/// Fold `.` and `..` components of a path.
///
/// `..` at the root stays at the root.
#[must_use]
pub fn clean_path(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(prefix) => {
                cleaned = PathBuf::from(prefix.as_os_str());
            }
            Component::RootDir => cleaned.push(Component::RootDir),
            Component::CurDir => {}
            Component::ParentDir => match cleaned.components().next_back() {
                Some(Component::Normal(_)) => {
                    cleaned.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => cleaned.push(".."),
            },
            Component::Normal(part) => cleaned.push(part),
        }
    }
    cleaned
}

/// Express absolute `target` relative to absolute directory `base`.
///
/// Returns `.` when both are the same directory. When the two share no
/// root (different Windows drives) the absolute target is returned as-is.
#[must_use]
pub fn relative_to(target: &Path, base: &Path) -> PathBuf {
    let target_parts: Vec<Component<'_>> = target.components().collect();
    let base_parts: Vec<Component<'_>> = base.components().collect();

    if target_parts.first() != base_parts.first() {
        return target.to_path_buf();
    }

    let common = target_parts
        .iter()
        .zip(&base_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = PathBuf::new();
    for _ in common..base_parts.len() {
        relative.push("..");
    }
    for part in &target_parts[common..] {
        relative.push(part);
    }

    if relative.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        relative
    }
}
