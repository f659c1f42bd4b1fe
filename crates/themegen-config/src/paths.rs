//! Resolution of configured paths against the project root.

use crate::schema::PathsConfig;
use std::path::{Component, Path, PathBuf};

/// Name of the optional config file looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "themegen.toml";

/// Absolute, lexically normalized locations of every file the generator
/// touches. Two fields are equal exactly when they name the same path
/// (symlinks aside).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub tokens: PathBuf,
    pub qml: PathBuf,
    pub css: PathBuf,
}

/// Resolve each configured path against `root`. Absolute paths are kept.
///
/// A relative root is made absolute against the working directory, and
/// `.`/`..` components are folded away.
pub fn resolve_paths(root: &Path, paths: &PathsConfig) -> ResolvedPaths {
    let root = std::path::absolute(root).unwrap_or_else(|_| root.to_path_buf());
    ResolvedPaths {
        tokens: resolve(&root, &paths.tokens),
        qml: resolve(&root, &paths.qml),
        css: resolve(&root, &paths.css),
    }
}

/// Default config file location for a project root.
pub fn default_config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE_NAME)
}

fn resolve(root: &Path, value: &str) -> PathBuf {
    let path = Path::new(value);
    if path.is_absolute() {
        normalize(path)
    } else {
        normalize(&root.join(path))
    }
}

/// Fold `.` and `..` components without touching the filesystem.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let popped = matches!(out.components().next_back(), Some(Component::Normal(_)))
                    && out.pop();
                if !popped && !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}
