//! Filesystem query collaborators.
//!
//! Thin wrappers over `std::fs` that consume a [`UniPath`]'s native form.
//! All of them follow the no-throw contract of their C ancestry: failure
//! collapses to `false`, `None`, `0` or an empty listing, never an error
//! value. The one piece of logic layered on top is device-path handling:
//! `/dev/null` and `/dev/tty` always exist, contrary to what a real
//! filesystem query would report on some hosts.

use std::fs::Metadata;
use std::path::PathBuf;

use crate::UniPath;

/// Checks whether `path` exists. Device paths are always reported as
/// existing without querying the filesystem.
pub fn exists(path: &UniPath) -> bool {
    if path.is_device() {
        return true;
    }
    std::fs::exists(path.as_str()).unwrap_or(false)
}

/// Metadata for `path`, or `None` if the query fails for any reason.
pub fn stat(path: &UniPath) -> Option<Metadata> {
    std::fs::metadata(path.as_str()).ok()
}

/// Size of the file at `path` in bytes; 0 when missing or unreadable.
pub fn file_size(path: &UniPath) -> u64 {
    stat(path).map(|meta| meta.len()).unwrap_or(0)
}

pub fn is_directory(path: &UniPath) -> bool {
    stat(path).map(|meta| meta.is_dir()).unwrap_or(false)
}

/// Creates the directory at `path`, parents included. Returns true when the
/// directory is present afterwards, including when it already existed.
/// The existence pre-check matters on Windows, where create calls are
/// expensive even for directories that are already there.
pub fn create_directory(path: &UniPath) -> bool {
    if exists(path) && is_directory(path) {
        return true;
    }
    match std::fs::create_dir_all(path.as_str()) {
        Ok(()) => true,
        Err(e) => e.kind() == std::io::ErrorKind::AlreadyExists,
    }
}

/// Best-effort removal of a file or empty directory; errors are ignored.
pub fn remove(path: &UniPath) {
    if is_directory(path) {
        let _ = std::fs::remove_dir(path.as_str());
    } else {
        let _ = std::fs::remove_file(path.as_str());
    }
}

/// Resolves `path` against the current working directory and normalizes it
/// lexically (`.` dropped, `..` folded into its parent). No filesystem
/// access beyond the CWD lookup; symlinks are not resolved.
pub fn absolute(path: &UniPath) -> UniPath {
    if path.is_absolute() {
        return UniPath::from(normalize_lexically(path.uni_str()));
    }
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("/"));
    let joined = UniPath::from(cwd.as_path()).join(path.uni_str());
    UniPath::from(normalize_lexically(joined.uni_str()))
}

/// Shallow listing of the directory at `path`; empty when the path does not
/// exist or is not readable. Entries come back re-normalized.
pub fn directory_iterator(path: &UniPath) -> Vec<UniPath> {
    if !exists(path) {
        return Vec::new();
    }
    let Ok(entries) = std::fs::read_dir(path.as_str()) else {
        return Vec::new();
    };
    entries
        .flatten()
        .map(|entry| UniPath::from(entry.path().as_path()))
        .collect()
}

/// Lexical normalization over universal form: `.` segments vanish, `..`
/// removes the previous segment (or vanishes at the root, like the component
/// walk in any lexical normalizer).
fn normalize_lexically(uni: &str) -> String {
    let rooted = uni.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();
    for seg in uni.split('/') {
        match seg {
            "" | "." => {}
            ".." => {
                parts.pop();
            }
            _ => parts.push(seg),
        }
    }
    let mut result = String::with_capacity(uni.len());
    if rooted {
        result.push('/');
    }
    result.push_str(&parts.join("/"));
    result
}
