//! Target classification and recursive `*.yaml` discovery.
//!
//! Discovery is an explicit `read_dir` walk so the traversal policy lives
//! here rather than in a glob library: the extension match is case-sensitive
//! `.yaml`, hidden entries are included, entries are visited in sorted name
//! order, file symlinks are followed, and the walk does not descend into
//! symlinked directories.

use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
/// A command-line target, classified by filesystem inspection.
pub enum Target {
    /// A single candidate file; existence is only verified during parsing.
    File(PathBuf),
    /// Expanded recursively into `*.yaml` candidates.
    Directory(PathBuf),
}

impl Target {
    /// Classify a path. Anything that is not a directory, including a path
    /// that does not exist, is a `File` target.
    pub fn classify(path: &Path) -> Target {
        if path.is_dir() {
            Target::Directory(path.to_path_buf())
        } else {
            Target::File(path.to_path_buf())
        }
    }
}

/// Recursively collect all `*.yaml` files under `dir`, in sorted traversal
/// order. Unreadable directories contribute nothing; path resolution has no
/// error conditions.
pub fn yaml_files_under(dir: &Path) -> Vec<PathBuf> {
    let mut found = Vec::new();
    walk(dir, &mut found);
    found
}

fn walk(dir: &Path, found: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(dir) {
        Ok(rd) => rd,
        Err(_) => return,
    };
    let mut paths: Vec<PathBuf> = entries.filter_map(|e| e.ok()).map(|e| e.path()).collect();
    paths.sort();
    for path in paths {
        let file_type = match fs::symlink_metadata(&path) {
            Ok(meta) => meta.file_type(),
            Err(_) => continue,
        };
        if file_type.is_dir() {
            walk(&path, found);
        } else if has_yaml_extension(&path) {
            // Plain file, or a symlink that resolves to one.
            if file_type.is_file() || path.is_file() {
                found.push(path);
            }
        }
    }
}

fn has_yaml_extension(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == "yaml")
}
