// src/scan_tree.rs
// Recursive directory walk that renders tree lines.

use crate::ignore_handler::CompiledIgnorePatterns;
use crate::types::TreeEntry;
use std::cmp::Ordering;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

pub const MID_CONNECTOR: &str = "├── ";
pub const LAST_CONNECTOR: &str = "└── ";
pub const MID_CONTINUATION: &str = "│   ";
pub const LAST_CONTINUATION: &str = "    ";

pub const PERMISSION_DENIED_MARKER: &str = "[Permission Denied]";

// Directories first, then case-insensitive by name. Exact name breaks ties so
// the order never depends on what read_dir happened to return.
pub fn compare_entries(a: &TreeEntry, b: &TreeEntry) -> Ordering {
    match (a.is_dir, b.is_dir) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a
            .name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name)),
    }
}

/// Lists the visible children of `directory`, already sorted.
pub fn read_visible_children(
    directory: &Path,
    ignores: &CompiledIgnorePatterns,
) -> io::Result<Vec<TreeEntry>> {
    let mut children = Vec::new();
    for entry_result in fs::read_dir(directory)? {
        let entry = TreeEntry::from_dir_entry(&entry_result?);
        if ignores.is_ignored(&entry.name) {
            debug!(path = %entry.path.display(), "ignored");
            continue;
        }
        children.push(entry);
    }
    children.sort_by(compare_entries);
    Ok(children)
}

/// Formats the marker line that replaces a directory's children when it
/// cannot be listed.
pub fn error_marker(error: &io::Error) -> String {
    match error.kind() {
        io::ErrorKind::PermissionDenied => PERMISSION_DENIED_MARKER.to_string(),
        _ => format!("[Error: {}]", error),
    }
}

/// Appends one line per visible entry below `directory` to `lines`.
/// Listing failures become a single marker line; nothing is propagated.
pub fn build_tree(
    directory: &Path,
    prefix: &str,
    ignores: &CompiledIgnorePatterns,
    lines: &mut Vec<String>,
) {
    let children = match read_visible_children(directory, ignores) {
        Ok(children) => children,
        Err(e) => {
            warn!("Could not list {}: {}", directory.display(), e);
            // The marker is the only line under this directory, so it is its last sibling.
            lines.push(format!("{}{}{}", prefix, LAST_CONNECTOR, error_marker(&e)));
            return;
        }
    };

    let total = children.len();
    for (index, child) in children.iter().enumerate() {
        let is_last = index + 1 == total;
        let connector = if is_last { LAST_CONNECTOR } else { MID_CONNECTOR };
        lines.push(format!("{}{}{}", prefix, connector, child.name));

        if child.should_descend() {
            let continuation = if is_last { LAST_CONTINUATION } else { MID_CONTINUATION };
            build_tree(&child.path, &format!("{}{}", prefix, continuation), ignores, lines);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn entry(name: &str, is_dir: bool) -> TreeEntry {
        TreeEntry { path: PathBuf::from(name), name: name.to_string(), is_dir, is_symlink: false }
    }

    #[test]
    fn directories_sort_before_files_case_insensitively() {
        let mut entries = vec![
            entry("b.txt", false),
            entry("Zeta", true),
            entry("A.md", false),
            entry("alpha", true),
        ];
        entries.sort_by(compare_entries);
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "Zeta", "A.md", "b.txt"]);
    }

    #[test]
    fn case_only_differences_are_ordered_deterministically() {
        let mut entries = vec![entry("readme", false), entry("README", false)];
        entries.sort_by(compare_entries);
        assert_eq!(entries[0].name, "README");
        assert_eq!(entries[1].name, "readme");
    }

    #[test]
    fn permission_errors_get_dedicated_marker() {
        let denied = io::Error::from(io::ErrorKind::PermissionDenied);
        assert_eq!(error_marker(&denied), "[Permission Denied]");

        let other = io::Error::new(io::ErrorKind::Other, "disk on fire");
        assert_eq!(error_marker(&other), "[Error: disk on fire]");
    }

    #[test]
    fn missing_directory_renders_error_marker() {
        let mut lines = Vec::new();
        let ignores = CompiledIgnorePatterns::with_defaults();
        build_tree(Path::new("/definitely/not/here"), "", &ignores, &mut lines);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("└── [Error: "), "got {:?}", lines[0]);
    }
}
