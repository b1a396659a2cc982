// src/types.rs
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

// --- TreeEntry: one child of a directory being rendered ---
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    pub path: PathBuf,
    pub name: String,
    pub is_dir: bool,
    /// Symlinks are listed by what they point to but never descended into.
    #[serde(default)]
    pub is_symlink: bool,
}

impl TreeEntry {
    pub fn from_dir_entry(entry: &fs::DirEntry) -> Self {
        let path = entry.path();
        let is_symlink = entry.file_type().map(|ft| ft.is_symlink()).unwrap_or(false);
        TreeEntry {
            name: entry.file_name().to_string_lossy().to_string(),
            is_dir: path.is_dir(),
            is_symlink,
            path,
        }
    }

    pub fn should_descend(&self) -> bool {
        self.is_dir && !self.is_symlink
    }
}
