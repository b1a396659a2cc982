// src/scanner.rs
// Tree generation entry point: resolves the root, extends the ignore set for
// the current call and saves the result.

use crate::errors::TreeError;
use crate::ignore_handler::CompiledIgnorePatterns;
use crate::scan_tree::build_tree;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Generates a textual tree of a project directory, skipping noise such as
/// VCS metadata, caches and build output.
///
/// The generator holds no per-call state; `generate_tree` takes `&self` and
/// may be called from several threads at once.
#[derive(Debug, Clone)]
pub struct ProjectTree {
    root_dir: PathBuf,
    ignore_patterns: CompiledIgnorePatterns,
}

impl ProjectTree {
    /// `ignore_patterns` replaces the built-in list when given.
    pub fn new(root_dir: impl AsRef<Path>, ignore_patterns: Option<&[String]>) -> Self {
        let root_dir = root_dir.as_ref();
        // Fall back to the path as given; traversal reports it inline if it is bad.
        let root_dir = fs::canonicalize(root_dir).unwrap_or_else(|_| root_dir.to_path_buf());
        let ignore_patterns = match ignore_patterns {
            Some(patterns) if !patterns.is_empty() => CompiledIgnorePatterns::new(patterns),
            _ => CompiledIgnorePatterns::with_defaults(),
        };
        ProjectTree { root_dir, ignore_patterns }
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    pub fn ignore_patterns(&self) -> &CompiledIgnorePatterns {
        &self.ignore_patterns
    }

    /// Renders the tree. With `output_file`, the result is also written there
    /// and that file's name is hidden from this rendering.
    pub fn generate_tree(&self, output_file: Option<&Path>) -> Result<String, TreeError> {
        let output_name = output_file
            .and_then(|p| p.file_name())
            .map(|name| name.to_string_lossy().to_string());
        let ignores = match &output_name {
            Some(name) => self.ignore_patterns.with_exact_name(name),
            None => self.ignore_patterns.clone(),
        };

        info!("Generating tree for {}", self.root_dir.display());
        let tree = render_tree(&self.root_dir, &ignores);

        if let Some(path) = output_file {
            if let Err(source) = fs::write(path, &tree) {
                return Err(TreeError::Write { path: path.to_path_buf(), source, tree });
            }
            info!("Tree saved to {}", path.display());
        }
        Ok(tree)
    }
}

impl Default for ProjectTree {
    fn default() -> Self {
        ProjectTree::new(".", None)
    }
}

/// Renders the tree below `root` with a fixed ignore set. No side effects.
pub fn render_tree(root: &Path, ignores: &CompiledIgnorePatterns) -> String {
    let mut lines = Vec::new();
    build_tree(root, "", ignores, &mut lines);
    debug!("Rendered {} tree lines", lines.len());
    lines.join("\n")
}
