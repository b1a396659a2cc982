// src/errors.rs
use std::path::PathBuf;
use thiserror::Error;

/// Failures of a tree generation. Traversal problems never show up here,
/// they are rendered inline as marker lines.
#[derive(Error, Debug)]
pub enum TreeError {
    /// The tree was rendered but could not be saved. `tree` still holds the
    /// full rendering so callers can fall back to printing it.
    #[error("Failed to write tree to '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        tree: String,
    },
}

impl TreeError {
    /// The rendered tree carried by the error, if any.
    pub fn tree(&self) -> Option<&str> {
        match self {
            Self::Write { tree, .. } => Some(tree),
        }
    }
}

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Database connection error: {0}")]
    Connection(String),

    #[error("Query execution error: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("Record not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, DatabaseError>;
