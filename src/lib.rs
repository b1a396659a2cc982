// src/lib.rs
//! Directory tree rendering for project documentation, and a read-only
//! mirror of the mainbot referral database.

pub mod db;
pub mod errors;
pub mod ignore_handler;
pub mod mainbot;
pub mod scan_tree;
pub mod scanner;
pub mod types;
pub mod utils;

pub use errors::{DatabaseError, TreeError};
pub use ignore_handler::{CompiledIgnorePatterns, IgnoreRule, DEFAULT_IGNORE_PATTERNS, GENERATOR_NAME};
pub use scanner::{render_tree, ProjectTree};
