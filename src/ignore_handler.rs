// src/ignore_handler.rs
use tracing::warn;

/// Name the generator always hides from its own output.
pub const GENERATOR_NAME: &str = "project-tree";

/// Built-in ignore list used when no custom patterns are given.
pub const DEFAULT_IGNORE_PATTERNS: &[&str] = &[
    "__pycache__",
    "venv",
    ".venv",
    ".git",
    ".idea",
    "node_modules",
    "dist",
    "build",
    "*.pyc",
    "*.pyo",
    "*.egg-info",
    ".DS_Store",
    ".pytest_cache",
    ".tox",
    "*.log",
    "*.cache",
    "*.bak",
];

/// A single exclusion rule, evaluated against an entry's file name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IgnoreRule {
    /// Matches a name that is exactly this string.
    ExactName(String),
    /// Written `*<suffix>`; matches any name ending with the suffix.
    SuffixWildcard(String),
}

impl IgnoreRule {
    pub fn parse(pattern: &str) -> Self {
        match pattern.strip_prefix('*') {
            Some(suffix) => IgnoreRule::SuffixWildcard(suffix.to_string()),
            None => IgnoreRule::ExactName(pattern.to_string()),
        }
    }

    pub fn matches(&self, name: &str) -> bool {
        match self {
            IgnoreRule::ExactName(exact) => name == exact,
            IgnoreRule::SuffixWildcard(suffix) => name.ends_with(suffix.as_str()),
        }
    }
}

/// Immutable set of ignore rules for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledIgnorePatterns {
    rules: Vec<IgnoreRule>,
}

impl CompiledIgnorePatterns {
    /// Compiles `patterns` as given, plus [`GENERATOR_NAME`]. Duplicates are dropped.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Self {
        let mut compiled = CompiledIgnorePatterns { rules: Vec::with_capacity(patterns.len() + 1) };
        for pattern in patterns {
            let pattern = pattern.as_ref();
            if pattern == "*" {
                warn!("ignore pattern '*' matches every entry; the tree will be empty");
            }
            compiled.push(IgnoreRule::parse(pattern));
        }
        compiled.push(IgnoreRule::ExactName(GENERATOR_NAME.to_string()));
        compiled
    }

    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_IGNORE_PATTERNS)
    }

    /// Returns a copy that additionally hides `name`. The receiver is untouched,
    /// so each generation call can extend the set locally.
    pub fn with_exact_name(&self, name: &str) -> Self {
        let mut extended = self.clone();
        extended.push(IgnoreRule::ExactName(name.to_string()));
        extended
    }

    pub fn is_ignored(&self, name: &str) -> bool {
        self.rules.iter().any(|rule| rule.matches(name))
    }

    pub fn rules(&self) -> &[IgnoreRule] {
        &self.rules
    }

    fn push(&mut self, rule: IgnoreRule) {
        if !self.rules.contains(&rule) {
            self.rules.push(rule);
        }
    }
}

impl Default for CompiledIgnorePatterns {
    fn default() -> Self {
        Self::with_defaults()
    }
}
