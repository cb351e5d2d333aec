//! Common test utilities

use std::path::PathBuf;

/// Owned strings from literals, for engine inputs.
#[allow(dead_code)]
pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

/// Owned paths from literals, for synthetic event batches.
#[allow(dead_code)]
pub fn paths(items: &[&str]) -> Vec<PathBuf> {
    items.iter().map(PathBuf::from).collect()
}
