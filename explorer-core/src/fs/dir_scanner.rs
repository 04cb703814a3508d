//! ``src/fs/dir_scanner.rs``
//!
//! # Directory Scanner: synchronous listing for the view
//!
//! Lists one directory level and returns nodes sorted directories first,
//! then by name.

use std::cmp::Ordering;
use std::fs;
use std::path::Path;

use tracing::{debug, instrument};

use crate::error::AppError;
use crate::fs::node::Node;

/// Scans `path` and returns its sorted children.
///
/// Entries whose metadata cannot be read (dangling symlinks, races with
/// deletion) are skipped.
#[instrument(level = "debug", skip(path), fields(path = %path.display()))]
pub fn scan_dir(path: &Path, show_hidden: bool) -> Result<Vec<Node>, AppError> {
    let mut entries: Vec<Node> = Vec::new();

    for entry in fs::read_dir(path)? {
        let entry_path = entry?.path();

        match Node::from_path(&entry_path) {
            Ok(node) if show_hidden || !node.is_hidden() => entries.push(node),
            Ok(_) => {}
            Err(e) => debug!("scan_dir: skipping {}: {}", entry_path.display(), e),
        }
    }

    entries.sort_by(|a, b| match (a.is_dir, b.is_dir) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
    });

    debug!("scan_dir: {} entries", entries.len());
    Ok(entries)
}
