//! `src/fs/node.rs`
//! ============================================================
//! Visible filesystem node as listed by a view.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use compact_str::CompactString;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub path: PathBuf,
    pub name: CompactString,
    pub is_dir: bool,
}

impl Node {
    /// Build a node from a path, following symlinks for the directory check.
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let meta = fs::metadata(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            name: display_name(path),
            is_dir: meta.is_dir(),
        })
    }

    #[inline]
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }
}

fn display_name(path: &Path) -> CompactString {
    path.file_name()
        .map(OsStr::to_string_lossy)
        .map_or_else(|| CompactString::from(path.to_string_lossy()), CompactString::from)
}
