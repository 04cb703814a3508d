//! `src/model/explorer_state.rs`
//! ============================================================================
//! # ExplorerState: per-session explorer state
//!
//! Holds the explorer's working directory and the few settings the action
//! handlers consult. Owned by the front-end for the whole session and handed
//! to every dispatch by mutable reference.

use std::path::PathBuf;

use compact_str::CompactString;

use crate::config::{Config, DEFAULT_OPEN_COMMAND};

#[derive(Debug, Clone)]
pub struct ExplorerState {
    /// Directory the explorer is showing.
    pub cwd: PathBuf,

    /// Position of this explorer among those hosted by one view.
    pub index: usize,

    /// Command `open` falls back to when called without arguments.
    pub open_command: CompactString,

    pub confirm_remove: bool,
}

impl ExplorerState {
    #[must_use]
    pub fn new(cwd: PathBuf) -> Self {
        Self {
            cwd,
            index: 0,
            open_command: CompactString::const_new(DEFAULT_OPEN_COMMAND),
            confirm_remove: true,
        }
    }

    #[must_use]
    pub fn from_config(cwd: PathBuf, config: &Config) -> Self {
        Self {
            open_command: CompactString::new(&config.open_command),
            confirm_remove: config.confirm_remove,
            ..Self::new(cwd)
        }
    }
}
