//! src/error.rs
//! ============================================================================
//! # `AppError`: Unified Error Type for Explorer Actions
//!
//! Every fallible library operation returns `Result<T, AppError>`. Handler
//! failures are never fatal: the dispatcher turns them into a message shown
//! by the host and keeps serving the next action.

use std::{io, path::PathBuf};
use thiserror::Error;

/// Unified error type for dispatcher, handlers and configuration.
#[derive(Debug, Error)]
pub enum AppError {
    /// Standard IO error, auto-converted from `io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// `cd` or `open` target is not a directory.
    #[error("{} is not directory", .0.display())]
    NotADirectory(PathBuf),

    /// Create or rename destination already present on disk.
    #[error("{} is already exists", .0.display())]
    AlreadyExists(PathBuf),

    /// Name does not resolve to a registered action.
    #[error("Unknown action: {0}")]
    UnknownAction(String),

    /// File operation specific errors
    #[error("File operation '{operation}' failed on {path:?}: {reason}")]
    FileOperationFailed {
        operation: &'static str, // "create", "remove", "rename", ...
        path: PathBuf,
        reason: String,
    },

    /// External process failure (the command behind `open`).
    #[error("External command failed: {cmd} (exit code: {code:?})\n{stderr}")]
    ExternalCmd {
        cmd: String,
        code: Option<i32>,
        stderr: String,
    },

    /// TOML config parsing error.
    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// TOML config serialization error.
    #[error("Config write error: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    /// Config file I/O error with path.
    #[error("Failed to read config file {path:?}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Any other error, with description.
    #[error("Unexpected error: {0}")]
    Other(String),
}

impl AppError {
    /// Create a file operation failure error
    pub fn file_operation_failed<P: Into<PathBuf>>(
        operation: &'static str,
        path: P,
        source: &io::Error,
    ) -> Self {
        Self::FileOperationFailed {
            operation,
            path: path.into(),
            reason: source.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_messages_follow_explorer_wording() {
        let err = AppError::NotADirectory(PathBuf::from("/etc/hosts"));
        assert_eq!(err.to_string(), "/etc/hosts is not directory");

        let err = AppError::AlreadyExists(PathBuf::from("/tmp/a"));
        assert_eq!(err.to_string(), "/tmp/a is already exists");
    }
}
