//! Host abstraction: everything the explorer asks of its embedding
//! application (editor, terminal front-end, test harness).

use std::path::{Path, PathBuf};

use crate::error::AppError;

/// Completion hint for an interactive prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    File,
    Dir,
}

/// Calls the explorer makes into its host. All calls are synchronous; a
/// prompt blocks until the user answers.
pub trait Host {
    /// The host's own working directory, used to shorten opened paths.
    fn cwd(&self) -> PathBuf;

    /// Show a non-fatal error message.
    fn error(&mut self, message: &str);

    /// Ask a yes/no question.
    fn confirm(&mut self, message: &str) -> bool;

    /// Ask for a line of text. `default` is the pre-filled answer.
    fn input(&mut self, prompt: &str, default: &str, completion: Completion) -> String;

    /// Open `path` with the host command `command` (`edit`, `split`, ...).
    fn execute_path(&mut self, command: &str, path: &Path) -> Result<(), AppError>;
}
