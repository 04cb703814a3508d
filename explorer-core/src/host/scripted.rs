//! Host with pre-recorded answers. Used by tests and by embedders that drive
//! the explorer non-interactively.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use super::traits::{Completion, Host};
use crate::error::AppError;

#[derive(Debug, Default)]
pub struct ScriptedHost {
    cwd: PathBuf,
    inputs: VecDeque<String>,
    confirms: VecDeque<bool>,
    pub prompts: Vec<String>,
    pub errors: Vec<String>,
    pub executed: Vec<(String, PathBuf)>,
}

impl ScriptedHost {
    #[must_use]
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            ..Self::default()
        }
    }

    /// Queue an answer for the next `input` call.
    #[must_use]
    pub fn with_input(mut self, answer: impl Into<String>) -> Self {
        self.inputs.push_back(answer.into());
        self
    }

    /// Queue an answer for the next `confirm` call.
    #[must_use]
    pub fn with_confirm(mut self, answer: bool) -> Self {
        self.confirms.push_back(answer);
        self
    }

    pub fn push_input(&mut self, answer: impl Into<String>) {
        self.inputs.push_back(answer.into());
    }
}

impl Host for ScriptedHost {
    fn cwd(&self) -> PathBuf {
        self.cwd.clone()
    }

    fn error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }

    // An empty queue answers "no".
    fn confirm(&mut self, message: &str) -> bool {
        self.prompts.push(message.to_string());
        self.confirms.pop_front().unwrap_or(false)
    }

    // An empty queue answers with an empty line.
    fn input(&mut self, prompt: &str, _default: &str, _completion: Completion) -> String {
        self.prompts.push(prompt.to_string());
        self.inputs.pop_front().unwrap_or_default()
    }

    fn execute_path(&mut self, command: &str, path: &Path) -> Result<(), AppError> {
        self.executed.push((command.to_string(), path.to_path_buf()));
        Ok(())
    }
}
