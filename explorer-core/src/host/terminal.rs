//! Line-oriented host over a reader/writer pair (stdin/stdout in the
//! `explorer` binary).

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{info, warn};

use super::traits::{Completion, Host};
use crate::config::DEFAULT_OPEN_COMMAND;
use crate::error::AppError;

pub struct TerminalHost<R, W> {
    reader: R,
    writer: W,
    cwd: PathBuf,
    editor_cmd: String,
}

impl TerminalHost<io::StdinLock<'static>, io::Stdout> {
    #[must_use]
    pub fn stdio(cwd: PathBuf, editor_cmd: String) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), cwd, editor_cmd)
    }
}

impl<R: BufRead, W: Write> TerminalHost<R, W> {
    pub fn new(reader: R, writer: W, cwd: PathBuf, editor_cmd: String) -> Self {
        Self {
            reader,
            writer,
            cwd,
            editor_cmd,
        }
    }

    /// Print `prompt` and read one line without its terminator. `None` at
    /// end of input.
    pub fn read_line(&mut self, prompt: &str) -> Option<String> {
        self.write(format_args!("{prompt}"));
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => {
                warn!("read_line: {}", e);
                None
            }
        }
    }

    pub fn print_lines<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.write(format_args!("{}\n", line.as_ref()));
        }
    }

    fn write(&mut self, args: std::fmt::Arguments<'_>) {
        if let Err(e) = self
            .writer
            .write_fmt(args)
            .and_then(|()| self.writer.flush())
        {
            warn!("terminal write failed: {}", e);
        }
    }

    /// Split a host command into program and leading arguments. `edit`
    /// maps to the configured editor.
    fn command_line(&self, command: &str) -> Vec<String> {
        let command = if command.is_empty() || command == DEFAULT_OPEN_COMMAND {
            self.editor_cmd.as_str()
        } else {
            command
        };
        command.split_whitespace().map(str::to_string).collect()
    }
}

impl<R: BufRead, W: Write> Host for TerminalHost<R, W> {
    fn cwd(&self) -> PathBuf {
        self.cwd.clone()
    }

    fn error(&mut self, message: &str) {
        self.write(format_args!("error: {message}\n"));
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.read_line(&format!("{message} [y/N] "))
            .is_some_and(|answer| matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
    }

    fn input(&mut self, prompt: &str, default: &str, _completion: Completion) -> String {
        let prompt = if default.is_empty() {
            prompt.to_string()
        } else {
            format!("{prompt}[{default}] ")
        };
        match self.read_line(&prompt) {
            Some(answer) if !answer.is_empty() => answer,
            Some(_) => default.to_string(),
            None => String::new(),
        }
    }

    fn execute_path(&mut self, command: &str, path: &Path) -> Result<(), AppError> {
        let argv = self.command_line(command);
        let Some((program, args)) = argv.split_first() else {
            return Err(AppError::ExternalCmd {
                cmd: command.to_string(),
                code: None,
                stderr: "empty command".to_string(),
            });
        };

        info!("execute_path: {} {}", argv.join(" "), path.display());
        let status = Command::new(program)
            .args(args)
            .arg(path)
            .current_dir(&self.cwd)
            .status()
            .map_err(|e| AppError::ExternalCmd {
                cmd: program.clone(),
                code: None,
                stderr: e.to_string(),
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(AppError::ExternalCmd {
                cmd: argv.join(" "),
                code: status.code(),
                stderr: String::new(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn host(input: &str) -> TerminalHost<Cursor<Vec<u8>>, Vec<u8>> {
        TerminalHost::new(
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
            PathBuf::from("/"),
            "vi -R".to_string(),
        )
    }

    fn output(host: &TerminalHost<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8_lossy(&host.writer).into_owned()
    }

    #[test]
    fn confirm_accepts_yes_only() {
        let mut h = host("y\nno\n");
        assert!(h.confirm("Delete?"));
        assert!(!h.confirm("Delete?"));
        assert!(!h.confirm("Delete?")); // end of input
        assert!(output(&h).contains("Delete? [y/N] "));
    }

    #[test]
    fn input_falls_back_to_default_on_empty_line() {
        let mut h = host("\nnew.txt\n");
        assert_eq!(h.input("Name: ", "old.txt", Completion::File), "old.txt");
        assert_eq!(h.input("Name: ", "old.txt", Completion::File), "new.txt");
        assert_eq!(h.input("Name: ", "old.txt", Completion::File), "");
    }

    #[test]
    fn edit_maps_to_editor_command() {
        let h = host("");
        assert_eq!(h.command_line("edit"), ["vi", "-R"]);
        assert_eq!(h.command_line(""), ["vi", "-R"]);
        assert_eq!(h.command_line("less -N"), ["less", "-N"]);
    }

    #[test]
    fn errors_are_printed() {
        let mut h = host("");
        h.error("/x is not directory");
        assert_eq!(output(&h), "error: /x is not directory\n");
    }
}
