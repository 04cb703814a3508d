//! src/controller/actions.rs
//! ============================================================================
//! # Actions: the closed set of explorer commands
//!
//! `ActionKind` names every action a user can invoke; `Context` is the
//! per-invocation bundle of arguments, targets and cursor handed to its
//! handler.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use enum_map::Enum;
use smallvec::SmallVec;

use crate::error::AppError;

/// Every built-in action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum)]
pub enum ActionKind {
    Cd,
    Open,
    NewDirectory,
    NewFile,
    Redraw,
    Remove,
    Rename,
    ToggleSelect,
}

impl ActionKind {
    pub const ALL: [Self; 8] = [
        Self::Cd,
        Self::Open,
        Self::NewDirectory,
        Self::NewFile,
        Self::Redraw,
        Self::Remove,
        Self::Rename,
        Self::ToggleSelect,
    ];

    /// Name used to invoke the action.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cd => "cd",
            Self::Open => "open",
            Self::NewDirectory => "new_directory",
            Self::NewFile => "new_file",
            Self::Redraw => "redraw",
            Self::Remove => "remove",
            Self::Rename => "rename",
            Self::ToggleSelect => "toggle_select",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ActionKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| AppError::UnknownAction(s.to_string()))
    }
}

/// Capabilities attached to an action descriptor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionAttrs {
    /// Force a full redraw once the handler returns.
    pub redraw: bool,
}

impl ActionAttrs {
    pub const NONE: Self = Self { redraw: false };
    pub const REDRAW: Self = Self { redraw: true };
}

/// A node an action operates on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub path: PathBuf,
}

impl Target {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Arguments, targets and cursor of one action invocation.
#[derive(Debug, Clone, Default)]
pub struct Context {
    pub args: SmallVec<[String; 2]>,
    pub targets: Vec<Target>,
    /// 1-based cursor line in the view.
    pub cursor: usize,
}

impl Context {
    #[must_use]
    pub fn new(cursor: usize) -> Self {
        Self {
            cursor,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_targets(mut self, targets: impl IntoIterator<Item = Target>) -> Self {
        self.targets = targets.into_iter().collect();
        self
    }

    #[must_use]
    pub fn first_arg(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }
}
