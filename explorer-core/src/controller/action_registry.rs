//! src/controller/action_registry.rs
//! ============================================================================
//! # ActionRegistry: static table of action descriptors
//!
//! Maps every `ActionKind` to its handler and attributes through an
//! `EnumMap`, so a kind without a descriptor does not compile. Name lookup
//! is the only fallible path.

use std::fmt;
use std::str::FromStr;

use enum_map::{EnumMap, enum_map};

use super::actions::{ActionAttrs, ActionKind, Context};
use super::handlers::{file_ops_handler, navigation_handler, selection_handler};
use crate::error::AppError;
use crate::model::explorer_state::ExplorerState;
use crate::view::traits::View;

/// Handler signature shared by all actions.
pub type ActionHandler = fn(&mut dyn View, &mut ExplorerState, &Context) -> Result<(), AppError>;

/// Immutable description of one action.
#[derive(Clone, Copy)]
pub struct ActionDescriptor {
    pub kind: ActionKind,
    pub handler: ActionHandler,
    pub attrs: ActionAttrs,
}

impl ActionDescriptor {
    const fn new(kind: ActionKind, handler: ActionHandler, attrs: ActionAttrs) -> Self {
        Self {
            kind,
            handler,
            attrs,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.kind.name()
    }
}

impl fmt::Debug for ActionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionDescriptor")
            .field("name", &self.name())
            .field("attrs", &self.attrs)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone)]
pub struct ActionRegistry {
    table: EnumMap<ActionKind, ActionDescriptor>,
}

impl ActionRegistry {
    #[must_use]
    pub fn new() -> Self {
        use ActionKind as K;
        let table = enum_map! {
            K::Cd => ActionDescriptor::new(K::Cd, navigation_handler::cd, ActionAttrs::NONE),
            K::Open => ActionDescriptor::new(K::Open, navigation_handler::open, ActionAttrs::NONE),
            K::NewDirectory => ActionDescriptor::new(
                K::NewDirectory,
                file_ops_handler::new_directory,
                ActionAttrs::NONE,
            ),
            K::NewFile => ActionDescriptor::new(K::NewFile, file_ops_handler::new_file, ActionAttrs::NONE),
            K::Redraw => ActionDescriptor::new(K::Redraw, selection_handler::redraw, ActionAttrs::REDRAW),
            K::Remove => ActionDescriptor::new(K::Remove, file_ops_handler::remove, ActionAttrs::NONE),
            K::Rename => ActionDescriptor::new(K::Rename, file_ops_handler::rename, ActionAttrs::NONE),
            K::ToggleSelect => ActionDescriptor::new(
                K::ToggleSelect,
                selection_handler::toggle_select,
                ActionAttrs::NONE,
            ),
        };
        Self { table }
    }

    /// Resolve an action by name.
    pub fn lookup(&self, name: &str) -> Result<&ActionDescriptor, AppError> {
        ActionKind::from_str(name).map(|kind| self.get(kind))
    }

    #[must_use]
    pub fn get(&self, kind: ActionKind) -> &ActionDescriptor {
        &self.table[kind]
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActionDescriptor> {
        self.table.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.iter().map(ActionDescriptor::name)
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_registered_name_resolves() {
        let registry = ActionRegistry::new();
        for name in registry.names() {
            let descriptor = registry.lookup(name).unwrap();
            assert_eq!(descriptor.name(), name);
        }
        assert_eq!(registry.names().count(), ActionKind::ALL.len());
    }

    #[test]
    fn names_are_unique() {
        let registry = ActionRegistry::new();
        let mut names: Vec<_> = registry.names().collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ActionKind::ALL.len());
    }

    #[test]
    fn unknown_name_fails() {
        let registry = ActionRegistry::new();
        assert!(matches!(
            registry.lookup("chmod"),
            Err(AppError::UnknownAction(name)) if name == "chmod"
        ));
    }

    #[test]
    fn only_redraw_carries_redraw_attr() {
        let registry = ActionRegistry::new();
        for descriptor in registry.iter() {
            assert_eq!(
                descriptor.attrs.redraw,
                descriptor.kind == ActionKind::Redraw,
                "{}",
                descriptor.name()
            );
        }
    }
}
