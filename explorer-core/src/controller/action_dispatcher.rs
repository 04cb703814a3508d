//! ActionDispatcher: resolves an action, runs its handler and applies the
//! action's redraw attribute.
//!
//! Handlers run synchronously to completion. A handler error is shown to the
//! user through the host and never poisons the dispatcher; only an unknown
//! action name is returned to the caller.

use tracing::{debug, instrument};

use super::action_registry::{ActionDescriptor, ActionRegistry};
use super::actions::{ActionKind, Context};
use super::handlers::report;
use crate::error::AppError;
use crate::model::explorer_state::ExplorerState;
use crate::view::traits::View;

/// Outcome of one dispatched action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchResult {
    /// Handler ran to the end.
    Completed,
    /// Handler stopped early; the error was reported to the host.
    Aborted,
}

#[derive(Debug, Clone, Default)]
pub struct ActionDispatcher {
    registry: ActionRegistry,
}

impl ActionDispatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_registry(registry: ActionRegistry) -> Self {
        Self { registry }
    }

    #[must_use]
    pub const fn registry(&self) -> &ActionRegistry {
        &self.registry
    }

    /// Run the action registered under `name`.
    #[instrument(level = "info", skip(self, view, state, context), fields(action = name))]
    pub fn dispatch(
        &self,
        view: &mut dyn View,
        state: &mut ExplorerState,
        name: &str,
        context: Context,
    ) -> Result<DispatchResult, AppError> {
        let descriptor = self.registry.lookup(name)?;
        Ok(Self::run(descriptor, view, state, &context))
    }

    /// Run a known action without name resolution.
    #[instrument(level = "info", skip(self, view, state, context), fields(action = %kind))]
    pub fn dispatch_kind(
        &self,
        view: &mut dyn View,
        state: &mut ExplorerState,
        kind: ActionKind,
        context: Context,
    ) -> DispatchResult {
        Self::run(self.registry.get(kind), view, state, &context)
    }

    fn run(
        descriptor: &ActionDescriptor,
        view: &mut dyn View,
        state: &mut ExplorerState,
        context: &Context,
    ) -> DispatchResult {
        debug!(
            "run: {} args={:?} targets={} cursor={}",
            descriptor.name(),
            context.args,
            context.targets.len(),
            context.cursor
        );

        let result = match (descriptor.handler)(view, state, context) {
            Ok(()) => DispatchResult::Completed,
            Err(err) => {
                report(view, &err);
                DispatchResult::Aborted
            }
        };

        if descriptor.attrs.redraw {
            view.redraw(state, true);
        }

        result
    }
}
