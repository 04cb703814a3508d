pub mod error;

pub mod config;

pub mod controller {
    pub mod actions;
    pub use actions::{ActionAttrs, ActionKind, Context, Target};

    pub mod action_registry;
    pub use action_registry::{ActionDescriptor, ActionHandler, ActionRegistry};

    pub mod action_dispatcher;
    pub use action_dispatcher::{ActionDispatcher, DispatchResult};

    pub mod handlers;
}

pub mod model {
    pub mod explorer_state;
    pub use explorer_state::ExplorerState;

    pub mod selection;
    pub use selection::SelectionSet;
}

pub mod view {
    pub mod traits;
    pub use traits::View;

    pub mod explorer_view;
    pub use explorer_view::ExplorerView;
}

pub mod fs {
    pub mod dir_scanner;
    pub mod node;
    pub mod paths;
}

pub mod host;

pub mod logging;
pub use logging::LoggerBuilder;

pub use error::AppError;

pub use controller::{ActionDispatcher, ActionKind, Context};
pub use model::ExplorerState;
