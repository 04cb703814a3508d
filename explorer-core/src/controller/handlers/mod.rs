pub mod file_ops_handler;
pub mod navigation_handler;
pub mod selection_handler;

use tracing::warn;

use crate::error::AppError;
use crate::view::traits::View;

/// Show a handler error to the user and log it.
pub fn report(view: &mut dyn View, err: &AppError) {
    warn!("action failed: {}", err);
    view.host().error(&err.to_string());
}
