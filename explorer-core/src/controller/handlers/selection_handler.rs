//! Selection and redraw handlers.

use tracing::trace;

use crate::controller::actions::Context;
use crate::error::AppError;
use crate::model::explorer_state::ExplorerState;
use crate::view::traits::View;

/// Toggle the node under the cursor. Cursor 0 points at no node.
pub fn toggle_select(
    view: &mut dyn View,
    state: &mut ExplorerState,
    ctx: &Context,
) -> Result<(), AppError> {
    let Some(index) = ctx.cursor.checked_sub(1) else {
        return Ok(());
    };

    let selected = view.selection_mut().toggle(index);
    trace!("toggle_select: {} -> {}", index, selected);
    view.redraw(state, false);
    Ok(())
}

/// Nothing to do; the action's redraw attribute does the work.
pub fn redraw(
    _view: &mut dyn View,
    _state: &mut ExplorerState,
    _ctx: &Context,
) -> Result<(), AppError> {
    Ok(())
}
