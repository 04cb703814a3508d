//! Directory change and open handlers.

use tracing::{debug, info, instrument};

use crate::controller::actions::Context;
use crate::error::AppError;
use crate::fs::paths;
use crate::model::explorer_state::ExplorerState;
use crate::view::traits::View;

/// `cd [path]`: change into `path` (home when absent) relative to the
/// explorer's directory, and drop the selection.
#[instrument(level = "debug", skip_all)]
pub fn cd(view: &mut dyn View, state: &mut ExplorerState, ctx: &Context) -> Result<(), AppError> {
    let path = match ctx.first_arg() {
        Some(arg) => paths::resolve(&state.cwd, arg),
        None => paths::home_dir(),
    };

    if !path.is_dir() {
        return Err(AppError::NotADirectory(path));
    }

    view.cd(state, &path, ctx.cursor)?;
    view.selection_mut().clear();
    info!("cd: now in {}", state.cwd.display());
    Ok(())
}

/// `open [command]`: enter directory targets, hand file targets to the host.
#[instrument(level = "debug", skip_all)]
pub fn open(view: &mut dyn View, state: &mut ExplorerState, ctx: &Context) -> Result<(), AppError> {
    let host_cwd = view.host().cwd();
    let command = ctx
        .first_arg()
        .unwrap_or(state.open_command.as_str())
        .to_string();

    for target in &ctx.targets {
        if target.path.is_dir() {
            debug!("open: entering {}", target.path.display());
            view.cd(state, &target.path, ctx.cursor)?;
        } else {
            let path = paths::relative_to(&target.path, &host_cwd);
            debug!("open: {} {}", command, path.display());
            view.host().execute_path(&command, &path)?;
        }
    }
    Ok(())
}
