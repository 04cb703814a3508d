//! Create, remove and rename handlers.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use super::report;
use crate::controller::actions::Context;
use crate::error::AppError;
use crate::fs::paths;
use crate::host::Completion;
use crate::model::explorer_state::ExplorerState;
use crate::view::traits::View;

pub const NEW_DIRECTORY_PROMPT: &str = "Please input a new directory: ";
pub const NEW_FILE_PROMPT: &str = "Please input a new filename: ";
pub const REMOVE_PROMPT: &str = "Are you sure you want to delete this node?";

/// Ask the host for a path and resolve it against the explorer directory.
/// An empty answer means the user gave up.
fn prompt_path(
    view: &mut dyn View,
    state: &ExplorerState,
    prompt: &str,
    default: &str,
    completion: Completion,
) -> Option<PathBuf> {
    let answer = view.host().input(prompt, default, completion);
    if answer.is_empty() {
        return None;
    }
    Some(paths::resolve(&state.cwd, &answer))
}

/// Present on disk, dangling symlinks included.
fn occupied(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

fn refresh_and_focus(view: &mut dyn View, state: &ExplorerState, path: &Path) {
    view.redraw(state, true);
    view.search_file(path, state.index);
}

#[instrument(level = "debug", skip_all)]
pub fn new_directory(
    view: &mut dyn View,
    state: &mut ExplorerState,
    _ctx: &Context,
) -> Result<(), AppError> {
    let Some(path) = prompt_path(view, state, NEW_DIRECTORY_PROMPT, "", Completion::Dir) else {
        debug!("new_directory: cancelled");
        return Ok(());
    };

    if occupied(&path) {
        return Err(AppError::AlreadyExists(path));
    }

    fs::create_dir(&path)
        .map_err(|e| AppError::file_operation_failed("create directory", &path, &e))?;
    info!("new_directory: created {}", path.display());

    refresh_and_focus(view, state, &path);
    Ok(())
}

/// Create an empty file, creating missing parent directories first.
#[instrument(level = "debug", skip_all)]
pub fn new_file(
    view: &mut dyn View,
    state: &mut ExplorerState,
    _ctx: &Context,
) -> Result<(), AppError> {
    let Some(path) = prompt_path(view, state, NEW_FILE_PROMPT, "", Completion::File) else {
        debug!("new_file: cancelled");
        return Ok(());
    };

    if occupied(&path) {
        return Err(AppError::AlreadyExists(path));
    }

    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent)
            .map_err(|e| AppError::file_operation_failed("create directory", parent, &e))?;
    }

    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .map_err(|e| AppError::file_operation_failed("create", &path, &e))?;
    info!("new_file: created {}", path.display());

    refresh_and_focus(view, state, &path);
    Ok(())
}

/// Delete every target after one confirmation. A failing target is reported
/// and the rest are still removed.
#[instrument(level = "debug", skip_all, fields(targets = ctx.targets.len()))]
pub fn remove(view: &mut dyn View, state: &mut ExplorerState, ctx: &Context) -> Result<(), AppError> {
    if ctx.targets.is_empty() {
        return Ok(());
    }

    if state.confirm_remove && !view.host().confirm(REMOVE_PROMPT) {
        debug!("remove: declined");
        return Ok(());
    }

    for target in &ctx.targets {
        let path = &target.path;
        // Symlinks are removed, never followed.
        let result = fs::symlink_metadata(path).and_then(|meta| {
            if meta.is_dir() {
                fs::remove_dir_all(path)
            } else {
                fs::remove_file(path)
            }
        });

        match result {
            Ok(()) => info!("remove: deleted {}", path.display()),
            Err(e) => report(view, &AppError::file_operation_failed("remove", path, &e)),
        }
    }

    view.redraw(state, true);
    Ok(())
}

/// Prompt for a new name per target. Empty or unchanged answers skip the
/// target; an occupied destination is reported and the next target is tried.
#[instrument(level = "debug", skip_all, fields(targets = ctx.targets.len()))]
pub fn rename(view: &mut dyn View, state: &mut ExplorerState, ctx: &Context) -> Result<(), AppError> {
    for target in &ctx.targets {
        let source = paths::normalize(&target.path);
        let prompt = format!("New name: {} -> ", source.display());
        let default = source.to_string_lossy();

        let Some(dest) = prompt_path(view, state, &prompt, &default, Completion::File) else {
            continue;
        };
        if dest == source {
            continue;
        }

        if occupied(&dest) {
            report(view, &AppError::AlreadyExists(dest));
            continue;
        }

        if let Err(e) = fs::rename(&source, &dest) {
            report(view, &AppError::file_operation_failed("rename", &source, &e));
            continue;
        }
        info!("rename: {} -> {}", source.display(), dest.display());

        refresh_and_focus(view, state, &dest);
    }
    Ok(())
}
