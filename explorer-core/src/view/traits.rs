//! src/view/traits.rs
//! ============================================================================
//! # View Trait
//!
//! The operations action handlers may perform on the view that lists the
//! explorer's nodes. The view owns the visible node list, the cursor and
//! the selection set, and gives access to the host.

use std::path::Path;

use crate::error::AppError;
use crate::host::Host;
use crate::model::explorer_state::ExplorerState;
use crate::model::selection::SelectionSet;

pub trait View {
    /// Change the explorer to `path`. `cursor` is the cursor position in the
    /// directory being left, remembered for when the user comes back.
    fn cd(&mut self, state: &mut ExplorerState, path: &Path, cursor: usize)
    -> Result<(), AppError>;

    /// Re-render. `force` also re-reads the directory.
    fn redraw(&mut self, state: &ExplorerState, force: bool);

    /// Move the cursor onto `path` in explorer `index`. Returns `false` when
    /// no visible node matches.
    fn search_file(&mut self, path: &Path, index: usize) -> bool;

    fn selection(&self) -> &SelectionSet;

    fn selection_mut(&mut self) -> &mut SelectionSet;

    fn host(&mut self) -> &mut dyn Host;
}
