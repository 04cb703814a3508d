//! src/view/explorer_view.rs
//! ============================================================================
//! # ExplorerView: directory-backed `View`
//!
//! Keeps the listing of the explorer's current directory, a 1-based cursor
//! over it, the selection set and the cursor position last used in every
//! visited directory.

use std::path::{Path, PathBuf};

use ahash::AHashMap;
use tracing::{debug, instrument, trace, warn};

use super::traits::View;
use crate::controller::actions::{Context, Target};
use crate::error::AppError;
use crate::fs::dir_scanner::scan_dir;
use crate::fs::node::Node;
use crate::host::Host;
use crate::model::explorer_state::ExplorerState;
use crate::model::selection::SelectionSet;

pub struct ExplorerView<H> {
    host: H,
    nodes: Vec<Node>,
    cursor: usize,
    selection: SelectionSet,
    cursor_history: AHashMap<PathBuf, usize>,
    show_hidden: bool,
    index: usize,
    redraws: u64,
    dirty: bool,
}

impl<H: Host> ExplorerView<H> {
    /// List `state.cwd` and build a view over it.
    pub fn open(host: H, state: &ExplorerState, show_hidden: bool) -> Result<Self, AppError> {
        let nodes = scan_dir(&state.cwd, show_hidden)?;
        Ok(Self {
            host,
            nodes,
            cursor: 1,
            selection: SelectionSet::new(),
            cursor_history: AHashMap::new(),
            show_hidden,
            index: state.index,
            redraws: 0,
            dirty: true,
        })
    }

    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// 1-based cursor position.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor.clamp(1, self.nodes.len().max(1));
        self.dirty = true;
    }

    #[must_use]
    pub fn node_at_cursor(&self) -> Option<&Node> {
        self.nodes.get(self.cursor - 1)
    }

    /// Selected nodes, or the node under the cursor when nothing is selected.
    #[must_use]
    pub fn targets(&self) -> Vec<Target> {
        if self.selection.is_empty() {
            return self
                .node_at_cursor()
                .map(|n| Target::new(n.path.clone()))
                .into_iter()
                .collect();
        }
        self.selection
            .iter()
            .filter_map(|i| self.nodes.get(i))
            .map(|n| Target::new(n.path.clone()))
            .collect()
    }

    /// Context for dispatching an action from the current view position.
    #[must_use]
    pub fn context<I, S>(&self, args: I) -> Context
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Context::new(self.cursor)
            .with_args(args)
            .with_targets(self.targets())
    }

    #[must_use]
    pub const fn redraw_count(&self) -> u64 {
        self.redraws
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns whether a redraw happened since the last call.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn host_ref(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Plain-text listing: cursor marker, selection marker, name.
    #[must_use]
    pub fn render_lines(&self, state: &ExplorerState) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.nodes.len() + 1);
        lines.push(format!("{}/", state.cwd.display()));
        for (i, node) in self.nodes.iter().enumerate() {
            let cursor = if i + 1 == self.cursor { '>' } else { ' ' };
            let mark = if self.selection.contains(i) { '*' } else { ' ' };
            let suffix = if node.is_dir { "/" } else { "" };
            lines.push(format!("{cursor}{mark} {}{suffix}", node.name));
        }
        lines
    }
}

impl<H: Host> View for ExplorerView<H> {
    #[instrument(level = "debug", skip(self, state, path), fields(path = %path.display()))]
    fn cd(
        &mut self,
        state: &mut ExplorerState,
        path: &Path,
        cursor: usize,
    ) -> Result<(), AppError> {
        let nodes = scan_dir(path, self.show_hidden)?;

        self.cursor_history.insert(state.cwd.clone(), cursor);
        state.cwd = path.to_path_buf();
        self.nodes = nodes;
        self.selection.clear();
        let restored = self.cursor_history.get(path).copied().unwrap_or(1);
        self.set_cursor(restored);

        debug!("cd: {} nodes, cursor {}", self.nodes.len(), self.cursor);
        Ok(())
    }

    fn redraw(&mut self, state: &ExplorerState, force: bool) {
        if force {
            match scan_dir(&state.cwd, self.show_hidden) {
                Ok(nodes) => {
                    self.nodes = nodes;
                    // Indices shift when the listing changes.
                    self.selection.clear();
                    self.set_cursor(self.cursor);
                }
                Err(e) => warn!("redraw: failed to list {}: {}", state.cwd.display(), e),
            }
        }
        self.redraws += 1;
        self.dirty = true;
        trace!("redraw: force={} count={}", force, self.redraws);
    }

    fn search_file(&mut self, path: &Path, index: usize) -> bool {
        if index != self.index {
            return false;
        }
        match self.nodes.iter().position(|n| n.path == path) {
            Some(pos) => {
                self.set_cursor(pos + 1);
                true
            }
            None => {
                debug!("search_file: {} not visible", path.display());
                false
            }
        }
    }

    fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    fn selection_mut(&mut self) -> &mut SelectionSet {
        &mut self.selection
    }

    fn host(&mut self) -> &mut dyn Host {
        &mut self.host
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::ScriptedHost;
    use std::fs;
    use tempfile::TempDir;

    fn setup() -> (TempDir, ExplorerState, ExplorerView<ScriptedHost>) {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("a.txt"), "").unwrap();
        fs::write(dir.path().join("b.txt"), "").unwrap();
        let state = ExplorerState::new(dir.path().to_path_buf());
        let view = ExplorerView::open(ScriptedHost::new(dir.path()), &state, false).unwrap();
        (dir, state, view)
    }

    #[test]
    fn targets_default_to_cursor_node() {
        let (dir, _state, mut view) = setup();
        view.set_cursor(2);
        let targets = view.targets();
        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].path, dir.path().join("a.txt"));
    }

    #[test]
    fn targets_follow_selection_order() {
        let (dir, _state, mut view) = setup();
        view.selection_mut().toggle(2);
        view.selection_mut().toggle(0);
        let paths: Vec<_> = view.targets().into_iter().map(|t| t.path).collect();
        assert_eq!(paths, [dir.path().join("b.txt"), dir.path().join("sub")]);
    }

    #[test]
    fn cd_restores_cursor_on_return() {
        let (dir, mut state, mut view) = setup();
        view.cd(&mut state, &dir.path().join("sub"), 3).unwrap();
        assert_eq!(state.cwd, dir.path().join("sub"));
        assert_eq!(view.cursor(), 1);

        view.cd(&mut state, dir.path(), 1).unwrap();
        assert_eq!(view.cursor(), 3);
    }

    #[test]
    fn cd_failure_leaves_state_alone() {
        let (dir, mut state, mut view) = setup();
        assert!(view.cd(&mut state, &dir.path().join("missing"), 1).is_err());
        assert_eq!(state.cwd, dir.path());
        assert_eq!(view.nodes().len(), 3);
    }

    #[test]
    fn cd_drops_selection_of_previous_listing() {
        let (dir, mut state, mut view) = setup();
        fs::write(dir.path().join("sub/inner.txt"), "").unwrap();
        view.selection_mut().toggle(0);

        view.cd(&mut state, &dir.path().join("sub"), 1).unwrap();
        assert!(view.selection().is_empty());
        assert_eq!(view.targets()[0].path, dir.path().join("sub/inner.txt"));
    }

    #[test]
    fn search_file_moves_cursor() {
        let (dir, _state, mut view) = setup();
        assert!(view.search_file(&dir.path().join("b.txt"), 0));
        assert_eq!(view.cursor(), 3);
        assert!(!view.search_file(&dir.path().join("zzz"), 0));
        assert!(!view.search_file(&dir.path().join("a.txt"), 1));
    }

    #[test]
    fn forced_redraw_rescans_and_clears_selection() {
        let (dir, state, mut view) = setup();
        view.selection_mut().toggle(2);
        fs::remove_file(dir.path().join("b.txt")).unwrap();

        view.redraw(&state, false);
        assert_eq!(view.nodes().len(), 3);

        view.redraw(&state, true);
        assert_eq!(view.nodes().len(), 2);
        assert!(view.selection().is_empty());
        assert_eq!(view.redraw_count(), 2);
    }

    #[test]
    fn render_marks_cursor_and_selection() {
        let (_dir, state, mut view) = setup();
        view.selection_mut().toggle(1);
        let lines = view.render_lines(&state);
        assert_eq!(lines[1], ">  sub/");
        assert_eq!(lines[2], " * a.txt");
    }
}
