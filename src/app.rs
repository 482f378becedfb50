//! App State for Multilink.
//!
//! Central struct owning the session's tree, selection, and navigation
//! state. Deletions go through here so the cascade pruning that spans the
//! three managers happens in one place; the managers stay unaware of each
//! other.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::managers::navigation_manager::{NavigationManager, NavigationManagerTrait};
use crate::managers::selection_manager::{SelectionManager, SelectionManagerTrait};
use crate::managers::tree_manager::{TreeManager, TreeManagerTrait};
use crate::types::errors::{SessionError, TreeError};
use crate::types::session::SessionData;
use crate::types::snapshot::Snapshot;

/// All state of one organizer session. Created at session start and passed
/// into every core call; there is no ambient global.
pub struct AppState {
    pub tree: TreeManager,
    pub selection: SelectionManager,
    pub navigation: NavigationManager,
}

impl AppState {
    /// Fresh session: a lone root folder, nothing selected, positioned at
    /// the root with only the root expanded.
    pub fn new() -> Self {
        Self {
            tree: TreeManager::new(),
            selection: SelectionManager::new(),
            navigation: NavigationManager::new(),
        }
    }

    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    /// Removes a node and prunes selection and navigation state of every ID
    /// in the removed subtree, so no dangling references survive a delete.
    pub fn delete_node(
        &mut self,
        parent_path: &[String],
        node_id: &str,
    ) -> Result<Vec<String>, TreeError> {
        let removed = self.tree.remove(parent_path, node_id)?;
        self.selection.prune(&removed);
        self.navigation.prune(&removed);
        Ok(removed)
    }

    /// Read-only view of the current state for rendering.
    pub fn snapshot(&self) -> Snapshot {
        let current_path = self.navigation.current_path().to_vec();
        Snapshot {
            tree: self.tree.root().clone(),
            breadcrumb_paths: self.tree.breadcrumb_paths(&current_path),
            breadcrumb_names: self.tree.breadcrumb_names(&current_path),
            current_path,
            expanded: self.navigation.expanded_ids(),
            selected: self.selection.selected_ids(),
            folder_count: self.tree.count_folders(),
            link_count: self.tree.count_links(),
        }
    }

    /// Serializes the full session state to JSON for an embedding shell to
    /// store wherever it likes.
    pub fn export_session(&self) -> Result<String, SessionError> {
        let data = SessionData {
            tree: self.tree.root().clone(),
            selected: self.selection.selected_ids(),
            current_path: self.navigation.current_path().to_vec(),
            expanded: self.navigation.expanded_ids(),
            timestamp: Self::now(),
        };
        serde_json::to_string(&data).map_err(|e| SessionError::SerializationError(e.to_string()))
    }

    /// Rebuilds a session from JSON produced by `export_session`.
    pub fn restore_session(json: &str) -> Result<Self, SessionError> {
        let data: SessionData = serde_json::from_str(json)
            .map_err(|e| SessionError::SerializationError(e.to_string()))?;
        Ok(Self {
            tree: TreeManager::from_root(data.tree),
            selection: SelectionManager::from_ids(data.selected),
            navigation: NavigationManager::from_parts(data.current_path, data.expanded),
        })
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
