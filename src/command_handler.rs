//! Command handler for Multilink.
//!
//! The presentation-layer boundary: typed commands in, read-only snapshots
//! out. Kept free of any rendering so it can be unit-tested independently
//! and driven by any shell.

use crate::app::AppState;
use crate::managers::navigation_manager::NavigationManagerTrait;
use crate::managers::selection_manager::SelectionManagerTrait;
use crate::managers::tree_manager::TreeManagerTrait;
use crate::services::link_opener::{self, BatchOpenReport, BrowserLauncher};
use crate::types::errors::TreeError;
use crate::types::snapshot::Snapshot;

/// A single user action against the session state.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    CreateFolder {
        parent_path: Vec<String>,
        name: String,
    },
    CreateLink {
        parent_path: Vec<String>,
        name: String,
        url: String,
    },
    DeleteNode {
        parent_path: Vec<String>,
        node_id: String,
    },
    NavigateTo {
        path: Vec<String>,
    },
    ToggleExpansion {
        node_id: String,
    },
    ToggleSelect {
        node_id: String,
    },
    SelectAll,
    DeselectAll,
    OpenSelected,
}

/// Result of a successfully applied command: the state to render from,
/// plus the batch report when links were opened.
#[derive(Debug, Clone)]
pub struct CommandOutcome {
    pub snapshot: Snapshot,
    pub open_report: Option<BatchOpenReport>,
}

/// Applies one command to the session state.
///
/// Errors are converted to user-facing strings here; none are fatal and a
/// failed command leaves the state unchanged. On success the caller gets a
/// fresh snapshot to re-render from.
pub fn handle_command(
    state: &mut AppState,
    launcher: &dyn BrowserLauncher,
    command: Command,
) -> Result<CommandOutcome, String> {
    let mut open_report = None;

    match command {
        Command::CreateFolder { parent_path, name } => {
            state
                .tree
                .create_folder(&parent_path, &name)
                .map_err(|e| e.to_string())?;
        }
        Command::CreateLink {
            parent_path,
            name,
            url,
        } => {
            state
                .tree
                .create_link(&parent_path, &name, &url)
                .map_err(|e| e.to_string())?;
        }
        Command::DeleteNode {
            parent_path,
            node_id,
        } => {
            state
                .delete_node(&parent_path, &node_id)
                .map_err(|e| e.to_string())?;
        }
        Command::NavigateTo { path } => {
            let target = state.tree.resolve(&path).map_err(|e| e.to_string())?;
            if !target.is_folder() {
                return Err(TreeError::InvalidParent(target.id.clone()).to_string());
            }
            state.navigation.navigate_to(&path);
        }
        Command::ToggleExpansion { node_id } => {
            state.navigation.toggle_expansion(&node_id);
        }
        Command::ToggleSelect { node_id } => {
            state.selection.toggle(&node_id);
        }
        Command::SelectAll => {
            let ids: Vec<String> = state
                .tree
                .collect_links()
                .iter()
                .map(|link| link.id.clone())
                .collect();
            state.selection.select_all(&ids);
        }
        Command::DeselectAll => {
            state.selection.clear();
        }
        Command::OpenSelected => {
            open_report = Some(link_opener::open_selected(
                &state.selection,
                &state.tree,
                launcher,
            ));
        }
    }

    Ok(CommandOutcome {
        snapshot: state.snapshot(),
        open_report,
    })
}
