use serde::Serialize;

use super::node::Node;

/// Read-only view of the session state, produced after every applied
/// command. The presentation layer renders exclusively from this; mutation
/// goes back through `Command`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Snapshot {
    pub tree: Node,
    pub current_path: Vec<String>,
    pub breadcrumb_paths: Vec<Vec<String>>,
    pub breadcrumb_names: Vec<String>,
    /// Expanded folder IDs, sorted for stable rendering.
    pub expanded: Vec<String>,
    /// Selected link IDs, sorted for stable rendering.
    pub selected: Vec<String>,
    pub folder_count: usize,
    pub link_count: usize,
}
