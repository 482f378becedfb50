use serde::{Deserialize, Serialize};

use super::node::Node;

/// Complete session state for save/restore.
///
/// The crate only defines the shape and its JSON round-trip; where the
/// JSON is stored is up to the embedding shell.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionData {
    pub tree: Node,
    pub selected: Vec<String>,
    pub current_path: Vec<String>,
    pub expanded: Vec<String>,
    pub timestamp: i64,
}
