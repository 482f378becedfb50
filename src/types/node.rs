use serde::{Deserialize, Serialize};

/// ID of the implicit root folder. Every path starts here.
pub const ROOT_ID: &str = "root";

/// Display name of the root folder.
pub const ROOT_NAME: &str = "Root";

/// A single entry in the link tree: a folder or a link.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Node {
    pub id: String,
    pub name: String,
    pub date_added: i64,
    #[serde(flatten)]
    pub kind: NodeKind,
}

/// The two node variants. Folders own their children exclusively; links are
/// always leaves.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeKind {
    Folder { children: Vec<Node> },
    Link { url: String },
}

impl Node {
    pub fn is_folder(&self) -> bool {
        matches!(self.kind, NodeKind::Folder { .. })
    }

    pub fn is_link(&self) -> bool {
        matches!(self.kind, NodeKind::Link { .. })
    }

    /// The node's children, or `None` for a link.
    pub fn children(&self) -> Option<&[Node]> {
        match &self.kind {
            NodeKind::Folder { children } => Some(children),
            NodeKind::Link { .. } => None,
        }
    }

    /// The node's URL, or `None` for a folder.
    pub fn url(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Link { url } => Some(url),
            NodeKind::Folder { .. } => None,
        }
    }
}
