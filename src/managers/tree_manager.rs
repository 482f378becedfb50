//! Tree Manager for Multilink.
//!
//! Owns the in-memory link tree and implements `TreeManagerTrait` —
//! path-addressed lookup, insertion, removal, and traversal over
//! folder/link nodes.

use std::time::{SystemTime, UNIX_EPOCH};

use uuid::Uuid;

use crate::types::errors::TreeError;
use crate::types::node::{Node, NodeKind, ROOT_ID, ROOT_NAME};

/// Trait defining the tree management interface.
pub trait TreeManagerTrait {
    /// Resolves a path (node IDs starting at `"root"`) to the node it names.
    fn resolve(&self, path: &[String]) -> Result<&Node, TreeError>;
    /// Appends a node to the folder named by `parent_path`.
    fn insert(&mut self, parent_path: &[String], node: Node) -> Result<(), TreeError>;
    /// Creates a folder under `parent_path`. Returns the new node's ID.
    fn create_folder(&mut self, parent_path: &[String], name: &str) -> Result<String, TreeError>;
    /// Creates a link under `parent_path`, normalizing the URL scheme.
    /// Returns the new node's ID.
    fn create_link(
        &mut self,
        parent_path: &[String],
        name: &str,
        url: &str,
    ) -> Result<String, TreeError>;
    /// Removes the child named `node_id` from the folder at `parent_path`,
    /// dropping its entire subtree. Returns the IDs of every removed node so
    /// the caller can prune selection and navigation state. Removing an ID
    /// that is not present is a no-op returning an empty list.
    fn remove(&mut self, parent_path: &[String], node_id: &str) -> Result<Vec<String>, TreeError>;
    fn root(&self) -> &Node;
    /// Every link in the tree, depth-first pre-order, in stored child order.
    fn collect_links(&self) -> Vec<&Node>;
    /// Number of folders strictly below the root.
    fn count_folders(&self) -> usize;
    fn count_links(&self) -> usize;
    /// The n prefixes of an n-segment path, shortest first.
    fn breadcrumb_paths(&self, path: &[String]) -> Vec<Vec<String>>;
    /// Display names for each path segment after root. Stops silently at the
    /// first segment that no longer resolves (stale path after a delete).
    fn breadcrumb_names(&self, path: &[String]) -> Vec<String>;
}

/// In-memory link tree rooted at a single folder node with `id = "root"`.
pub struct TreeManager {
    root: Node,
}

impl TreeManager {
    pub fn new() -> Self {
        Self {
            root: Node {
                id: ROOT_ID.to_string(),
                name: ROOT_NAME.to_string(),
                date_added: Self::now(),
                kind: NodeKind::Folder {
                    children: Vec::new(),
                },
            },
        }
    }

    /// Rebuilds a manager around a previously exported root node.
    pub fn from_root(root: Node) -> Self {
        Self { root }
    }

    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    fn resolve_mut(&mut self, path: &[String]) -> Result<&mut Node, TreeError> {
        if path.first().map(String::as_str) != Some(ROOT_ID) {
            return Err(TreeError::NotFound(path.join("/")));
        }
        let mut current = &mut self.root;
        for id in &path[1..] {
            let children = match &mut current.kind {
                NodeKind::Folder { children } => children,
                NodeKind::Link { .. } => return Err(TreeError::NotFound(id.clone())),
            };
            current = children
                .iter_mut()
                .find(|c| c.id == *id)
                .ok_or_else(|| TreeError::NotFound(id.clone()))?;
        }
        Ok(current)
    }
}

impl Default for TreeManager {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeManagerTrait for TreeManager {
    fn resolve(&self, path: &[String]) -> Result<&Node, TreeError> {
        if path.first().map(String::as_str) != Some(ROOT_ID) {
            return Err(TreeError::NotFound(path.join("/")));
        }
        let mut current = &self.root;
        for id in &path[1..] {
            let children = match &current.kind {
                NodeKind::Folder { children } => children,
                NodeKind::Link { .. } => return Err(TreeError::NotFound(id.clone())),
            };
            current = children
                .iter()
                .find(|c| c.id == *id)
                .ok_or_else(|| TreeError::NotFound(id.clone()))?;
        }
        Ok(current)
    }

    fn insert(&mut self, parent_path: &[String], node: Node) -> Result<(), TreeError> {
        let parent = self.resolve_mut(parent_path)?;
        match &mut parent.kind {
            NodeKind::Folder { children } => {
                // Insertion order is display order
                children.push(node);
                Ok(())
            }
            NodeKind::Link { .. } => Err(TreeError::InvalidParent(parent.id.clone())),
        }
    }

    fn create_folder(&mut self, parent_path: &[String], name: &str) -> Result<String, TreeError> {
        let id = Uuid::new_v4().to_string();
        let node = Node {
            id: id.clone(),
            name: name.to_string(),
            date_added: Self::now(),
            kind: NodeKind::Folder {
                children: Vec::new(),
            },
        };
        self.insert(parent_path, node)?;
        Ok(id)
    }

    fn create_link(
        &mut self,
        parent_path: &[String],
        name: &str,
        url: &str,
    ) -> Result<String, TreeError> {
        let id = Uuid::new_v4().to_string();
        let node = Node {
            id: id.clone(),
            name: name.to_string(),
            date_added: Self::now(),
            kind: NodeKind::Link {
                url: normalize_url(url),
            },
        };
        self.insert(parent_path, node)?;
        Ok(id)
    }

    fn remove(&mut self, parent_path: &[String], node_id: &str) -> Result<Vec<String>, TreeError> {
        let parent = self.resolve_mut(parent_path)?;
        let children = match &mut parent.kind {
            NodeKind::Folder { children } => children,
            // A link has no children, so there is nothing to remove
            NodeKind::Link { .. } => return Ok(Vec::new()),
        };
        match children.iter().position(|c| c.id == node_id) {
            Some(idx) => {
                let removed = children.remove(idx);
                Ok(subtree_ids(&removed))
            }
            None => Ok(Vec::new()),
        }
    }

    fn root(&self) -> &Node {
        &self.root
    }

    fn collect_links(&self) -> Vec<&Node> {
        let mut links = Vec::new();
        collect_links_into(&self.root, &mut links);
        links
    }

    fn count_folders(&self) -> usize {
        count_folders_below(&self.root)
    }

    fn count_links(&self) -> usize {
        self.collect_links().len()
    }

    fn breadcrumb_paths(&self, path: &[String]) -> Vec<Vec<String>> {
        (1..=path.len()).map(|n| path[..n].to_vec()).collect()
    }

    fn breadcrumb_names(&self, path: &[String]) -> Vec<String> {
        let mut names = Vec::new();
        if path.first().map(String::as_str) != Some(ROOT_ID) {
            return names;
        }
        let mut current = &self.root;
        for id in &path[1..] {
            let next = current
                .children()
                .and_then(|children| children.iter().find(|c| c.id == *id));
            match next {
                Some(node) => {
                    names.push(node.name.clone());
                    current = node;
                }
                None => break,
            }
        }
        names
    }
}

/// Prepends `https://` when the supplied value carries no scheme.
pub fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}

/// Pre-order IDs of a node and all of its descendants.
fn subtree_ids(node: &Node) -> Vec<String> {
    let mut ids = vec![node.id.clone()];
    if let Some(children) = node.children() {
        for child in children {
            ids.extend(subtree_ids(child));
        }
    }
    ids
}

fn collect_links_into<'a>(node: &'a Node, links: &mut Vec<&'a Node>) {
    match &node.kind {
        NodeKind::Link { .. } => links.push(node),
        NodeKind::Folder { children } => {
            for child in children {
                collect_links_into(child, links);
            }
        }
    }
}

fn count_folders_below(node: &Node) -> usize {
    match node.children() {
        Some(children) => children
            .iter()
            .filter(|c| c.is_folder())
            .map(|c| 1 + count_folders_below(c))
            .sum(),
        None => 0,
    }
}
