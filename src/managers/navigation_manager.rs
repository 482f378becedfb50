//! Navigation Manager for Multilink.
//!
//! Holds the current folder path and the set of folders shown expanded.
//! There is no hidden state beyond this pair; it lives for the session.

use std::collections::HashSet;

use crate::types::node::ROOT_ID;

/// Trait defining the navigation state interface.
pub trait NavigationManagerTrait {
    /// Sets the current path and expands every folder on it, so the path to
    /// the current folder is always visible.
    fn navigate_to(&mut self, path: &[String]);
    fn toggle_expansion(&mut self, id: &str);
    fn current_path(&self) -> &[String];
    fn is_expanded(&self, id: &str) -> bool;
    /// Expanded folder IDs, sorted for stable rendering.
    fn expanded_ids(&self) -> Vec<String>;
    /// Reacts to a deletion: truncates the current path at the first removed
    /// ID and drops removed IDs from the expanded set.
    fn prune(&mut self, removed_ids: &[String]);
}

/// In-memory navigation state: current path plus expanded folders.
pub struct NavigationManager {
    current_path: Vec<String>,
    expanded: HashSet<String>,
}

impl NavigationManager {
    pub fn new() -> Self {
        Self {
            current_path: vec![ROOT_ID.to_string()],
            expanded: HashSet::from([ROOT_ID.to_string()]),
        }
    }

    /// Rebuilds navigation state from previously exported parts.
    pub fn from_parts(current_path: Vec<String>, expanded: Vec<String>) -> Self {
        Self {
            current_path,
            expanded: expanded.into_iter().collect(),
        }
    }
}

impl Default for NavigationManager {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationManagerTrait for NavigationManager {
    fn navigate_to(&mut self, path: &[String]) {
        self.current_path = path.to_vec();
        for id in path.iter().skip(1) {
            self.expanded.insert(id.clone());
        }
    }

    fn toggle_expansion(&mut self, id: &str) {
        if !self.expanded.remove(id) {
            self.expanded.insert(id.to_string());
        }
    }

    fn current_path(&self) -> &[String] {
        &self.current_path
    }

    fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    fn expanded_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.expanded.iter().cloned().collect();
        ids.sort();
        ids
    }

    fn prune(&mut self, removed_ids: &[String]) {
        // The root is never a removable child, so at least the leading
        // "root" segment survives the truncation.
        if let Some(pos) = self
            .current_path
            .iter()
            .position(|id| removed_ids.contains(id))
        {
            self.current_path.truncate(pos);
        }
        for id in removed_ids {
            self.expanded.remove(id);
        }
    }
}
