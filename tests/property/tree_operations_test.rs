//! Property-based tests for link tree operations.
//!
//! These tests verify the structural guarantees of the tree: inserted nodes
//! resolve back unchanged, traversal sees every link exactly once, removal
//! is idempotent, and cascade deletes prune the selection set.

use std::collections::HashSet;

use multilink::managers::selection_manager::{SelectionManager, SelectionManagerTrait};
use multilink::managers::tree_manager::{TreeManager, TreeManagerTrait};
use multilink::types::node::ROOT_ID;
use proptest::prelude::*;

/// Strategy for display names: printable ASCII, non-empty.
fn arb_name() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9 ]{0,20}"
}

/// Strategy for user-supplied URLs, with and without a scheme.
fn arb_url() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just(""), Just("http://"), Just("https://")],
        "[a-z][a-z0-9]{1,12}",
        prop_oneof![Just(".com"), Just(".org"), Just(".dev")],
    )
        .prop_map(|(scheme, host, tld)| format!("{}{}{}", scheme, host, tld))
}

/// Number of links to create in each of a handful of folders.
fn arb_folder_sizes() -> impl Strategy<Value = Vec<usize>> {
    proptest::collection::vec(0usize..5, 1..5)
}

fn root_path() -> Vec<String> {
    vec![ROOT_ID.to_string()]
}

// **Property: insert-then-resolve round-trip**
//
// A link created at the bottom of an arbitrary folder chain resolves back
// with identical field values.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn insert_then_resolve_round_trips(
        folder_names in proptest::collection::vec(arb_name(), 0..5),
        link_name in arb_name(),
        url in arb_url(),
    ) {
        let mut tree = TreeManager::new();

        let mut parent_path = root_path();
        for name in &folder_names {
            let id = tree.create_folder(&parent_path, name).unwrap();
            parent_path.push(id);
        }

        let link_id = tree.create_link(&parent_path, &link_name, &url).unwrap();

        let mut link_path = parent_path.clone();
        link_path.push(link_id.clone());
        let node = tree.resolve(&link_path).unwrap();

        prop_assert_eq!(&node.id, &link_id);
        prop_assert_eq!(&node.name, &link_name);
        let resolved_url = node.url().unwrap();
        prop_assert!(resolved_url.starts_with("http://") || resolved_url.starts_with("https://"));
        prop_assert!(resolved_url.ends_with(url.trim_start_matches("http://").trim_start_matches("https://")));
    }

    // **Property: traversal sees every link exactly once**
    //
    // For links spread over any number of folders, `collect_links` returns
    // exactly that many nodes, each with a unique ID.
    #[test]
    fn collect_links_finds_every_link_once(
        folder_sizes in arb_folder_sizes(),
        root_links in 0usize..4,
    ) {
        let mut tree = TreeManager::new();

        for i in 0..root_links {
            tree.create_link(&root_path(), &format!("top {}", i), "top.example").unwrap();
        }
        for (f, size) in folder_sizes.iter().enumerate() {
            let folder_id = tree.create_folder(&root_path(), &format!("folder {}", f)).unwrap();
            let folder_path = vec![ROOT_ID.to_string(), folder_id];
            for i in 0..*size {
                tree.create_link(&folder_path, &format!("link {}", i), "nested.example").unwrap();
            }
        }

        let expected = root_links + folder_sizes.iter().sum::<usize>();
        let links = tree.collect_links();
        prop_assert_eq!(links.len(), expected);
        prop_assert_eq!(links.len(), tree.count_links());

        let ids: HashSet<&str> = links.iter().map(|l| l.id.as_str()).collect();
        prop_assert_eq!(ids.len(), expected, "link IDs must be unique");
    }

    // **Property: remove is idempotent**
    //
    // Removing the same ID twice yields the same tree as removing it once.
    #[test]
    fn remove_twice_equals_remove_once(
        names in proptest::collection::vec(arb_name(), 1..6),
        victim_index in 0usize..6,
    ) {
        let mut tree = TreeManager::new();
        let mut ids = Vec::new();
        for name in &names {
            ids.push(tree.create_folder(&root_path(), name).unwrap());
        }
        let victim = ids[victim_index % ids.len()].clone();

        tree.remove(&root_path(), &victim).unwrap();
        let after_once = tree.root().clone();

        let removed_again = tree.remove(&root_path(), &victim).unwrap();
        prop_assert!(removed_again.is_empty());
        prop_assert_eq!(tree.root(), &after_once);
    }

    // **Property: cascade delete prunes traversal and selection**
    //
    // Deleting a folder with n descendant links drops exactly those links
    // from `collect_links` and from the selection set.
    #[test]
    fn cascade_delete_prunes_links_and_selection(
        inside in 1usize..5,
        outside in 0usize..4,
    ) {
        let mut tree = TreeManager::new();
        let mut selection = SelectionManager::new();

        let folder_id = tree.create_folder(&root_path(), "doomed").unwrap();
        let folder_path = vec![ROOT_ID.to_string(), folder_id.clone()];
        let mut inside_ids = Vec::new();
        for i in 0..inside {
            inside_ids.push(
                tree.create_link(&folder_path, &format!("in {}", i), "in.example").unwrap(),
            );
        }
        let mut outside_ids = Vec::new();
        for i in 0..outside {
            outside_ids.push(
                tree.create_link(&root_path(), &format!("out {}", i), "out.example").unwrap(),
            );
        }

        for id in inside_ids.iter().chain(outside_ids.iter()) {
            selection.select(id);
        }

        let removed = tree.remove(&root_path(), &folder_id).unwrap();
        selection.prune(&removed);

        prop_assert_eq!(removed.len(), inside + 1);
        prop_assert_eq!(tree.collect_links().len(), outside);
        for id in &inside_ids {
            prop_assert!(!selection.is_selected(id));
        }
        for id in &outside_ids {
            prop_assert!(selection.is_selected(id));
        }
    }
}
