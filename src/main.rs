//! Multilink — a personal link organizer.
//!
//! Entry point: runs an interactive-free console demo that exercises every
//! component. A real shell would render snapshots and feed commands instead.

use multilink::app::AppState;
use multilink::command_handler::{handle_command, Command};
use multilink::managers::navigation_manager::NavigationManagerTrait;
use multilink::managers::selection_manager::SelectionManagerTrait;
use multilink::managers::tree_manager::TreeManagerTrait;
use multilink::services::link_opener::BrowserLauncher;
use multilink::services::link_vault::{LinkVault, LinkVaultTrait};
use multilink::types::errors::LaunchError;

/// Launcher that prints each URL instead of opening a browser, keeping the
/// demo free of side effects. Swap in `SystemLauncher` for the real thing.
struct ConsoleLauncher;

impl BrowserLauncher for ConsoleLauncher {
    fn open_in_new_tab(&self, url: &str) -> Result<(), LaunchError> {
        println!("    -> would open {}", url);
        Ok(())
    }
}

fn main() {
    println!();
    println!("Multilink v{} — Demo Mode", env!("CARGO_PKG_VERSION"));
    println!();

    demo_tree();
    demo_selection_and_open();
    demo_cascade_delete();
    demo_session();
    demo_vault();

    println!("All components demonstrated.");
}

fn section(name: &str) {
    println!("--- {} ---", name);
}

fn demo_tree() {
    section("Tree");

    let mut state = AppState::new();
    let launcher = ConsoleLauncher;

    let root = vec!["root".to_string()];
    let outcome = handle_command(
        &mut state,
        &launcher,
        Command::CreateFolder {
            parent_path: root.clone(),
            name: "Work".to_string(),
        },
    )
    .expect("create folder");
    let work_id = outcome.snapshot.tree.children().unwrap()[0].id.clone();

    let work_path = vec!["root".to_string(), work_id];
    handle_command(
        &mut state,
        &launcher,
        Command::CreateLink {
            parent_path: work_path.clone(),
            name: "Docs".to_string(),
            url: "docs.com".to_string(),
        },
    )
    .expect("create link");

    handle_command(
        &mut state,
        &launcher,
        Command::NavigateTo {
            path: work_path.clone(),
        },
    )
    .expect("navigate");

    let snapshot = state.snapshot();
    println!("  Folders: {}, links: {}", snapshot.folder_count, snapshot.link_count);
    println!("  Breadcrumbs: Root / {}", snapshot.breadcrumb_names.join(" / "));
    let link = &state.tree.collect_links()[0];
    println!("  Link \"{}\" normalized to {}", link.name, link.url().unwrap());
    println!();
}

fn demo_selection_and_open() {
    section("Selection + batch open");

    let mut state = AppState::new();
    let launcher = ConsoleLauncher;
    let root = vec!["root".to_string()];

    state
        .tree
        .create_link(&root, "Rust", "rust-lang.org")
        .expect("create link");
    state
        .tree
        .create_link(&root, "Crates", "crates.io")
        .expect("create link");

    handle_command(&mut state, &launcher, Command::SelectAll).expect("select all");
    println!("  Selected {} links", state.selection.len());

    let outcome = handle_command(&mut state, &launcher, Command::OpenSelected).expect("open");
    let report = outcome.open_report.unwrap();
    if report.is_empty() {
        println!("  No links to open.");
    } else {
        println!("  Opened {} links, {} failures", report.opened, report.failures.len());
    }
    println!();
}

fn demo_cascade_delete() {
    section("Cascade delete");

    let mut state = AppState::new();
    let root = vec!["root".to_string()];

    let folder_id = state.tree.create_folder(&root, "Old stuff").expect("create folder");
    let folder_path = vec!["root".to_string(), folder_id.clone()];
    let link_id = state
        .tree
        .create_link(&folder_path, "Legacy wiki", "wiki.internal")
        .expect("create link");

    state.selection.select(&link_id);
    state.navigation.navigate_to(&folder_path);

    let removed = state.delete_node(&root, &folder_id).expect("delete");
    println!("  Removed {} nodes", removed.len());
    println!("  Selection empty: {}", state.selection.is_empty());
    println!("  Back at: {}", state.navigation.current_path().join("/"));
    println!();
}

fn demo_session() {
    section("Session round-trip");

    let mut state = AppState::new();
    let root = vec!["root".to_string()];
    state
        .tree
        .create_link(&root, "Docs", "docs.rs")
        .expect("create link");

    let json = state.export_session().expect("export");
    println!("  Exported {} bytes of session JSON", json.len());

    let restored = AppState::restore_session(&json).expect("restore");
    println!("  Restored {} links", restored.tree.count_links());
    println!();
}

fn demo_vault() {
    section("Flat vault");

    let base = std::env::temp_dir().join(format!("multilink_demo_{}", std::process::id()));
    let vault = LinkVault::new(&base).expect("vault");

    vault.create_folder("News").expect("create folder");
    vault
        .add_link("News", "Hacker News", "https://news.ycombinator.com")
        .expect("add link");
    let links = vault.read_links("News").expect("read links");
    println!("  Folders: {:?}", vault.list_folders().expect("list"));
    println!("  Links in News: {}", links.len());

    vault.delete_folder("News").expect("delete folder");
    let _ = std::fs::remove_dir_all(&base);
    println!();
}
