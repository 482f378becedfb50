//! Link Opener for Multilink.
//!
//! Batch-opens the selected links through a `BrowserLauncher`. The system
//! implementation delegates to the `open` crate; tests substitute their own
//! launcher.

use std::thread;
use std::time::Duration;

use crate::managers::selection_manager::{SelectionManager, SelectionManagerTrait};
use crate::managers::tree_manager::{TreeManager, TreeManagerTrait};
use crate::types::errors::LaunchError;

/// Pause between successive opens, so the host browser's popup blocker does
/// not swallow part of the batch.
pub const INTER_OPEN_DELAY: Duration = Duration::from_millis(350);

/// Trait for the external browser-launch collaborator.
pub trait BrowserLauncher {
    fn open_in_new_tab(&self, url: &str) -> Result<(), LaunchError>;
}

/// Launcher that hands URLs to the system default browser.
pub struct SystemLauncher;

impl BrowserLauncher for SystemLauncher {
    fn open_in_new_tab(&self, url: &str) -> Result<(), LaunchError> {
        open::that(url).map_err(|e| LaunchError::Failed(e.to_string()))
    }
}

/// Outcome of a batch open.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchOpenReport {
    /// Number of links actually opened.
    pub opened: usize,
    /// Per-link failures as (link name, error message). A failure does not
    /// abort the rest of the batch.
    pub failures: Vec<(String, String)>,
}

impl BatchOpenReport {
    /// True when nothing was opened and nothing failed.
    pub fn is_empty(&self) -> bool {
        self.opened == 0 && self.failures.is_empty()
    }
}

/// Opens every selected link in tree order.
///
/// Selected IDs with no matching link node are silently skipped. Iteration
/// runs to completion; launch failures are recorded, not propagated.
pub fn open_selected(
    selection: &SelectionManager,
    tree: &TreeManager,
    launcher: &dyn BrowserLauncher,
) -> BatchOpenReport {
    let mut report = BatchOpenReport::default();
    if selection.is_empty() {
        return report;
    }

    let mut first = true;
    for link in tree.collect_links() {
        if !selection.is_selected(&link.id) {
            continue;
        }
        let url = match link.url() {
            Some(url) => url,
            None => continue,
        };
        if !first {
            thread::sleep(INTER_OPEN_DELAY);
        }
        first = false;
        match launcher.open_in_new_tab(url) {
            Ok(()) => report.opened += 1,
            Err(e) => report.failures.push((link.name.clone(), e.to_string())),
        }
    }
    report
}
