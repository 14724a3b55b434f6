//! Counter - totals the entries below a root for progress reporting

use std::path::{Path, PathBuf};
use std::vec;

use serde::Serialize;
use tracing::debug;

use super::config::WalkerConfig;
use super::traversal::{Entry, open_dir};

/// Result of counting a tree.
///
/// Counting is lenient: a directory that cannot be expanded is still counted
/// as an item of its parent, its contents contribute nothing, and it is
/// tallied in `skipped` instead of failing the count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ItemCount {
    /// Directories and files found below the root, not including the root
    pub items: usize,
    /// Directories (the root included) whose contents could not be counted
    pub skipped: usize,
}

impl ItemCount {
    /// True when every directory was expanded.
    pub fn is_complete(&self) -> bool {
        self.skipped == 0
    }
}

/// Counts every directory and file below a root.
pub struct Counter {
    config: WalkerConfig,
}

impl Counter {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    pub fn count(&self, root: &Path) -> ItemCount {
        let mut count = ItemCount::default();
        let mut stack: Vec<(PathBuf, vec::IntoIter<Entry>)> = Vec::new();

        match open_dir(root, &self.config, std::iter::empty()) {
            Ok(dir) => stack.push((dir.canonical, dir.entries.into_iter())),
            Err(notice) => {
                debug!("not counting {}: {}", root.display(), notice);
                count.skipped += 1;
                return count;
            }
        }

        while let Some((_, entries)) = stack.last_mut() {
            let Some(entry) = entries.next() else {
                stack.pop();
                continue;
            };

            count.items += 1;
            if !entry.is_dir {
                continue;
            }

            let ancestors = stack.iter().map(|(canonical, _)| canonical.as_path());
            match open_dir(&entry.path, &self.config, ancestors) {
                Ok(dir) => stack.push((dir.canonical, dir.entries.into_iter())),
                Err(notice) => {
                    debug!("not counting {}: {}", entry.path.display(), notice);
                    count.skipped += 1;
                }
            }
        }

        count
    }
}
