//! TreeBuilder - renders a directory hierarchy into a text buffer

use std::path::{Path, PathBuf};
use std::vec;

use serde::Serialize;
use tracing::{debug, info};

use crate::progress::{NoProgress, ProgressSink};

use super::config::WalkerConfig;
use super::line::{DirNotice, LAST_BRANCH, TreeLine, child_prefix, root_line};
use super::traversal::{Entry, display_name, open_dir};

/// Totals for one rendering pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BuildSummary {
    pub directories: usize,
    pub files: usize,
    /// Bracketed lines rendered in place of unreadable subtrees
    pub notices: usize,
}

impl BuildSummary {
    /// Number of entry lines rendered, excluding the root line and notices.
    pub fn entries(&self) -> usize {
        self.directories + self.files
    }
}

/// A directory being expanded, with the prefix its children are drawn with.
struct Frame {
    canonical: PathBuf,
    entries: vec::IntoIter<Entry>,
    prefix: String,
}

/// Renders a tree depth-first, pre-order, onto an accumulating buffer.
///
/// Expansion is driven by an explicit stack, so nesting depth is bounded by
/// memory rather than by the thread's call stack.
pub struct TreeBuilder {
    config: WalkerConfig,
}

impl TreeBuilder {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Append the root line and every entry below `root` to `buffer`.
    ///
    /// Each entry name is reported to `progress` once, as its line is emitted.
    pub fn build<P>(&self, root: &Path, buffer: &mut String, progress: &mut P) -> BuildSummary
    where
        P: ProgressSink + ?Sized,
    {
        let mut summary = BuildSummary::default();
        buffer.push_str(&root_line(&display_name(root)));
        buffer.push('\n');

        let mut stack: Vec<Frame> = Vec::new();
        match open_dir(root, &self.config, std::iter::empty()) {
            Ok(dir) => stack.push(Frame {
                canonical: dir.canonical,
                entries: dir.entries.into_iter(),
                prefix: String::new(),
            }),
            Err(notice) => {
                push_notice(buffer, "", &notice, root, &mut summary);
                return summary;
            }
        }

        while let Some(frame) = stack.last_mut() {
            let Some(entry) = frame.entries.next() else {
                stack.pop();
                continue;
            };
            let is_last = frame.entries.len() == 0;

            let line = TreeLine {
                prefix: &frame.prefix,
                is_last,
                name: &entry.name,
                is_dir: entry.is_dir,
            };
            progress.visited(&entry.name);
            buffer.push_str(&format!("{}\n", line));

            if !entry.is_dir {
                summary.files += 1;
                continue;
            }
            summary.directories += 1;

            let prefix = child_prefix(&frame.prefix, is_last);
            let ancestors = stack.iter().map(|f| f.canonical.as_path());
            match open_dir(&entry.path, &self.config, ancestors) {
                Ok(dir) => {
                    debug!("expanding {}", entry.path.display());
                    stack.push(Frame {
                        canonical: dir.canonical,
                        entries: dir.entries.into_iter(),
                        prefix,
                    });
                }
                Err(notice) => push_notice(buffer, &prefix, &notice, &entry.path, &mut summary),
            }
        }

        summary
    }

    /// Render `root` into a fresh buffer, discarding progress.
    pub fn render(&self, root: &Path) -> (String, BuildSummary) {
        let mut buffer = String::new();
        let summary = self.build(root, &mut buffer, &mut NoProgress);
        (buffer, summary)
    }
}

/// Render a notice as the sole child of the directory that failed to expand.
fn push_notice(
    buffer: &mut String,
    prefix: &str,
    notice: &DirNotice,
    path: &Path,
    summary: &mut BuildSummary,
) {
    info!("{}: {}", path.display(), notice);
    buffer.push_str(&format!("{}{}{}\n", prefix, LAST_BRANCH, notice));
    summary.notices += 1;
}
