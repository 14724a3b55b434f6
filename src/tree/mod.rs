//! Directory tree walking logic
//!
//! Two walkers share one listing routine so their views of a tree agree:
//!
//! - `Counter`: totals the entries below a root, used as the progress denominator
//! - `TreeBuilder`: renders the tree as connector-drawn text lines

mod builder;
mod config;
mod counter;
mod line;
mod traversal;

pub use builder::{BuildSummary, TreeBuilder};
pub use config::{SortOrder, WalkerConfig};
pub use counter::{Counter, ItemCount};
pub use line::{
    BLANK_INDENT, BRANCH, DirNotice, LAST_BRANCH, PIPE_INDENT, TreeLine, child_prefix, connector,
    root_line,
};
pub use traversal::{Entry, display_name, list_entries};
