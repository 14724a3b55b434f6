//! Foldertree - render a folder's hierarchy into an ASCII tree text file

pub mod error;
pub mod generate;
pub mod output;
pub mod progress;
pub mod tree;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use error::GenerateError;
pub use generate::{
    DEFAULT_OUTPUT_NAME, GenerateOptions, GenerationHandle, GenerationReport, Generator,
};
pub use output::{OutputConfig, ProgressDisplay, print_report_json, print_summary};
pub use progress::{ChannelSink, NoProgress, ProgressEvent, ProgressSink, Throttle};
pub use tree::{BuildSummary, Counter, ItemCount, SortOrder, TreeBuilder, WalkerConfig};
