//! Error types for tree file generation

use std::io;
use std::path::PathBuf;

/// Failures that stop a generation run.
///
/// Unreadable directories inside the tree are not errors; they are rendered
/// inline as notices and the walk continues.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("cannot access '{}': No such file or directory", .0.display())]
    RootNotFound(PathBuf),

    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("generation worker terminated unexpectedly")]
    WorkerPanicked,

    #[error(transparent)]
    Io(#[from] io::Error),
}
