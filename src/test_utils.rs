//! Test utilities for creating temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// The tree root is a named subdirectory of a fresh temp dir, so rendered
/// root lines are predictable. Everything is removed when dropped.
pub struct TestDir {
    _dir: TempDir,
    root: PathBuf,
}

impl TestDir {
    /// Create an empty tree whose root is called `root`.
    pub fn new() -> Self {
        Self::named("root")
    }

    /// Create an empty tree whose root directory has the given name.
    pub fn named(name: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let root = dir.path().join(name);
        fs::create_dir(&root).expect("Failed to create root dir");
        Self { _dir: dir, root }
    }

    /// Get the path to the tree root.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add a directory, creating parent directories as needed.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.root.join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Populate a wide, moderately deep tree: `dirs` directories, each
    /// holding `files_per_dir` files and one nested directory with one file.
    pub fn populate(&self, dirs: usize, files_per_dir: usize) {
        for d in 0..dirs {
            for f in 0..files_per_dir {
                self.add_file(&format!("dir_{:03}/file_{:04}.txt", d, f), "");
            }
            self.add_file(&format!("dir_{:03}/nested/inner.txt", d), "");
        }
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}
