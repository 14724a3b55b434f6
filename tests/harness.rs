//! Test harness for foldertree integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

pub use foldertree::test_utils::TestDir;

/// Run the binary with `args`, returning (stdout, stderr, success).
pub fn run_foldertree(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_foldertree");
    let output = Command::new(binary)
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to run foldertree");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

/// Path of the default tree file for a root.
pub fn tree_file(root: &Path) -> PathBuf {
    root.join("Folder_Structure.txt")
}

/// Read a tree file and drop its three header lines, leaving the tree body.
pub fn read_tree_body(path: &Path) -> String {
    let contents = fs::read_to_string(path).expect("Failed to read tree file");
    contents
        .split_inclusive('\n')
        .skip(3)
        .collect::<String>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_named_root() {
        let dir = TestDir::named("project");
        assert!(dir.path().is_dir());
        assert!(dir.path().ends_with("project"));
    }

    #[test]
    fn test_harness_add_file() {
        let dir = TestDir::new();
        let file_path = dir.add_file("nested/deeper/file.txt", "content");
        assert!(file_path.exists());
    }
}
