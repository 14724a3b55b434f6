//! Configuration types for tree walkers

use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;

/// Order of entries within the directory group and within the file group.
///
/// Directories always precede files regardless of the order chosen here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    /// Keep the order the operating system enumerates entries in
    #[default]
    #[value(name = "fs")]
    FileSystem,
    /// Sort by file name (byte order of the OS string)
    Name,
}

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    pub sort: SortOrder,
    /// A single path skipped while listing, used to keep the generated
    /// artifact out of its own tree. Held as canonical parent plus file name;
    /// set it through [`WalkerConfig::with_exclude`].
    pub exclude: Option<PathBuf>,
}

impl WalkerConfig {
    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Skip `path` while listing.
    ///
    /// The path is matched by its parent's canonical form plus its file name,
    /// so `..` components, symlinked parents and relative spellings all
    /// exclude the same entry.
    pub fn with_exclude(mut self, path: impl AsRef<Path>) -> Self {
        self.exclude = Some(resolve_exclusion(path.as_ref()));
        self
    }
}

fn resolve_exclusion(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    if let (Some(parent), Some(name)) = (absolute.parent(), absolute.file_name()) {
        if let Ok(parent) = fs::canonicalize(parent) {
            return parent.join(name);
        }
    }
    absolute
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_exclusion_collapses_parent_components() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        let canonical = fs::canonicalize(dir.path()).unwrap();

        let config = WalkerConfig::default().with_exclude(dir.path().join("sub/../tree.txt"));
        assert_eq!(config.exclude, Some(canonical.join("tree.txt")));
    }

    #[test]
    fn test_exclusion_with_missing_parent_kept_as_given() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing/tree.txt");
        let config = WalkerConfig::default().with_exclude(&path);
        assert_eq!(config.exclude, Some(path));
    }
}
