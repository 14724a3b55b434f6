//! Common traversal logic shared by Counter and TreeBuilder.
//!
//! Both walkers list directories through [`open_dir`], so they agree on entry
//! classification, ordering, exclusion and loop detection. That agreement is
//! what makes the counter a valid progress denominator for the builder.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::config::{SortOrder, WalkerConfig};
use super::line::DirNotice;

/// A listed child of a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

/// A directory that was successfully opened for expansion.
#[derive(Debug)]
pub(crate) struct OpenDir {
    pub canonical: PathBuf,
    pub entries: Vec<Entry>,
}

/// Get the display name of a path, falling back to the whole path for
/// filesystem roots that have no final component.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// List a directory: subdirectories first, then files.
///
/// Symbolic links are classified by their target; a dangling link is listed
/// as a file. Any error reading the directory or one of its entries fails the
/// whole listing.
pub fn list_entries(path: &Path, config: &WalkerConfig) -> io::Result<Vec<Entry>> {
    let canonical = fs::canonicalize(path)?;
    read_entries(path, &canonical, config)
}

/// List `path`, whose canonical form is `canonical`.
fn read_entries(path: &Path, canonical: &Path, config: &WalkerConfig) -> io::Result<Vec<Entry>> {
    let excluded = config
        .exclude
        .as_deref()
        .filter(|exclude| exclude.parent() == Some(canonical))
        .and_then(Path::file_name);

    let mut dirs = Vec::new();
    let mut files = Vec::new();

    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let file_name = entry.file_name();
        if excluded == Some(file_name.as_os_str()) {
            continue;
        }

        let entry_path = entry.path();

        let file_type = entry.file_type()?;
        let is_dir = if file_type.is_symlink() {
            fs::metadata(&entry_path).is_ok_and(|m| m.is_dir())
        } else {
            file_type.is_dir()
        };

        let item = Entry {
            name: file_name.to_string_lossy().into_owned(),
            path: entry_path,
            is_dir,
        };
        if is_dir {
            dirs.push(item);
        } else {
            files.push(item);
        }
    }

    if config.sort == SortOrder::Name {
        dirs.sort_by(|a, b| a.name.cmp(&b.name));
        files.sort_by(|a, b| a.name.cmp(&b.name));
    }

    dirs.extend(files);
    Ok(dirs)
}

/// Open a directory for expansion.
///
/// `ancestors` yields the canonical paths of every directory currently being
/// expanded above this one; a directory resolving to any of them is refused
/// with [`DirNotice::SymlinkLoop`].
pub(crate) fn open_dir<'a>(
    path: &Path,
    config: &WalkerConfig,
    mut ancestors: impl Iterator<Item = &'a Path>,
) -> Result<OpenDir, DirNotice> {
    let canonical = fs::canonicalize(path)?;
    if ancestors.any(|ancestor| ancestor == canonical) {
        return Err(DirNotice::SymlinkLoop);
    }
    let entries = read_entries(path, &canonical, config)?;
    Ok(OpenDir { canonical, entries })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn names(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_directories_listed_before_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "").unwrap();
        fs::create_dir(dir.path().join("zzz")).unwrap();
        fs::write(dir.path().join("b.txt"), "").unwrap();

        let entries = list_entries(dir.path(), &WalkerConfig::default()).unwrap();
        assert_eq!(entries.len(), 3);
        assert!(entries[0].is_dir);
        assert_eq!(entries[0].name, "zzz");
        assert!(entries[1..].iter().all(|e| !e.is_dir));
    }

    #[test]
    fn test_name_sort_within_groups() {
        let dir = TempDir::new().unwrap();
        for name in ["c.txt", "a.txt", "b.txt"] {
            fs::write(dir.path().join(name), "").unwrap();
        }
        for name in ["y", "x"] {
            fs::create_dir(dir.path().join(name)).unwrap();
        }

        let config = WalkerConfig::default().with_sort(SortOrder::Name);
        let entries = list_entries(dir.path(), &config).unwrap();
        assert_eq!(names(&entries), ["x", "y", "a.txt", "b.txt", "c.txt"]);
    }

    #[test]
    fn test_excluded_path_is_skipped() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("keep.txt"), "").unwrap();
        fs::write(dir.path().join("Folder_Structure.txt"), "").unwrap();

        let config = WalkerConfig::default().with_exclude(dir.path().join("Folder_Structure.txt"));
        let entries = list_entries(dir.path(), &config).unwrap();
        assert_eq!(names(&entries), ["keep.txt"]);
    }

    #[test]
    fn test_exclusion_matches_other_spellings() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("tree.txt"), "").unwrap();
        fs::write(dir.path().join("keep.txt"), "").unwrap();

        let config = WalkerConfig::default()
            .with_sort(SortOrder::Name)
            .with_exclude(dir.path().join("sub/../tree.txt"));
        let entries = list_entries(dir.path(), &config).unwrap();
        assert_eq!(names(&entries), ["sub", "keep.txt"]);

        // The same file name in another directory is still listed.
        fs::write(dir.path().join("sub/tree.txt"), "").unwrap();
        let entries = list_entries(&dir.path().join("sub"), &config).unwrap();
        assert_eq!(names(&entries), ["tree.txt"]);
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let result = list_entries(&dir.path().join("missing"), &WalkerConfig::default());
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks_classified_by_target() {
        use std::os::unix::fs::symlink;

        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("real")).unwrap();
        symlink(dir.path().join("real"), dir.path().join("link")).unwrap();
        symlink(dir.path().join("nowhere"), dir.path().join("dangling")).unwrap();

        let config = WalkerConfig::default().with_sort(SortOrder::Name);
        let entries = list_entries(dir.path(), &config).unwrap();
        assert_eq!(names(&entries), ["link", "real", "dangling"]);
        assert!(entries[0].is_dir);
        assert!(!entries[2].is_dir);
    }

    #[cfg(unix)]
    #[test]
    fn test_open_dir_refuses_ancestor() {
        let dir = TempDir::new().unwrap();
        let root = fs::canonicalize(dir.path()).unwrap();
        let result = open_dir(dir.path(), &WalkerConfig::default(), [root.as_path()].into_iter());
        assert_eq!(result.unwrap_err(), DirNotice::SymlinkLoop);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name(Path::new("/home/user/project")), "project");
        assert_eq!(display_name(Path::new("/")), "/");
    }
}
