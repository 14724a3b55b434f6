//! Rendered tree lines and the notices that replace unreadable subtrees

use std::fmt;
use std::io;

/// Connector for every entry except the last one at its level.
pub const BRANCH: &str = "├── ";
/// Connector for the last entry at its level.
pub const LAST_BRANCH: &str = "└── ";
/// Continuation indent under a non-last entry.
pub const PIPE_INDENT: &str = "│   ";
/// Continuation indent under a last entry.
pub const BLANK_INDENT: &str = "    ";

/// Pick the connector glyph for an entry.
pub fn connector(is_last: bool) -> &'static str {
    if is_last { LAST_BRANCH } else { BRANCH }
}

/// Calculate the prefix for the children of an entry.
pub fn child_prefix(current_prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}{}", current_prefix, BLANK_INDENT)
    } else {
        format!("{}{}", current_prefix, PIPE_INDENT)
    }
}

/// One rendered entry: indent prefix, connector, name and a trailing slash
/// for directories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeLine<'a> {
    pub prefix: &'a str,
    pub is_last: bool,
    pub name: &'a str,
    pub is_dir: bool,
}

impl fmt::Display for TreeLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.prefix, connector(self.is_last), self.name)?;
        if self.is_dir {
            f.write_str("/")?;
        }
        Ok(())
    }
}

/// Header line for the root directory.
///
/// A filesystem root such as `/` already ends with a separator and is not
/// given a second one.
pub fn root_line(name: &str) -> String {
    if name.ends_with('/') || name.ends_with('\\') {
        name.to_string()
    } else {
        format!("{}/", name)
    }
}

/// Why a directory's children were not rendered.
///
/// Rendered as the directory's sole child line. Notices are local: siblings
/// and ancestors keep rendering normally.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DirNotice {
    #[error("[Access Denied]")]
    AccessDenied,
    /// The directory resolves to one of its own ancestors.
    #[error("[Symlink Loop]")]
    SymlinkLoop,
    #[error("[Error: {0}]")]
    Error(String),
}

impl From<io::Error> for DirNotice {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => DirNotice::AccessDenied,
            _ => DirNotice::Error(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connector_glyphs() {
        assert_eq!(connector(false), "├── ");
        assert_eq!(connector(true), "└── ");
    }

    #[test]
    fn test_child_prefix() {
        assert_eq!(child_prefix("", false), "│   ");
        assert_eq!(child_prefix("", true), "    ");
        assert_eq!(child_prefix("│   ", true), "│       ");
        assert_eq!(child_prefix("    ", false), "    │   ");
    }

    #[test]
    fn test_tree_line_display() {
        let file = TreeLine {
            prefix: "│   ",
            is_last: false,
            name: "main.rs",
            is_dir: false,
        };
        assert_eq!(file.to_string(), "│   ├── main.rs");

        let dir = TreeLine {
            prefix: "",
            is_last: true,
            name: "src",
            is_dir: true,
        };
        assert_eq!(dir.to_string(), "└── src/");
    }

    #[test]
    fn test_root_line() {
        assert_eq!(root_line("project"), "project/");
        assert_eq!(root_line("/"), "/");
        assert_eq!(root_line("C:\\"), "C:\\");
    }

    #[test]
    fn test_notice_from_permission_denied() {
        let err = io::Error::from(io::ErrorKind::PermissionDenied);
        assert_eq!(DirNotice::from(err), DirNotice::AccessDenied);
    }

    #[test]
    fn test_notice_from_other_error_keeps_message() {
        let err = io::Error::new(io::ErrorKind::Other, "device not ready");
        let notice = DirNotice::from(err);
        assert_eq!(notice.to_string(), "[Error: device not ready]");
    }

    #[test]
    fn test_notice_display() {
        assert_eq!(DirNotice::AccessDenied.to_string(), "[Access Denied]");
        assert_eq!(DirNotice::SymlinkLoop.to_string(), "[Symlink Loop]");
    }
}
