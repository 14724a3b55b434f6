//! Tree file document layout
//!
//! ```text
//! Folder Structure: <root-path>
//! ════════════════════════════════════════════════════════════
//!
//! <root-name>/
//! ├── ...
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Width of the rule under the title line, in characters.
pub const RULE_WIDTH: usize = 60;
const RULE_CHAR: char = '═';

/// Title line, rule and blank line that open every tree file.
pub fn document_header(root: &Path) -> String {
    let mut header = String::new();
    header.push_str(&format!("Folder Structure: {}\n", root.display()));
    header.extend(std::iter::repeat_n(RULE_CHAR, RULE_WIDTH));
    header.push_str("\n\n");
    header
}

/// Write a finished document to `path` as UTF-8, replacing any existing file.
pub fn write_document(path: &Path, contents: &str) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(contents.as_bytes())?;
    writer.flush()
}
