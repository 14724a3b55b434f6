//! Document layout and terminal output
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `document` - Tree file header and writing
//! - `status` - Live progress line and completion summary
//! - `json` - JSON report output

mod config;
mod document;
mod json;
mod status;

pub use config::OutputConfig;
pub use document::{RULE_WIDTH, document_header, write_document};
pub use json::print_report_json;
pub use status::{ProgressDisplay, print_summary, status_line, summary_line};
