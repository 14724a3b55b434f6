//! Output configuration types

/// Configuration for terminal output.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
    /// Draw a live progress line on stderr while generating
    pub show_progress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_color: true,
            show_progress: true,
        }
    }
}
