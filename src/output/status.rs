//! Terminal progress line and completion summary
//!
//! The progress line lives on stderr and is redrawn in place with `\r`, so
//! stdout carries only the final summary (or JSON report).

use std::io::{self, Write};
use std::time::Duration;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::generate::GenerationReport;
use crate::progress::{ProgressEvent, Throttle, percent};

use super::config::OutputConfig;

/// Minimum time between two redraws of the progress line.
const REDRAW_INTERVAL: Duration = Duration::from_millis(50);
/// Longest entry name shown on the progress line, in terminal columns.
const MAX_NAME_WIDTH: usize = 60;

/// Shorten `name` to at most `max` terminal columns, marking the cut with `…`.
fn truncate_name(name: &str, max: usize) -> String {
    if name.width() <= max {
        return name.to_string();
    }
    let budget = max.saturating_sub(1);
    let mut short = String::new();
    let mut width = 0;
    for c in name.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        width += w;
        short.push(c);
    }
    short.push('…');
    short
}

/// Text of the progress line, without color.
pub fn status_line(done: usize, total: usize, name: &str) -> String {
    format!(
        "[{:>3}%] {}",
        percent(done, total),
        truncate_name(name, MAX_NAME_WIDTH)
    )
}

/// Text of the completion summary, without color.
pub fn summary_line(report: &GenerationReport) -> String {
    let mut line = format!(
        "{} ({} directories, {} files",
        report.output.display(),
        report.directories,
        report.files
    );
    if report.notices > 0 {
        line.push_str(&format!(", {} unreadable", report.notices));
    }
    let elapsed = Duration::from_millis(report.elapsed.as_millis().try_into().unwrap_or(u64::MAX));
    line.push_str(&format!(") in {}", humantime::format_duration(elapsed)));
    line
}

fn color_choice(use_color: bool) -> ColorChoice {
    if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

/// Live progress display fed by [`ProgressEvent`]s.
pub struct ProgressDisplay {
    stderr: StandardStream,
    throttle: Throttle,
    enabled: bool,
    total: usize,
    done: usize,
    /// Columns covered by the last line drawn, for clearing it
    drawn: usize,
}

impl ProgressDisplay {
    pub fn new(config: &OutputConfig) -> Self {
        Self {
            stderr: StandardStream::stderr(color_choice(config.use_color)),
            throttle: Throttle::new(REDRAW_INTERVAL),
            enabled: config.show_progress,
            total: 0,
            done: 0,
            drawn: 0,
        }
    }

    pub fn handle(&mut self, event: &ProgressEvent) -> io::Result<()> {
        match event {
            ProgressEvent::Started { total } => {
                self.total = *total;
                Ok(())
            }
            ProgressEvent::Visited { name } => {
                self.done += 1;
                if self.enabled && self.throttle.ready() {
                    self.draw(name)?;
                }
                Ok(())
            }
            ProgressEvent::Finished { .. } | ProgressEvent::Failed { .. } => self.clear(),
        }
    }

    fn draw(&mut self, name: &str) -> io::Result<()> {
        self.clear()?;
        let line = status_line(self.done, self.total, name);
        let (badge, rest) = line.split_at(line.find(']').map_or(0, |i| i + 1));

        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan)).set_bold(true);
        self.stderr.set_color(&spec)?;
        write!(self.stderr, "{}", badge)?;
        self.stderr.reset()?;
        write!(self.stderr, "{}", rest)?;
        self.stderr.flush()?;

        self.drawn = line.width();
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        if self.drawn == 0 {
            return Ok(());
        }
        write!(self.stderr, "\r{}\r", " ".repeat(self.drawn))?;
        self.stderr.flush()?;
        self.drawn = 0;
        Ok(())
    }
}

/// Print the completion summary to stdout.
pub fn print_summary(report: &GenerationReport, use_color: bool) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(color_choice(use_color));

    let mut spec = ColorSpec::new();
    spec.set_fg(Some(Color::Green)).set_bold(true);
    stdout.set_color(&spec)?;
    write!(stdout, "Tree file saved:")?;
    stdout.reset()?;
    writeln!(stdout, " {}", summary_line(report))?;
    Ok(())
}
