//! CLI entry point for foldertree

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use foldertree::{
    GenerateError, GenerateOptions, Generator, OutputConfig, ProgressDisplay, SortOrder,
    print_report_json, print_summary,
};
use tracing::debug;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode, is_terminal: bool) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            is_terminal
        }
    }
}

/// Diagnostic log verbosity
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum LogLevel {
    Debug,
    Info,
    #[default]
    Warn,
    Error,
    Silent,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<tracing::Level> {
        match self {
            LogLevel::Debug => Some(tracing::Level::DEBUG),
            LogLevel::Info => Some(tracing::Level::INFO),
            LogLevel::Warn => Some(tracing::Level::WARN),
            LogLevel::Error => Some(tracing::Level::ERROR),
            LogLevel::Silent => None,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "foldertree")]
#[command(about = "Write a folder's structure to a text file as an ASCII tree")]
#[command(version)]
struct Args {
    /// Directory to render
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Output file (default: <PATH>/Folder_Structure.txt)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Entry order within directories and within files
    #[arg(long, value_name = "ORDER", default_value = "fs")]
    sort: SortOrder,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Do not draw the progress line
    #[arg(short, long)]
    quiet: bool,

    /// Print the generation report as JSON
    #[arg(long)]
    json: bool,

    /// Diagnostic log level (written to stderr)
    #[arg(short, long, value_name = "LEVEL", default_value = "warn")]
    log_level: LogLevel,
}

fn setup_tracing(level: LogLevel) {
    if let Some(level) = level.to_tracing_level() {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .without_time()
            .compact()
            .init();
    }
}

fn run(args: &Args) -> Result<(), GenerateError> {
    let options = GenerateOptions {
        output: args.output.clone(),
        sort: args.sort,
    };
    // Rejects a missing or non-directory root before any work starts.
    let generator = Generator::new(&args.path, options)?;

    let stderr_is_terminal = std::io::stderr().is_terminal();
    let output_config = OutputConfig {
        use_color: should_use_color(args.color, stderr_is_terminal),
        show_progress: !args.quiet && stderr_is_terminal,
    };
    let mut display = ProgressDisplay::new(&output_config);

    let handle = generator.spawn()?;
    for event in handle.events() {
        if let Err(e) = display.handle(&event) {
            debug!("progress display failed: {e}");
        }
    }
    let report = handle.join()?;

    if args.json {
        print_report_json(&report)?;
    } else {
        print_summary(
            &report,
            should_use_color(args.color, std::io::stdout().is_terminal()),
        )?;
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    setup_tracing(args.log_level);
    debug!("Parsed CLI arguments: {args:?}");

    if let Err(e) = run(&args) {
        eprintln!("foldertree: {}", e);
        process::exit(1);
    }
}
