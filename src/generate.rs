//! Tree file generation
//!
//! A [`Generator`] validates its root up front, then renders the tree and
//! writes the document. [`Generator::spawn`] does the work on a dedicated
//! worker thread and reports progress over a channel so the caller stays
//! responsive.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use serde::{Serialize, Serializer};
use tracing::{debug, info};

use crate::error::GenerateError;
use crate::output::{document_header, write_document};
use crate::progress::{ChannelSink, ProgressEvent, ProgressSink};
use crate::tree::{Counter, ItemCount, SortOrder, TreeBuilder, WalkerConfig};

/// File name used when no output path is given.
pub const DEFAULT_OUTPUT_NAME: &str = "Folder_Structure.txt";

/// Options for a generation run.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Where to write the tree file; defaults to `<root>/Folder_Structure.txt`
    pub output: Option<PathBuf>,
    pub sort: SortOrder,
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationReport {
    pub root: PathBuf,
    pub output: PathBuf,
    pub directories: usize,
    pub files: usize,
    pub notices: usize,
    #[serde(rename = "elapsed_ms", serialize_with = "serialize_millis")]
    pub elapsed: Duration,
}

impl GenerationReport {
    pub fn entries(&self) -> usize {
        self.directories + self.files
    }
}

fn serialize_millis<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(duration.as_millis().try_into().unwrap_or(u64::MAX))
}

/// Renders one root directory into one tree file.
#[derive(Debug, Clone)]
pub struct Generator {
    root: PathBuf,
    output: PathBuf,
    walker: WalkerConfig,
}

impl Generator {
    /// Validate `root` and resolve the output path.
    ///
    /// Relative paths are resolved against the current directory, and a path
    /// with `..` components is canonicalized so the root line names the
    /// directory itself. The root must exist and be a directory; nothing is
    /// traversed or written otherwise.
    pub fn new(root: impl AsRef<Path>, options: GenerateOptions) -> Result<Self, GenerateError> {
        let root = std::path::absolute(root.as_ref())?;
        let metadata = fs::metadata(&root).map_err(|e| root_error(&root, e))?;
        if !metadata.is_dir() {
            return Err(GenerateError::NotADirectory(root));
        }
        let root = if root.components().any(|c| c == Component::ParentDir) {
            fs::canonicalize(&root).map_err(|e| root_error(&root, e))?
        } else {
            root
        };

        let output = match options.output {
            Some(path) => std::path::absolute(path)?,
            None => root.join(DEFAULT_OUTPUT_NAME),
        };
        let walker = WalkerConfig::default()
            .with_sort(options.sort)
            .with_exclude(&output);

        Ok(Self {
            root,
            output,
            walker,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Count the entries the run will render.
    pub fn count(&self) -> ItemCount {
        Counter::new(self.walker.clone()).count(&self.root)
    }

    /// Render the tree and write the document, reporting entries to `progress`.
    pub fn run<P>(&self, progress: &mut P) -> Result<GenerationReport, GenerateError>
    where
        P: ProgressSink + ?Sized,
    {
        let start = Instant::now();
        debug!("rendering {}", self.root.display());

        let mut document = document_header(&self.root);
        let summary = TreeBuilder::new(self.walker.clone()).build(&self.root, &mut document, progress);

        write_document(&self.output, &document).map_err(|source| GenerateError::Write {
            path: self.output.clone(),
            source,
        })?;

        let report = GenerationReport {
            root: self.root.clone(),
            output: self.output.clone(),
            directories: summary.directories,
            files: summary.files,
            notices: summary.notices,
            elapsed: start.elapsed(),
        };
        info!(
            "wrote {} ({} directories, {} files, {} notices)",
            report.output.display(),
            report.directories,
            report.files,
            report.notices
        );
        Ok(report)
    }

    /// Run on a worker thread.
    ///
    /// The returned handle yields `Started`, one `Visited` per entry, then
    /// exactly one of `Finished` or `Failed`. The channel closes when the
    /// worker exits.
    pub fn spawn(self) -> Result<GenerationHandle, GenerateError> {
        let (sender, events) = mpsc::channel();
        let worker = thread::Builder::new()
            .name("foldertree-worker".to_string())
            .spawn(move || {
                let sink = ChannelSink::new(sender);
                let total = self.count();
                debug!("counted {} entries ({} skipped)", total.items, total.skipped);
                sink.send(ProgressEvent::Started { total: total.items });

                let result = self.run(&mut sink.clone());
                match &result {
                    Ok(report) => sink.send(ProgressEvent::Finished {
                        report: report.clone(),
                    }),
                    Err(e) => sink.send(ProgressEvent::Failed {
                        message: e.to_string(),
                    }),
                }
                result
            })?;

        Ok(GenerationHandle { events, worker })
    }
}

fn root_error(root: &Path, error: io::Error) -> GenerateError {
    match error.kind() {
        io::ErrorKind::NotFound => GenerateError::RootNotFound(root.to_path_buf()),
        _ => GenerateError::Io(error),
    }
}

/// A generation running on a worker thread.
pub struct GenerationHandle {
    events: Receiver<ProgressEvent>,
    worker: JoinHandle<Result<GenerationReport, GenerateError>>,
}

impl GenerationHandle {
    pub fn events(&self) -> &Receiver<ProgressEvent> {
        &self.events
    }

    /// Wait for the worker and return its result.
    pub fn join(self) -> Result<GenerationReport, GenerateError> {
        self.worker
            .join()
            .map_err(|_| GenerateError::WorkerPanicked)?
    }
}
