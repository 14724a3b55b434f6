//! Progress reporting from the generation worker
//!
//! The worker pushes events into an unbounded channel and never waits on the
//! consumer. The consumer drains events at its own pace and uses [`Throttle`]
//! to decide when a re-render is worth doing.

use std::sync::mpsc::Sender;
use std::time::{Duration, Instant};

use crate::generate::GenerationReport;

/// An event emitted while a tree file is generated.
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressEvent {
    /// Counting finished; `total` is the number of entries expected
    Started { total: usize },
    /// One entry was rendered
    Visited { name: String },
    /// The tree file was written
    Finished { report: GenerationReport },
    /// Generation aborted
    Failed { message: String },
}

/// Receives the name of each entry as it is rendered.
pub trait ProgressSink {
    fn visited(&mut self, name: &str);
}

impl<F: FnMut(&str)> ProgressSink for F {
    fn visited(&mut self, name: &str) {
        self(name)
    }
}

/// A sink that drops every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn visited(&mut self, _name: &str) {}
}

/// Forwards entry names into an event channel.
///
/// Sending never blocks, and a disconnected receiver is ignored so a consumer
/// that stops listening cannot stall generation.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    sender: Sender<ProgressEvent>,
}

impl ChannelSink {
    pub fn new(sender: Sender<ProgressEvent>) -> Self {
        Self { sender }
    }

    pub fn send(&self, event: ProgressEvent) {
        let _ = self.sender.send(event);
    }
}

impl ProgressSink for ChannelSink {
    fn visited(&mut self, name: &str) {
        self.send(ProgressEvent::Visited {
            name: name.to_string(),
        });
    }
}

/// Integer percentage of `done` out of `total`, clamped to 100.
///
/// An empty total counts as complete.
pub fn percent(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    (done.saturating_mul(100) / total).min(100) as u8
}

/// Rate limiter for re-rendering progress.
#[derive(Debug, Clone)]
pub struct Throttle {
    interval: Duration,
    last: Option<Instant>,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    /// Returns true if a render should happen at `now`, recording it if so.
    pub fn ready_at(&mut self, now: Instant) -> bool {
        match self.last {
            Some(last) if now.saturating_duration_since(last) < self.interval => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }

    pub fn ready(&mut self) -> bool {
        self.ready_at(Instant::now())
    }
}
