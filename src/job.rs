//! One generation run (read, lay out, render, write) and the polling
//! watcher that repeats it whenever the graph file changes.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::Error;
use crate::layout::full_layout;
use crate::parsers::load_file;
use crate::renderers::{OutputFormat, Renderer};

/// Where to read the definition, where to write the output and in which format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateJob {
    pub graph: PathBuf,
    pub output: PathBuf,
    pub format: OutputFormat,
}

impl GenerateJob {
    pub fn new(graph: impl Into<PathBuf>, output: impl Into<PathBuf>, format: OutputFormat) -> Self {
        Self {
            graph: graph.into(),
            output: output.into(),
            format,
        }
    }

    /// Read the graph, lay it out, render and write the output once.
    ///
    /// The output file is left untouched when any step fails.
    pub fn run(&self) -> Result<(), Error> {
        tracing::info!(graph = %self.graph.display(), "reading graph");
        let def = load_file(&self.graph)?;
        let layout_result = full_layout(&def)?;
        let rendered = self
            .format
            .renderer(def.head_config.clone())
            .render(&layout_result);
        fs::write(&self.output, rendered)?;
        tracing::info!(output = %self.output.display(), format = %self.format, "wrote output");
        Ok(())
    }
}

// ─── Watcher ─────────────────────────────────────────────────────────────────

/// Outcome of one watcher poll.
#[derive(Debug)]
pub enum WatchEvent {
    /// The graph file has not changed (or is missing) since the last poll.
    Unchanged,
    /// The graph changed and the output was regenerated.
    Generated,
    /// The graph changed but the user must fix it first. The output is stale.
    Rejected(Error),
}

/// Re-runs a [`GenerateJob`] whenever the graph file's modification time changes.
#[derive(Debug)]
pub struct Watcher {
    job: GenerateJob,
    last_seen: Option<SystemTime>,
}

fn modified(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).and_then(|m| m.modified()).ok()
}

impl Watcher {
    pub fn new(job: GenerateJob) -> Self {
        Self {
            job,
            last_seen: None,
        }
    }

    pub fn job(&self) -> &GenerateJob {
        &self.job
    }

    /// Check the graph file once and regenerate if it changed.
    ///
    /// User-input errors come back as [`WatchEvent::Rejected`] so the caller
    /// can keep polling. Layout faults are returned as `Err`.
    pub fn poll(&mut self) -> Result<WatchEvent, Error> {
        let current = modified(&self.job.graph);
        if current.is_none() || current == self.last_seen {
            return Ok(WatchEvent::Unchanged);
        }
        self.last_seen = current;
        match self.job.run() {
            Ok(()) => Ok(WatchEvent::Generated),
            Err(e) if e.is_fault() => Err(e),
            Err(e) => Ok(WatchEvent::Rejected(e)),
        }
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_job.rs"]
mod tests;
