//!
//! The benchmarked program descriptor.
//!

use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::adapters::Adapter;
use crate::adapters::Preparation;

///
/// One candidate program within a benchmark run.
///
/// Pairs a source file with its language adapter and carries the per-run
/// preparation state, so adapters themselves stay stateless and shareable.
///
#[derive(Clone)]
pub struct Program {
    /// The unique label identifying the program in reports and output.
    pub label: String,
    /// The source file path as given on the command line.
    pub source: PathBuf,
    /// The language adapter driving the program.
    pub adapter: Arc<dyn Adapter>,
    /// The executable artifact produced by preparation.
    artifact: Option<PathBuf>,
    /// The compilation wall time, zero until prepared and for interpreted
    /// languages.
    compilation_time: Duration,
}

impl Program {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(label: String, source: PathBuf, adapter: Arc<dyn Adapter>) -> Self {
        Self {
            label,
            source,
            adapter,
            artifact: None,
            compilation_time: Duration::ZERO,
        }
    }

    ///
    /// Stores the preparation outcome.
    ///
    pub fn set_prepared(&mut self, preparation: Preparation) {
        self.artifact = Some(preparation.artifact);
        self.compilation_time = preparation.compilation_time;
    }

    ///
    /// The path executed at benchmark time.
    ///
    /// Falls back to the source file until the program has been prepared.
    ///
    pub fn artifact(&self) -> &Path {
        self.artifact.as_deref().unwrap_or(self.source.as_path())
    }

    ///
    /// The compilation wall time recorded during preparation.
    ///
    pub fn compilation_time(&self) -> Duration {
        self.compilation_time
    }
}
