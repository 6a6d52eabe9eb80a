//!
//! The per-execution metrics record.
//!

use std::time::Duration;

///
/// The timing and outcome data captured for one program execution against one
/// configuration block.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MetricsRecord {
    /// The wall-clock execution time in seconds.
    pub execution_time: f64,
    /// The compilation time in seconds. Zero for interpreted languages.
    pub compilation_time: f64,
    /// The total time in seconds, the exact sum of the compilation and execution times.
    pub total_time: f64,
    /// The captured standard output.
    pub stdout: String,
    /// The captured standard error.
    pub stderr: String,
    /// The process exit code. On Unix, a process killed by signal N is reported as `-N`.
    pub exit_code: i32,
}

impl MetricsRecord {
    ///
    /// A shortcut constructor.
    ///
    /// The total time is derived from the two stored components, so
    /// `total_time == compilation_time + execution_time` holds exactly.
    ///
    pub fn new(
        execution: Duration,
        compilation: Duration,
        stdout: String,
        stderr: String,
        exit_code: i32,
    ) -> Self {
        let execution_time = execution.as_secs_f64();
        let compilation_time = compilation.as_secs_f64();
        Self {
            execution_time,
            compilation_time,
            total_time: compilation_time + execution_time,
            stdout,
            stderr,
            exit_code,
        }
    }

    ///
    /// Whether the execution terminated with a zero exit code.
    ///
    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}
