//!
//! The language adapters for the benchmarked programs.
//!


pub mod cpp;
pub mod julia;
pub mod python;
pub mod registry;

use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;
use std::time::Duration;

/// The conventional input file names every candidate program reads its
/// configuration from.
pub const INPUT_FILE_NAMES: [&str; 2] = ["config.txt", "input.txt"];

/// The sentinel payload written to the input files before a warm-up run.
pub const WARMUP_PAYLOAD: &str = "warmup\n";

/// The hard deadline for a single warm-up run.
pub const WARMUP_TIMEOUT: Duration = Duration::from_secs(10);

///
/// The successful result of preparing a source file.
///
#[derive(Debug, Clone)]
pub struct Preparation {
    /// The path invoked at execution time: the source file itself for
    /// interpreted languages, the compiled binary for compiled ones.
    pub artifact: PathBuf,
    /// The elapsed compilation wall time, zero for interpreted languages.
    pub compilation_time: Duration,
}

impl Preparation {
    ///
    /// A shortcut constructor for interpreted languages.
    ///
    pub fn interpreted(source_file: &Path) -> Self {
        Self {
            artifact: source_file.to_path_buf(),
            compilation_time: Duration::ZERO,
        }
    }

    ///
    /// A shortcut constructor for compiled languages.
    ///
    pub fn compiled(binary: PathBuf, compilation_time: Duration) -> Self {
        Self {
            artifact: binary,
            compilation_time,
        }
    }
}

///
/// The outcome of one timed program execution.
///
#[derive(Debug)]
pub struct Execution {
    /// The wall-clock time between spawn and exit.
    pub execution_time: Duration,
    /// The captured standard output.
    pub stdout: String,
    /// The captured standard error.
    pub stderr: String,
    /// The process exit code.
    pub exit_code: i32,
    /// Whether the run was killed on deadline expiry.
    pub timed_out: bool,
}

///
/// The language adapter trait.
///
/// Hides language-specific toolchain mechanics behind one uniform lifecycle:
/// prepare (optionally compile), warm up, execute, clean up. Adapters are
/// stateless aside from static configuration, so one instance serves every
/// program of its language within a run; per-run measurements stay with the
/// program.
///
pub trait Adapter: Send + Sync {
    ///
    /// The symbolic language name, the registry key.
    ///
    fn name(&self) -> &str;

    ///
    /// The human-readable language name for progress output.
    ///
    fn title(&self) -> &str;

    ///
    /// The recognized source file extensions.
    ///
    fn extensions(&self) -> &[&str];

    ///
    /// Whether the language needs a separate compilation step.
    ///
    fn requires_compilation(&self) -> bool;

    ///
    /// Prepares the source file for execution.
    ///
    /// Interpreted languages only check that the interpreter is discoverable
    /// on the search path. Compiled languages pick the first available
    /// compiler from their preference list, compile with the configured
    /// flags, time the compilation, and prime caches with one throwaway run
    /// of the fresh binary. All failures here are fatal to the benchmark run.
    ///
    fn prepare(&self, source_file: &Path) -> anyhow::Result<Preparation>;

    ///
    /// The exact subprocess invocation for a prepared artifact.
    ///
    /// A pure mapping: interpreter plus flags plus script, or the
    /// platform-correct binary invocation.
    ///
    fn execution_command(&self, artifact: &Path) -> Command;

    ///
    /// Runs the program once against a configuration block and times it.
    ///
    /// The block text is written to the conventional input files, durably,
    /// before the process is spawned. The run is unbounded unless a timeout
    /// is given; an expired run is killed and reported with `timed_out` set
    /// rather than failing the call. A non-zero exit code is an outcome, not
    /// an error.
    ///
    fn execute(
        &self,
        artifact: &Path,
        config_text: &str,
        timeout: Option<Duration>,
    ) -> anyhow::Result<Execution> {
        write_input_files(Path::new("."), config_text)?;
        let mut command = self.execution_command(artifact);
        let captured = crate::process::run_captured(&mut command, timeout)?;
        Ok(Execution {
            execution_time: captured.elapsed,
            stdout: captured.stdout,
            stderr: captured.stderr,
            exit_code: captured.exit_code,
            timed_out: captured.timed_out,
        })
    }

    ///
    /// Primes OS and filesystem caches with one throwaway run.
    ///
    /// Writes the sentinel payload to the input files and runs the program
    /// once with a short deadline, output silenced. Any failure, including a
    /// spawn error or deadline expiry, is swallowed: the return value exists
    /// for logging only and must never abort the benchmark.
    ///
    fn warmup(&self, artifact: &Path) -> bool {
        if write_input_files(Path::new("."), WARMUP_PAYLOAD).is_err() {
            return false;
        }
        let mut command = self.execution_command(artifact);
        crate::process::run_silenced(&mut command, WARMUP_TIMEOUT).unwrap_or(false)
    }

    ///
    /// Removes artifacts created during preparation.
    ///
    /// Idempotent: a missing artifact is a silent no-op, not an error.
    ///
    fn cleanup(&self, artifact: &Path) -> anyhow::Result<()>;
}

///
/// Writes the configuration text to the conventional input files.
///
/// A trailing newline is appended when the text lacks one. The files are
/// synced before returning: the consuming process may be spawned immediately
/// after, so the write must be complete on disk first.
///
pub fn write_input_files(directory: &Path, config_text: &str) -> anyhow::Result<()> {
    for file_name in INPUT_FILE_NAMES {
        let path = directory.join(file_name);
        let mut file = std::fs::File::create(path.as_path())
            .map_err(|error| anyhow::anyhow!("Input file {path:?} creating: {error}"))?;
        file.write_all(config_text.as_bytes())
            .map_err(|error| anyhow::anyhow!("Input file {path:?} writing: {error}"))?;
        if !config_text.ends_with('\n') {
            file.write_all(b"\n")
                .map_err(|error| anyhow::anyhow!("Input file {path:?} writing: {error}"))?;
        }
        file.sync_all()
            .map_err(|error| anyhow::anyhow!("Input file {path:?} syncing: {error}"))?;
    }
    Ok(())
}
