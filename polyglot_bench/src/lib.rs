//!
//! The polyglot benchmark library.
//!


pub(crate) mod adapters;
pub(crate) mod config;
pub(crate) mod error;
pub(crate) mod process;
pub(crate) mod program;
pub(crate) mod toolchain;

pub use self::adapters::cpp::CppAdapter;
pub use self::adapters::julia::JuliaAdapter;
pub use self::adapters::python::PythonAdapter;
pub use self::adapters::registry::Registry;
pub use self::adapters::Adapter;
pub use self::adapters::Execution;
pub use self::adapters::Preparation;
pub use self::config::read_config_blocks;
pub use self::config::ConfigBlock;
pub use self::error::Error;
pub use self::program::Program;
pub use self::toolchain::ToolchainConfig;

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use colored::Colorize;

use benchmark_report::MetricsRecord;
use benchmark_report::Report;
use benchmark_report::ReportEntry;

/// The length of the standard error snippet shown in run warnings.
pub const STDERR_SNIPPET_LENGTH: usize = 200;

///
/// The console verbosity level.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Warnings only.
    Quiet,
    #[default]
    /// Progress, timings, and warnings.
    Normal,
    /// Everything, including full block texts and subprocess command lines.
    Verbose,
}

///
/// One program requested on the command line.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The language name, or none to detect it from the file extension.
    pub language: Option<String>,
    /// The source file path.
    pub path: PathBuf,
}

impl Request {
    ///
    /// A request with an explicitly named language.
    ///
    pub fn named(language: String, path: PathBuf) -> Self {
        Self {
            language: Some(language),
            path,
        }
    }

    ///
    /// A request resolving the language from the file extension.
    ///
    pub fn detected(path: PathBuf) -> Self {
        Self {
            language: None,
            path,
        }
    }
}

///
/// The benchmark runner.
///
/// Drives the full lifecycle over every requested program: resolve adapters,
/// prepare, warm up, execute each configuration block, and clean up. The
/// collected timings are returned as a report; writing it anywhere is the
/// caller's business.
///
pub struct BenchmarkRunner<'a> {
    /// The language adapter registry.
    registry: &'a Registry,
    /// The benchmark configuration file path.
    config_path: PathBuf,
    /// The per-execution deadline, unbounded when unset.
    timeout: Option<Duration>,
    /// The console verbosity level.
    verbosity: Verbosity,
}

impl<'a> BenchmarkRunner<'a> {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        registry: &'a Registry,
        config_path: PathBuf,
        timeout: Option<Duration>,
        verbosity: Verbosity,
    ) -> Self {
        Self {
            registry,
            config_path,
            timeout,
            verbosity,
        }
    }

    ///
    /// Runs the full benchmark and returns the collected report.
    ///
    /// Preparation failures abort the run and leave artifacts in place for
    /// inspection. Failures of the benchmarked executions themselves are
    /// recorded in the report and warned about, but never abort the run.
    ///
    pub fn run(&self, requests: Vec<Request>) -> anyhow::Result<Report> {
        let mut programs = self.resolve(requests)?;
        if programs.len() < 2 {
            return Err(Error::InsufficientPrograms {
                count: programs.len(),
            }
            .into());
        }

        let blocks = config::read_config_blocks(self.config_path.as_path())?;

        for program in programs.iter_mut() {
            self.progress(format!(
                "   {} {} program `{}` from {:?}",
                "Preparing".bright_green().bold(),
                program.adapter.title(),
                program.label,
                program.source,
            ));
            let preparation = program.adapter.prepare(program.source.as_path())?;
            program.set_prepared(preparation);
        }

        for program in programs.iter() {
            self.progress(format!(
                "     {} up `{}`",
                "Warming".bright_green().bold(),
                program.label,
            ));
            if !program.adapter.warmup(program.artifact()) {
                Self::warning(format!("The `{}` warm-up run failed", program.label));
            }
        }

        let mut report = Report::with_capacity(blocks.len());
        for (index, block) in blocks.iter().enumerate() {
            self.progress(format!(
                "     {} block {}/{}: {}",
                "Running".bright_green().bold(),
                index + 1,
                blocks.len(),
                block.preview(),
            ));
            self.verbose(format!("Block text:\n{}", block.text));

            let mut entry = ReportEntry::new(block.text.clone());
            let mut block_times: Vec<(String, f64)> = Vec::with_capacity(programs.len());
            for program in programs.iter() {
                self.verbose(format!(
                    "`{}` command: {}",
                    program.label,
                    process::format_command(&program.adapter.execution_command(program.artifact())),
                ));

                let execution =
                    program
                        .adapter
                        .execute(program.artifact(), block.text.as_str(), self.timeout)?;
                if execution.timed_out {
                    Self::warning(format!(
                        "`{}` exceeded the timeout on block {} and was killed",
                        program.label,
                        index + 1,
                    ));
                } else if execution.exit_code != 0 {
                    Self::warning(format!(
                        "`{}` exited with code {} on block {}: {}",
                        program.label,
                        execution.exit_code,
                        index + 1,
                        snippet(execution.stderr.as_str()).trim_end(),
                    ));
                }

                let record = MetricsRecord::new(
                    execution.execution_time,
                    program.compilation_time(),
                    execution.stdout,
                    execution.stderr,
                    execution.exit_code,
                );
                self.progress(format!(
                    "`{}` runtime: {:.4}s",
                    program.label, record.execution_time,
                ));
                if record.compilation_time > 0.0 {
                    self.progress(format!(
                        "`{}` compile time: {:.4}s",
                        program.label, record.compilation_time,
                    ));
                    self.progress(format!(
                        "`{}` total: {:.4}s",
                        program.label, record.total_time,
                    ));
                }
                block_times.push((program.label.clone(), record.execution_time));
                entry.insert(program.label.clone(), record);
            }

            if let [(first_label, first_time), (second_label, second_time), ..] =
                block_times.as_slice()
            {
                let speedup = if *second_time > 0.0 {
                    first_time / second_time
                } else {
                    0.0
                };
                self.progress(format!(
                    "`{first_label}` vs `{second_label}` speedup: {speedup:.2}x"
                ));
            }

            report.push(entry);
        }

        for program in programs.iter() {
            if program.adapter.requires_compilation() {
                self.progress(format!(
                    "    {} up after `{}`",
                    "Cleaning".bright_green().bold(),
                    program.label,
                ));
            }
            if let Err(error) = program.adapter.cleanup(program.artifact()) {
                Self::warning(format!("{error}"));
            }
        }

        Ok(report)
    }

    ///
    /// Resolves every request to a labeled program.
    ///
    /// Labels are the language names; when one language appears more than
    /// once, its programs get 1-based ordinal suffixes in request order.
    ///
    fn resolve(&self, requests: Vec<Request>) -> anyhow::Result<Vec<Program>> {
        let mut programs = Vec::with_capacity(requests.len());
        for request in requests.into_iter() {
            let Request { language, path } = request;
            let adapter = match language.as_deref() {
                Some(name) => self.registry.by_name(name),
                None => self.registry.by_file(path.as_path()),
            };
            let adapter = match adapter {
                Some(adapter) => adapter,
                None => {
                    let language = language.unwrap_or_else(|| {
                        path.extension()
                            .map(|extension| format!(".{}", extension.to_string_lossy()))
                            .unwrap_or_else(|| path.to_string_lossy().into_owned())
                    });
                    return Err(Error::UnsupportedLanguage {
                        language,
                        supported: self.registry.supported_languages().join(", "),
                    }
                    .into());
                }
            };
            programs.push(Program::new(String::new(), path, adapter));
        }

        let mut language_totals: BTreeMap<String, usize> = BTreeMap::new();
        for program in programs.iter() {
            *language_totals
                .entry(program.adapter.name().to_owned())
                .or_default() += 1;
        }
        let mut language_ordinals: BTreeMap<String, usize> = BTreeMap::new();
        for program in programs.iter_mut() {
            let name = program.adapter.name().to_owned();
            let ordinal = language_ordinals
                .entry(name.clone())
                .and_modify(|ordinal| *ordinal += 1)
                .or_insert(1);
            program.label = if language_totals
                .get(name.as_str())
                .copied()
                .unwrap_or_default()
                > 1
            {
                format!("{name}-{ordinal}")
            } else {
                name
            };
        }

        Ok(programs)
    }

    ///
    /// Prints a progress line unless quieted.
    ///
    fn progress(&self, message: String) {
        if self.verbosity >= Verbosity::Normal {
            println!("{message}");
        }
    }

    ///
    /// Prints a detail line in verbose mode only.
    ///
    fn verbose(&self, message: String) {
        if self.verbosity >= Verbosity::Verbose {
            println!("{message}");
        }
    }

    ///
    /// Prints a warning, regardless of verbosity.
    ///
    fn warning(message: String) {
        eprintln!("     {} {message}", "Warning".bright_red().bold());
    }
}

///
/// Truncates standard error output to the snippet length shown in warnings.
///
fn snippet(stderr: &str) -> &str {
    match stderr.char_indices().nth(STDERR_SNIPPET_LENGTH) {
        Some((index, _)) => &stderr[..index],
        None => stderr,
    }
}
