//!
//! The polyglot benchmark arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The polyglot benchmark arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// Python program source files.
    #[arg(long = "py", value_name = "PATH")]
    pub python: Vec<PathBuf>,

    /// C++ program source files.
    #[arg(long = "cpp", value_name = "PATH")]
    pub cpp: Vec<PathBuf>,

    /// Julia program source files.
    #[arg(long = "jl", value_name = "PATH")]
    pub julia: Vec<PathBuf>,

    /// Program source files whose language is detected from the file extension.
    #[arg(long = "program", value_name = "PATH")]
    pub programs: Vec<PathBuf>,

    /// The benchmark configuration file with blank-line-separated parameter blocks.
    #[arg(short, long)]
    pub config: PathBuf,

    /// The report output path.
    #[arg(short, long, default_value = "results/all_metrics.json")]
    pub output: PathBuf,

    /// The report output format: `json` or `csv`.
    #[arg(long, default_value_t = benchmark_report::OutputFormat::Json)]
    pub format: benchmark_report::OutputFormat,

    /// The toolchain configuration file with per-language flag overrides.
    #[arg(long = "toolchain-config")]
    pub toolchain_config: Option<PathBuf>,

    /// The per-execution timeout in seconds. Executions are unbounded when unset.
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Suppresses progress output, keeping warnings.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Prints full block texts and subprocess command lines.
    #[arg(short, long)]
    pub verbose: bool,
}
