//!
//! The polyglot benchmark executable.
//!

pub(crate) mod arguments;

use std::path::PathBuf;
use std::time::Duration;
use std::time::Instant;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;

/// The success exit code.
const EXIT_CODE_SUCCESS: i32 = 0;

/// The failure exit code.
const EXIT_CODE_FAILURE: i32 = 1;

///
/// The application entry point.
///
fn main() {
    let exit_code = match Arguments::try_parse()
        .map_err(|error| anyhow::anyhow!(error))
        .and_then(main_inner)
    {
        Ok(()) => EXIT_CODE_SUCCESS,
        Err(error) => {
            eprintln!("{error:?}");
            EXIT_CODE_FAILURE
        }
    };
    std::process::exit(exit_code);
}

///
/// The entry point wrapper used for proper error handling.
///
fn main_inner(arguments: Arguments) -> anyhow::Result<()> {
    if !arguments.quiet {
        println!(
            "    {} {} v{}",
            "Starting".bright_green().bold(),
            env!("CARGO_PKG_DESCRIPTION"),
            env!("CARGO_PKG_VERSION"),
        );
    }

    let toolchain = match arguments.toolchain_config {
        Some(ref path) => polyglot_bench::ToolchainConfig::load(path.as_path())?,
        None => polyglot_bench::ToolchainConfig::default(),
    };
    let registry = polyglot_bench::Registry::with_builtin_adapters(&toolchain);
    for language in toolchain.languages() {
        if registry.by_name(language).is_none() {
            eprintln!(
                "     {} toolchain flags for unknown language `{language}` are ignored",
                "Warning".bright_red().bold(),
            );
        }
    }

    let verbosity = if arguments.quiet {
        polyglot_bench::Verbosity::Quiet
    } else if arguments.verbose {
        polyglot_bench::Verbosity::Verbose
    } else {
        polyglot_bench::Verbosity::Normal
    };

    let mut requests = Vec::with_capacity(
        arguments.python.len()
            + arguments.cpp.len()
            + arguments.julia.len()
            + arguments.programs.len(),
    );
    requests.extend(group_requests("python", arguments.python));
    requests.extend(group_requests("cpp", arguments.cpp));
    requests.extend(group_requests("julia", arguments.julia));
    requests.extend(
        arguments
            .programs
            .into_iter()
            .map(polyglot_bench::Request::detected),
    );

    let timeout = arguments.timeout.map(Duration::from_secs);

    let run_time_start = Instant::now();
    let runner =
        polyglot_bench::BenchmarkRunner::new(&registry, arguments.config, timeout, verbosity);
    let report = runner.run(requests)?;
    let blocks_run = report.entries.len();

    let output: benchmark_report::Output = (report, arguments.format).try_into()?;
    output.write_to_file(arguments.output.clone())?;

    if !arguments.quiet {
        println!(
            "    {} benchmarking {} blocks in {}m{:02}s, report written to {:?}",
            "Finished".bright_green().bold(),
            blocks_run,
            run_time_start.elapsed().as_secs() / 60,
            run_time_start.elapsed().as_secs() % 60,
            arguments.output,
        );
    }

    Ok(())
}

///
/// Maps the source files of one explicitly flagged language to requests.
///
fn group_requests(
    language: &'static str,
    paths: Vec<PathBuf>,
) -> impl Iterator<Item = polyglot_bench::Request> {
    paths
        .into_iter()
        .map(move |path| polyglot_bench::Request::named(language.to_owned(), path))
}
