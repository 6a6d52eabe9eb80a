//!
//! The benchmark run fatal errors.
//!

use std::path::PathBuf;

///
/// A fatal benchmark run error.
///
/// Every variant aborts the run before or during preparation: no partial
/// benchmarking happens once one candidate cannot run at all. Non-zero exit
/// codes of benchmarked executions are recorded in the report instead and do
/// not appear here.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A requested language has no registered adapter.
    #[error("Language `{language}` is not supported. Supported languages: {supported}")]
    UnsupportedLanguage {
        /// The requested language name or file extension.
        language: String,
        /// The comma-separated supported language names.
        supported: String,
    },
    /// Fewer than two programs were requested.
    #[error("A benchmark needs at least two programs to compare, got {count}")]
    InsufficientPrograms {
        /// The number of resolved programs.
        count: usize,
    },
    /// An interpreter executable is missing from the system search path.
    #[error("The `{executable}` executable for {language} not found in ${{PATH}}")]
    ToolNotFound {
        /// The executable name looked up.
        executable: String,
        /// The language display name.
        language: String,
    },
    /// No compiler from the preference list is present on the system search path.
    #[error("No {language} compiler found in ${{PATH}}, tried: {tried}")]
    NoCompilerFound {
        /// The language display name.
        language: String,
        /// The comma-separated compiler executables tried.
        tried: String,
    },
    /// The compiler terminated with a non-zero exit code.
    #[error("Compiling {path:?} failed: `{command}` exited with code {exit_code}:\n{diagnostics}")]
    CompilationFailure {
        /// The source file path.
        path: PathBuf,
        /// The full compilation command line.
        command: String,
        /// The compiler exit code.
        exit_code: i32,
        /// The compiler diagnostic output.
        diagnostics: String,
    },
}
