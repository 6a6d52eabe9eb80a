//!
//! The C++ language adapter.
//!

use std::path::Path;
use std::path::PathBuf;
use std::process::Command;

use crate::adapters::Adapter;
use crate::adapters::Preparation;
use crate::error::Error;

///
/// The C++ language adapter.
///
/// Compiles each source file with the first available compiler from the
/// preference list, then runs the resulting binary directly.
///
#[derive(Debug)]
pub struct CppAdapter {
    /// The compiler flags for GNU-style compilers.
    flags: Vec<String>,
}

impl CppAdapter {
    /// The compiler flags used when none are configured.
    pub const DEFAULT_FLAGS: [&'static str; 1] = ["-O2"];

    ///
    /// A shortcut constructor.
    ///
    pub fn new(flags: Option<Vec<String>>) -> Self {
        Self {
            flags: flags.unwrap_or_else(|| {
                Self::DEFAULT_FLAGS
                    .into_iter()
                    .map(str::to_owned)
                    .collect()
            }),
        }
    }

    ///
    /// The compiler executables in preference order.
    ///
    /// MSVC is only considered on Windows, where its flag dialect is handled
    /// separately.
    ///
    pub fn compiler_candidates() -> &'static [&'static str] {
        if cfg!(windows) {
            &["g++", "clang++", "cl"]
        } else {
            &["g++", "clang++"]
        }
    }

    ///
    /// The first compiler found on the search path.
    ///
    fn find_compiler() -> anyhow::Result<&'static str> {
        Self::compiler_candidates()
            .iter()
            .copied()
            .find(|executable| which::which(executable).is_ok())
            .ok_or_else(|| {
                Error::NoCompilerFound {
                    language: "C++".to_owned(),
                    tried: Self::compiler_candidates().join(", "),
                }
                .into()
            })
    }

    ///
    /// The temporary binary path for a source file.
    ///
    /// A bare name in the working directory, derived from the source file
    /// stem so that concurrent programs never collide.
    ///
    pub(crate) fn binary_path(source_file: &Path) -> PathBuf {
        let stem = source_file
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy();
        let extension = if cfg!(windows) { ".exe" } else { "" };
        PathBuf::from(format!("temp_{stem}_exec{extension}"))
    }

    ///
    /// The path form a shell-free spawn accepts.
    ///
    /// A bare relative name is not resolved against the working directory on
    /// Unix, so it gets a `./` prefix; absolute and multi-component paths
    /// pass through unchanged.
    ///
    pub(crate) fn invocation_path(artifact: &Path) -> PathBuf {
        if cfg!(windows) || artifact.is_absolute() || artifact.components().count() > 1 {
            artifact.to_path_buf()
        } else {
            Path::new(".").join(artifact)
        }
    }
}

impl Default for CppAdapter {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Adapter for CppAdapter {
    fn name(&self) -> &str {
        "cpp"
    }

    fn title(&self) -> &str {
        "C++"
    }

    fn extensions(&self) -> &[&str] {
        &[".cpp", ".cc", ".cxx", ".c++"]
    }

    fn requires_compilation(&self) -> bool {
        true
    }

    fn prepare(&self, source_file: &Path) -> anyhow::Result<Preparation> {
        let compiler = Self::find_compiler()?;
        let binary = Self::binary_path(source_file);

        let mut command = Command::new(compiler);
        if compiler == "cl" {
            command.arg("/O2");
            command.arg(format!("/Fe:{}", binary.to_string_lossy()));
            command.arg(source_file);
        } else {
            command.arg(source_file);
            command.args(self.flags.as_slice());
            command.arg("-o");
            command.arg(binary.as_path());
        }
        let command_text = crate::process::format_command(&command);

        let captured = crate::process::run_captured(&mut command, None)?;
        if captured.exit_code != 0 {
            let diagnostics = if captured.stderr.trim().is_empty() {
                captured.stdout
            } else {
                captured.stderr
            };
            return Err(Error::CompilationFailure {
                path: source_file.to_path_buf(),
                command: command_text,
                exit_code: captured.exit_code,
                diagnostics,
            }
            .into());
        }

        self.warmup(binary.as_path());
        Ok(Preparation::compiled(binary, captured.elapsed))
    }

    fn execution_command(&self, artifact: &Path) -> Command {
        Command::new(Self::invocation_path(artifact))
    }

    fn cleanup(&self, artifact: &Path) -> anyhow::Result<()> {
        match std::fs::remove_file(artifact) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(error) => anyhow::bail!("Removing compiled binary {artifact:?}: {error}"),
        }
    }
}
