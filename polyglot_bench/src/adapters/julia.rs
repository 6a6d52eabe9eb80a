//!
//! The Julia language adapter.
//!

use std::path::Path;
use std::process::Command;

use crate::adapters::Adapter;
use crate::adapters::Preparation;
use crate::error::Error;

///
/// The Julia language adapter.
///
/// Runs scripts with the `julia` executable. No flags are passed by default;
/// any come solely from the toolchain configuration file.
///
#[derive(Debug, Default)]
pub struct JuliaAdapter {
    /// The runtime flags passed before the script path.
    flags: Vec<String>,
}

impl JuliaAdapter {
    /// The runtime executable.
    pub const EXECUTABLE: &'static str = "julia";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(flags: Vec<String>) -> Self {
        Self { flags }
    }
}

impl Adapter for JuliaAdapter {
    fn name(&self) -> &str {
        "julia"
    }

    fn title(&self) -> &str {
        "Julia"
    }

    fn extensions(&self) -> &[&str] {
        &[".jl"]
    }

    fn requires_compilation(&self) -> bool {
        false
    }

    fn prepare(&self, source_file: &Path) -> anyhow::Result<Preparation> {
        if which::which(Self::EXECUTABLE).is_err() {
            return Err(Error::ToolNotFound {
                executable: Self::EXECUTABLE.to_owned(),
                language: self.title().to_owned(),
            }
            .into());
        }
        Ok(Preparation::interpreted(source_file))
    }

    fn execution_command(&self, artifact: &Path) -> Command {
        let mut command = Command::new(Self::EXECUTABLE);
        command.args(self.flags.as_slice());
        command.arg(artifact);
        command
    }

    fn cleanup(&self, _artifact: &Path) -> anyhow::Result<()> {
        Ok(())
    }
}
