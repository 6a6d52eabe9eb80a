//!
//! The Python language adapter.
//!

use std::path::Path;
use std::process::Command;

use crate::adapters::Adapter;
use crate::adapters::Preparation;
use crate::error::Error;

///
/// The Python language adapter.
///
/// Runs scripts with the first interpreter discoverable on the search path,
/// preferring `python3` over the bare `python` alias.
///
#[derive(Debug, Default)]
pub struct PythonAdapter {
    /// The interpreter flags passed before the script path.
    flags: Vec<String>,
}

impl PythonAdapter {
    /// The interpreter executables in preference order.
    pub const INTERPRETERS: [&'static str; 2] = ["python3", "python"];

    ///
    /// A shortcut constructor.
    ///
    pub fn new(flags: Vec<String>) -> Self {
        Self { flags }
    }

    ///
    /// The first interpreter found on the search path.
    ///
    /// Falls back to the preferred name when none is found, so the
    /// subsequent spawn error names the executable that was expected.
    ///
    fn interpreter(&self) -> &'static str {
        Self::INTERPRETERS
            .into_iter()
            .find(|executable| which::which(executable).is_ok())
            .unwrap_or(Self::INTERPRETERS[0])
    }
}

impl Adapter for PythonAdapter {
    fn name(&self) -> &str {
        "python"
    }

    fn title(&self) -> &str {
        "Python"
    }

    fn extensions(&self) -> &[&str] {
        &[".py"]
    }

    fn requires_compilation(&self) -> bool {
        false
    }

    fn prepare(&self, source_file: &Path) -> anyhow::Result<Preparation> {
        if !Self::INTERPRETERS
            .into_iter()
            .any(|executable| which::which(executable).is_ok())
        {
            return Err(Error::ToolNotFound {
                executable: Self::INTERPRETERS[0].to_owned(),
                language: self.title().to_owned(),
            }
            .into());
        }
        Ok(Preparation::interpreted(source_file))
    }

    fn execution_command(&self, artifact: &Path) -> Command {
        let mut command = Command::new(self.interpreter());
        command.args(self.flags.as_slice());
        command.arg(artifact);
        command
    }

    fn cleanup(&self, _artifact: &Path) -> anyhow::Result<()> {
        Ok(())
    }
}
