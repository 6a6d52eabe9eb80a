//!
//! The report output.
//!

pub mod csv;
pub mod json;

use std::path::PathBuf;

use crate::output_format::OutputFormat;
use crate::report::Report;

use self::csv::Csv;
use self::json::Json;

///
/// The rendered report, a single output file.
///
#[derive(Debug)]
pub struct Output {
    /// The rendered file contents.
    pub content: String,
}

impl Output {
    ///
    /// Writes the report to a file, creating the parent directories as needed.
    ///
    pub fn write_to_file(self, path: PathBuf) -> anyhow::Result<()> {
        if let Some(directory) = path.parent() {
            if !directory.as_os_str().is_empty() {
                std::fs::create_dir_all(directory).map_err(|error| {
                    anyhow::anyhow!("Report directory {directory:?} creating: {error}")
                })?;
            }
        }
        std::fs::write(path.as_path(), self.content)
            .map_err(|error| anyhow::anyhow!("Report file {path:?} writing: {error}"))?;
        Ok(())
    }
}

impl TryFrom<(Report, OutputFormat)> for Output {
    type Error = anyhow::Error;

    fn try_from((report, output_format): (Report, OutputFormat)) -> Result<Self, Self::Error> {
        Ok(match output_format {
            OutputFormat::Json => Json::try_from(report)?.into(),
            OutputFormat::Csv => Csv::from(report).into(),
        })
    }
}

impl From<Json> for Output {
    fn from(value: Json) -> Self {
        Self {
            content: value.content,
        }
    }
}

impl From<Csv> for Output {
    fn from(value: Csv) -> Self {
        Self {
            content: value.content,
        }
    }
}
