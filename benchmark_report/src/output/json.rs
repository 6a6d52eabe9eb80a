//!
//! Serializing report data to JSON.
//!

use crate::report::Report;

///
/// Serialize the report to pretty-printed JSON using the `serde` library.
///
#[derive(Default)]
pub struct Json {
    /// The JSON string.
    pub content: String,
}

impl TryFrom<Report> for Json {
    type Error = anyhow::Error;

    fn try_from(report: Report) -> Result<Self, Self::Error> {
        let content = serde_json::to_string_pretty(&report)
            .map_err(|error| anyhow::anyhow!("Report JSON serialization: {error}"))?;
        Ok(Self { content })
    }
}
