//!
//! Serializing report data to CSV.
//!

use std::fmt::Write;

use crate::record::MetricsRecord;
use crate::report::Report;

///
/// Serialize the report to CSV in the following format:
/// "block", "program", "execution_time", "compilation_time", "total_time", "exit_code"
///
/// The flattening is lossy: the configuration text and the captured program
/// output do not fit single-line rows and are omitted.
///
#[derive(Default)]
pub struct Csv {
    /// The CSV string.
    pub content: String,
}

impl Csv {
    ///
    /// Estimate the length of a CSV line based on the expected maximum lengths of each field.
    ///
    fn estimate_csv_line_length() -> usize {
        let number_fields = 4;
        let number_field_estimated_max_length = 24;
        let label_estimated_max = 32;
        label_estimated_max + number_fields * number_field_estimated_max_length
    }

    ///
    /// Estimate the size of the CSV file based on the number of records and the estimated line length.
    ///
    fn estimate_csv_size(report: &Report) -> usize {
        (report.records_count() + 1) * Self::estimate_csv_line_length()
    }
}

impl From<Report> for Csv {
    fn from(report: Report) -> Csv {
        let mut content = String::with_capacity(Self::estimate_csv_size(&report));
        content.push_str(
            r#""block", "program", "execution_time", "compilation_time", "total_time", "exit_code""#,
        );
        content.push('\n');

        for (index, entry) in report.entries.into_iter().enumerate() {
            let block = index + 1;
            for (
                label,
                MetricsRecord {
                    execution_time,
                    compilation_time,
                    total_time,
                    exit_code,
                    ..
                },
            ) in entry.programs.into_iter()
            {
                writeln!(
                    &mut content,
                    r#"{block}, "{label}", {execution_time}, {compilation_time}, {total_time}, {exit_code}"#,
                )
                .expect("Always valid");
            }
        }

        Self { content }
    }
}
