//!
//! The benchmark report library.
//!

pub mod output;
pub mod output_format;
pub mod record;
pub mod report;


pub use crate::output::csv::Csv as CsvOutput;
pub use crate::output::json::Json as JsonOutput;
pub use crate::output::Output;
pub use crate::output_format::OutputFormat;
pub use crate::record::MetricsRecord;
pub use crate::report::entry::Entry as ReportEntry;
pub use crate::report::Report;
