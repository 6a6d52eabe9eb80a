//!
//! The per-configuration-block report entry.
//!

use std::collections::BTreeMap;

use crate::record::MetricsRecord;

///
/// The outcome of benchmarking every requested program against one
/// configuration block.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Entry {
    /// The originating configuration block text, kept verbatim for traceability.
    pub config: String,
    /// The metrics records keyed by program label.
    pub programs: BTreeMap<String, MetricsRecord>,
}

impl Entry {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(config: String) -> Self {
        Self {
            config,
            programs: BTreeMap::new(),
        }
    }

    ///
    /// Adds a program's record under its label.
    ///
    pub fn insert(&mut self, label: String, record: MetricsRecord) {
        self.programs.insert(label, record);
    }
}
