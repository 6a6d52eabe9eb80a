//!
//! The benchmark report representation.
//!

pub mod entry;

use self::entry::Entry;

///
/// The benchmark report representation.
///
/// Serializes as a JSON array whose element order is the configuration file's
/// block order, which downstream consumers rely on for trend plotting.
///
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Report {
    /// The per-block entries, in configuration file order.
    pub entries: Vec<Entry>,
}

impl Report {
    ///
    /// A shortcut constructor.
    ///
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    ///
    /// Appends the next block's entry.
    ///
    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    ///
    /// The number of metrics records across all entries.
    ///
    pub fn records_count(&self) -> usize {
        self.entries.iter().map(|entry| entry.programs.len()).sum()
    }
}
