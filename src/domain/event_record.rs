// ============================================================
// Layer 3 — EventRecord Domain Type
// ============================================================
// A single raw row of the input file: the name of an event and
// the label attached to it. Both columns are kept as strings;
// tokenisation happens downstream of this crate.
//
// Input line (tab-separated, no header):
//   user_login<TAB>benign
//
// becomes
//   EventRecord { event_name: "user_login", label: "benign" }

use serde::{Deserialize, Serialize};

/// One event-name/label pair read from a TSV row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventRecord {
    /// First column of the row
    pub event_name: String,

    /// Second column of the row
    pub label: String,
}

impl EventRecord {
    /// Create a new EventRecord.
    /// Accepts &str or String for both fields.
    pub fn new(event_name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            event_name: event_name.into(),
            label:      label.into(),
        }
    }
}
