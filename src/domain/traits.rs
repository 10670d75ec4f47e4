// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// Two seams the data module is built against:
//
//   RecordSource    → where raw rows come from
//                     (TsvLoader reads them from disk; tests
//                     plug in an in-memory source)
//   RecordTransform → a per-record rewrite applied when a
//                     partition is wrapped into a dataset

use anyhow::Result;
use std::fmt::Debug;

use crate::domain::event_record::EventRecord;
use crate::domain::stage::Stage;

// ─── RecordSource ─────────────────────────────────────────────────────────────
/// Any component that can produce the raw rows for a stage.
pub trait RecordSource: Send + Sync {
    /// Load every row for `stage`, in file order.
    fn load(&self, stage: Stage) -> Result<Vec<EventRecord>>;
}

// ─── RecordTransform ──────────────────────────────────────────────────────────
/// A single step of the transform pipeline.
///
/// Implementations:
///   - NormalizeWhitespace → cleans stray whitespace in both columns
///   - Lowercase           → lowercases the event name
pub trait RecordTransform: Send + Sync + Debug {
    /// Configuration name of this transform
    fn name(&self) -> &'static str;

    /// Rewrite one record
    fn apply(&self, record: EventRecord) -> EventRecord;
}
