// ============================================================
// Layer 4 — Record Transforms
// ============================================================
// Optional per-record rewrites applied when a partition is
// wrapped into an EventDataset. Configured by name:
//
//   "normalize_whitespace" → NormalizeWhitespace
//   "lowercase"            → Lowercase
//
// Steps run in the order they are listed. An empty pipeline
// passes records through untouched.

use anyhow::{bail, Result};
use std::sync::Arc;

use crate::domain::event_record::EventRecord;
use crate::domain::traits::RecordTransform;

// ─── NormalizeWhitespace ──────────────────────────────────────────────────────
/// Cleans both columns of a record:
///   1. Non-breaking / zero-width spaces, BOMs and control
///      characters become plain spaces
///   2. Runs of spaces collapse to one
///   3. Leading and trailing spaces are trimmed
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizeWhitespace;

impl NormalizeWhitespace {
    pub const NAME: &'static str = "normalize_whitespace";

    /// Clean a single field.
    pub fn clean(&self, text: &str) -> String {
        let mut out        = String::with_capacity(text.len());
        let mut last_space = false;

        for c in text.chars() {
            let c = match c {
                '\u{00A0}' | '\u{200B}' | '\u{FEFF}' => ' ',
                c if c.is_control()                  => ' ',
                c                                    => c,
            };

            if c == ' ' {
                if !last_space {
                    out.push(' ');
                }
                last_space = true;
            } else {
                out.push(c);
                last_space = false;
            }
        }

        out.trim().to_string()
    }
}

impl RecordTransform for NormalizeWhitespace {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn apply(&self, record: EventRecord) -> EventRecord {
        EventRecord {
            event_name: self.clean(&record.event_name),
            label:      self.clean(&record.label),
        }
    }
}

// ─── Lowercase ────────────────────────────────────────────────────────────────
/// Lowercases the event name. Labels are left alone since they
/// are class identifiers, not text.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lowercase;

impl Lowercase {
    pub const NAME: &'static str = "lowercase";
}

impl RecordTransform for Lowercase {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn apply(&self, mut record: EventRecord) -> EventRecord {
        record.event_name = record.event_name.to_lowercase();
        record
    }
}

// ─── TransformPipeline ────────────────────────────────────────────────────────
/// An ordered list of transforms. Cheap to clone: steps are shared.
#[derive(Debug, Clone, Default)]
pub struct TransformPipeline {
    steps: Vec<Arc<dyn RecordTransform>>,
}

impl TransformPipeline {
    /// The identity pipeline
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step; returns self so calls can be chained.
    pub fn with(mut self, step: impl RecordTransform + 'static) -> Self {
        self.steps.push(Arc::new(step));
        self
    }

    /// Build a pipeline from configuration names, in order.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        let mut pipeline = Self::new();

        for name in names {
            pipeline = match name.as_ref() {
                NormalizeWhitespace::NAME => pipeline.with(NormalizeWhitespace),
                Lowercase::NAME           => pipeline.with(Lowercase),
                other => bail!(
                    "Unknown transform '{}' (expected '{}' or '{}')",
                    other,
                    NormalizeWhitespace::NAME,
                    Lowercase::NAME
                ),
            };
        }

        Ok(pipeline)
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|s| s.name()).collect()
    }

    /// Run every step over one record.
    pub fn apply(&self, record: EventRecord) -> EventRecord {
        self.steps.iter().fold(record, |rec, step| step.apply(rec))
    }
}
