// ============================================================
// Layer 4 — Event Batcher
// ============================================================
// Implements Burn's Batcher trait to turn a Vec<EventRecord>
// into an EventBatch.
//
// The batch stays on the host as two parallel string columns:
//
//   Input:  [ (login, benign), (wipe, malicious), ... ]  (N records)
//   Output: EventBatch {
//             event_names: [login, wipe, ...]             (N)
//             labels:      [benign, malicious, ...]       (N)
//           }
//
// Tokenising into tensors is the model's job, so the device
// argument Burn passes in is not used here.
//
// Reference: Burn Book §4 (Batcher)

use burn::{data::dataloader::batcher::Batcher, prelude::*};

use crate::domain::event_record::EventRecord;

// ─── EventBatch ───────────────────────────────────────────────────────────────
/// A batch of records in column form.
/// `event_names[i]` and `labels[i]` come from the same row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventBatch {
    pub event_names: Vec<String>,
    pub labels:      Vec<String>,
}

impl EventBatch {
    /// Number of rows in this batch
    pub fn len(&self) -> usize {
        self.event_names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.event_names.is_empty()
    }
}

// ─── EventBatcher ─────────────────────────────────────────────────────────────
/// Stateless batcher; works for any Burn backend.
#[derive(Clone, Debug, Default)]
pub struct EventBatcher;

impl EventBatcher {
    pub fn new() -> Self {
        Self
    }
}

// The DataLoader calls .batch(items, device) with each mini-batch.
impl<B: Backend> Batcher<B, EventRecord, EventBatch> for EventBatcher {
    fn batch(&self, items: Vec<EventRecord>, _device: &B::Device) -> EventBatch {
        let (event_names, labels) = items
            .into_iter()
            .map(|r| (r.event_name, r.label))
            .unzip();

        EventBatch { event_names, labels }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;

    #[test]
    fn test_batch_keeps_rows_aligned() {
        let items = vec![
            EventRecord::new("login", "benign"),
            EventRecord::new("wipe",  "malicious"),
        ];
        let batch = <EventBatcher as Batcher<NdArray, EventRecord, EventBatch>>::batch(
            &EventBatcher::new(),
            items,
            &Default::default(),
        );

        assert_eq!(batch.len(), 2);
        assert_eq!(batch.event_names, vec!["login", "wipe"]);
        assert_eq!(batch.labels,      vec!["benign", "malicious"]);
    }

    #[test]
    fn test_empty_batch() {
        let batch = <EventBatcher as Batcher<NdArray, EventRecord, EventBatch>>::batch(
            &EventBatcher::new(),
            Vec::new(),
            &Default::default(),
        );
        assert!(batch.is_empty());
    }
}
