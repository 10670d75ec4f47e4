use burn::data::dataset::Dataset;
use std::sync::Arc;

use crate::data::transform::TransformPipeline;
use crate::domain::event_record::EventRecord;

/// One partition's records, wrapped for Burn's DataLoader.
/// Transforms are applied once, when the partition is built.
#[derive(Debug, Clone)]
pub struct EventDataset {
    records: Arc<Vec<EventRecord>>,
}

impl EventDataset {
    pub fn new(records: Vec<EventRecord>, transforms: &TransformPipeline) -> Self {
        let records = if transforms.is_empty() {
            records
        } else {
            records.into_iter().map(|r| transforms.apply(r)).collect()
        };
        Self { records: Arc::new(records) }
    }

    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }
}

impl Dataset<EventRecord> for EventDataset {
    fn get(&self, index: usize) -> Option<EventRecord> {
        self.records.get(index).cloned()
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
