// ============================================================
// Layer 4 — Event DataLoader
// ============================================================
// Thin wrapper over Burn's DataLoaderBuilder that remembers the
// settings it was built with:
//
//   batch_size          → DataLoaderBuilder::batch_size
//   num_workers         → DataLoaderBuilder::num_workers (only when > 0;
//                         0 keeps Burn's single-threaded loader)
//   pin_memory          → carried for the consumer; string batches
//                         live on the host either way
//   persistent_workers  → num_workers > 0
//
// Loaders never reshuffle: batches follow the partition order
// fixed by the seeded shuffle in setup().
//
// Reference: Burn Book §4 (Datasets and Dataloaders)

use burn::{
    data::dataloader::{DataLoader, DataLoaderBuilder, DataLoaderIterator},
    prelude::*,
};
use std::sync::Arc;

use crate::data::batcher::{EventBatch, EventBatcher};
use crate::data::config::DataModuleConfig;
use crate::data::dataset::EventDataset;
use crate::domain::event_record::EventRecord;

/// The knobs every loader of one data module shares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoaderSettings {
    pub batch_size:         usize,
    pub num_workers:        usize,
    pub pin_memory:         bool,
    pub persistent_workers: bool,
}

impl From<&DataModuleConfig> for LoaderSettings {
    fn from(cfg: &DataModuleConfig) -> Self {
        Self {
            batch_size:         cfg.batch_size,
            num_workers:        cfg.num_workers,
            pin_memory:         cfg.pin_memory,
            persistent_workers: cfg.num_workers > 0,
        }
    }
}

/// A batching iterator over one partition.
pub struct EventLoader<B: Backend> {
    inner:    Arc<dyn DataLoader<B, EventBatch>>,
    settings: LoaderSettings,
}

impl<B: Backend> EventLoader<B> {
    pub fn new(dataset: EventDataset, settings: LoaderSettings) -> Self {
        let mut builder = DataLoaderBuilder::<B, EventRecord, EventBatch>::new(EventBatcher::new())
            .batch_size(settings.batch_size);

        if settings.num_workers > 0 {
            builder = builder.num_workers(settings.num_workers);
        }

        tracing::debug!(
            "Built loader over {} records: batch_size={}, num_workers={}, pin_memory={}, persistent_workers={}",
            dataset.records().len(),
            settings.batch_size,
            settings.num_workers,
            settings.pin_memory,
            settings.persistent_workers,
        );

        Self {
            inner: builder.build(dataset),
            settings,
        }
    }

    /// Iterate over one epoch of batches
    pub fn iter(&self) -> Box<dyn DataLoaderIterator<EventBatch> + '_> {
        self.inner.iter()
    }

    /// Number of records in the partition
    pub fn num_items(&self) -> usize {
        self.inner.num_items()
    }

    /// Number of batches one epoch yields; the last one may be short.
    pub fn num_batches(&self) -> usize {
        self.num_items().div_ceil(self.settings.batch_size)
    }

    pub fn settings(&self) -> LoaderSettings {
        self.settings
    }
}
