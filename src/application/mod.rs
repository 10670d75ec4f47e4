// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Drives the data module through a full stage the way a
// training loop would: setup, then one pass over each loader.
//
// Rules for this layer:
//   - No parsing or batching code here (that's Layer 4)
//   - No printing here (that's Layer 1)
//   - Only workflow coordination

// Fit stage: train + validation loaders
pub mod fit_use_case;

// Test stage: test loader
pub mod test_use_case;

use burn::prelude::Backend;

use crate::data::dataloader::EventLoader;

/// Backend the loaders are built for. Batches are host-side
/// strings, so the CPU backend is all that is needed.
pub type LoaderBackend = burn::backend::NdArray;

/// What one pass over a partition's loader produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionSummary {
    pub name:    &'static str,
    pub records: usize,
    pub batches: usize,
}

/// Run one epoch over `loader`, counting what comes out.
pub fn drain_loader<B: Backend>(name: &'static str, loader: &EventLoader<B>) -> PartitionSummary {
    let mut records = 0usize;
    let mut batches = 0usize;

    for batch in loader.iter() {
        records += batch.len();
        batches += 1;
        tracing::trace!("{} batch {}: {} records", name, batches, batch.len());
    }

    tracing::info!("{}: {} records in {} batches", name, records, batches);
    PartitionSummary { name, records, batches }
}
