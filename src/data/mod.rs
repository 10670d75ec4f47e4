// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything from the TSV files on disk to batches a training
// loop can consume.
//
//   train_data.csv / test_data.csv
//       │
//       ▼
//   TsvLoader         → reads rows as (event_name, label) strings
//       │
//       ▼
//   splitter          → seeded shuffle, floor(n * split) cut
//       │
//       ▼
//   TransformPipeline → optional per-record rewrites
//       │
//       ▼
//   EventDataset      → implements Burn's Dataset trait
//       │
//       ▼
//   EventBatcher      → stacks records into EventBatch columns
//       │
//       ▼
//   EventLoader       → Burn DataLoader + the settings it was built with
//
// EventDataModule owns the configuration and drives the steps
// through its prepare_data / setup / *_dataloader hooks.
//
// Reference: Burn Book §4 (Datasets and Dataloaders)

/// Serialisable data module settings
pub mod config;

/// Reads the tab-separated stage files
pub mod loader;

/// Per-record transforms and the pipeline that chains them
pub mod transform;

/// Seeded shuffle and train/validation split
pub mod splitter;

/// Implements Burn's Dataset trait for one partition
pub mod dataset;

/// Implements Burn's Batcher trait for string batches
pub mod batcher;

/// Wraps Burn's DataLoaderBuilder
pub mod dataloader;

/// The lifecycle hooks a training loop calls
pub mod datamodule;
