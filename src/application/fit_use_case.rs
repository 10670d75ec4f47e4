// ============================================================
// Layer 2 — FitUseCase
// ============================================================
// Runs the fit stage end to end:
//
//   Step 1: Save the resolved config    (Layer 6 - infra, optional)
//   Step 2: Build the data module       (Layer 4 - data)
//   Step 3: setup(Fit)                  (Layer 4 - data)
//   Step 4: One pass over train + val   (Layer 4 - data)

use anyhow::Result;
use std::path::PathBuf;

use crate::application::{drain_loader, LoaderBackend, PartitionSummary};
use crate::data::{config::DataModuleConfig, datamodule::EventDataModule};
use crate::domain::stage::Stage;
use crate::infra::hparams::HparamsStore;

pub struct FitUseCase {
    config:      DataModuleConfig,
    hparams_dir: Option<PathBuf>,
}

/// Train and validation summaries from one fit pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FitReport {
    pub train: PartitionSummary,
    pub val:   PartitionSummary,
}

impl FitUseCase {
    pub fn new(config: DataModuleConfig, hparams_dir: Option<PathBuf>) -> Self {
        Self { config, hparams_dir }
    }

    pub fn execute(&self) -> Result<FitReport> {
        // ── Step 1: Snapshot the config ───────────────────────────────────────
        if let Some(dir) = &self.hparams_dir {
            HparamsStore::new(dir).save(&self.config)?;
        }

        // ── Step 2 + 3: Build partitions ──────────────────────────────────────
        let mut dm = EventDataModule::new(self.config.clone())?;
        tracing::info!("{}", dm);
        dm.setup(Stage::Fit)?;

        // ── Step 4: Drain loaders ─────────────────────────────────────────────
        let train = drain_loader("train",      &dm.train_dataloader::<LoaderBackend>()?);
        let val   = drain_loader("validation", &dm.val_dataloader::<LoaderBackend>()?);

        Ok(FitReport { train, val })
    }
}
