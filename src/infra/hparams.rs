// ============================================================
// Layer 6 — Hyperparameter Snapshot
// ============================================================
// Writes the resolved DataModuleConfig next to a run's other
// artifacts so the exact partitioning can be reproduced later.
//
//   <dir>/hparams.json  ← pretty-printed DataModuleConfig

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::data::config::DataModuleConfig;

const HPARAMS_FILE: &str = "hparams.json";

/// Saves and loads the data module config as JSON.
pub struct HparamsStore {
    dir: PathBuf,
}

impl HparamsStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(HPARAMS_FILE)
    }

    /// Write the config, creating the directory (like `mkdir -p`) if needed.
    pub fn save(&self, cfg: &DataModuleConfig) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Cannot create '{}'", self.dir.display()))?;

        let path = self.path();
        let json = serde_json::to_string_pretty(cfg)?;

        fs::write(&path, json)
            .with_context(|| format!("Cannot write hparams to '{}'", path.display()))?;

        tracing::debug!("Saved hparams to '{}'", path.display());
        Ok(())
    }

    /// Read a previously saved config back.
    pub fn load(&self) -> Result<DataModuleConfig> {
        DataModuleConfig::from_json_file(&self.path())
    }
}
