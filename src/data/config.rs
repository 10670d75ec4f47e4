// ============================================================
// Layer 4 — Data Module Configuration
// ============================================================
// Every setting the data module needs, in one serialisable
// struct. It can be:
//   - built from defaults   (DataModuleConfig::default)
//   - built from the env    (DataModuleConfig::from_env, seed
//                            taken from PL_GLOBAL_SEED)
//   - read from JSON        (a missing "seed" key also falls
//                            back to PL_GLOBAL_SEED)
//
// Once handed to EventDataModule::new the config is not mutated.

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::{Path, PathBuf}};

use crate::data::transform::TransformPipeline;
use crate::infra::seed::{seed_from_env, DEFAULT_SEED};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataModuleConfig {
    /// Directory holding train_data.csv and test_data.csv
    pub data_dir: PathBuf,

    /// Records per batch
    pub batch_size: usize,

    /// Loader worker threads; 0 loads on the calling thread
    pub num_workers: usize,

    /// Passed through to the loader settings
    pub pin_memory: bool,

    /// Fraction of the training file kept for training, in [0, 1]
    pub train_val_split: f64,

    /// Seed for the partition shuffle
    #[serde(default = "seed_from_env")]
    pub seed: u64,

    /// Transform names, applied in order
    pub transforms: Vec<String>,
}

impl Default for DataModuleConfig {
    fn default() -> Self {
        Self {
            data_dir:        PathBuf::from("data"),
            batch_size:      32,
            num_workers:     0,
            pin_memory:      false,
            train_val_split: 0.8,
            seed:            DEFAULT_SEED,
            transforms:      Vec::new(),
        }
    }
}

impl DataModuleConfig {
    /// Defaults, with the seed resolved from PL_GLOBAL_SEED.
    pub fn from_env() -> Self {
        Self {
            seed: seed_from_env(),
            ..Self::default()
        }
    }

    /// Read a JSON config file. Keys left out take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Cannot read config from '{}'", path.display()))?;

        serde_json::from_str(&json)
            .with_context(|| format!("Invalid config in '{}'", path.display()))
    }

    /// Reject settings the loaders cannot work with.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.batch_size > 0, "batch_size must be greater than 0");
        ensure!(
            self.train_val_split.is_finite() && (0.0..=1.0).contains(&self.train_val_split),
            "train_val_split must be between 0 and 1, got {}",
            self.train_val_split
        );
        TransformPipeline::from_names(self.transforms.as_slice())?;
        Ok(())
    }
}
