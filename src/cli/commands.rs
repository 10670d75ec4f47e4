// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Three subcommands:
//   fit      — setup(fit), one pass over train + validation
//   test     — setup(test), one pass over test
//   inspect  — print the resolved configuration
//
// Every subcommand takes the same data module flags. Each flag
// left out keeps the value from --config (or the defaults, with
// the seed read from PL_GLOBAL_SEED).

use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::data::config::DataModuleConfig;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build train/validation partitions and iterate their loaders
    Fit(FitArgs),

    /// Build the test partition and iterate its loader
    Test(TestArgs),

    /// Print the resolved data module configuration as JSON
    Inspect(ConfigArgs),
}

#[derive(Args, Debug)]
pub struct FitArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Write the resolved configuration to <dir>/hparams.json
    #[arg(long)]
    pub hparams_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct TestArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
}

/// Data module settings shared by every subcommand
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// JSON file with a base configuration
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory containing train_data.csv and test_data.csv
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Records per batch
    #[arg(long)]
    pub batch_size: Option<usize>,

    /// Loader worker threads (0 = load on the calling thread)
    #[arg(long)]
    pub num_workers: Option<usize>,

    /// Pin-memory flag handed to the loaders
    #[arg(long)]
    pub pin_memory: Option<bool>,

    /// Fraction of train_data.csv used for training
    #[arg(long)]
    pub train_val_split: Option<f64>,

    /// Shuffle seed; overrides PL_GLOBAL_SEED
    #[arg(long)]
    pub seed: Option<u64>,

    /// Transform to apply to every record (repeatable, applied in order)
    #[arg(long = "transform")]
    pub transforms: Vec<String>,
}

impl ConfigArgs {
    /// Merge the flags over the base configuration and validate the result.
    pub fn resolve(self) -> Result<DataModuleConfig> {
        let mut cfg = match &self.config {
            Some(path) => DataModuleConfig::from_json_file(path)?,
            None       => DataModuleConfig::from_env(),
        };

        if let Some(v) = self.data_dir        { cfg.data_dir        = v; }
        if let Some(v) = self.batch_size      { cfg.batch_size      = v; }
        if let Some(v) = self.num_workers     { cfg.num_workers     = v; }
        if let Some(v) = self.pin_memory      { cfg.pin_memory      = v; }
        if let Some(v) = self.train_val_split { cfg.train_val_split = v; }
        if let Some(v) = self.seed            { cfg.seed            = v; }
        if !self.transforms.is_empty()        { cfg.transforms      = self.transforms; }

        cfg.validate()?;
        Ok(cfg)
    }
}
