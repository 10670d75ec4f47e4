// ============================================================
// Layer 3 — Stage
// ============================================================
// The lifecycle stage a training loop passes to the data module.
//
//   Fit      → builds train + validation partitions
//   Test     → builds the test partition
//   Validate → accepted, builds nothing
//   Predict  → accepted, builds nothing
//
// Each stage also decides which file under the data directory
// it reads: only Test reads test_data.csv.

use std::{fmt, str::FromStr};

/// File read for every stage except Test
pub const TRAIN_FILE: &str = "train_data.csv";

/// File read for the Test stage
pub const TEST_FILE: &str = "test_data.csv";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Fit,
    Validate,
    Test,
    Predict,
}

impl Stage {
    /// Name of the data file this stage reads, relative to the data directory.
    pub fn data_file(self) -> &'static str {
        match self {
            Stage::Test => TEST_FILE,
            _           => TRAIN_FILE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Fit      => "fit",
            Stage::Validate => "validate",
            Stage::Test     => "test",
            Stage::Predict  => "predict",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a stage string is not one of the four known stages
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown stage '{0}' (expected fit, validate, test or predict)")]
pub struct UnknownStage(pub String);

impl FromStr for Stage {
    type Err = UnknownStage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fit"      => Ok(Stage::Fit),
            "validate" => Ok(Stage::Validate),
            "test"     => Ok(Stage::Test),
            "predict"  => Ok(Stage::Predict),
            _          => Err(UnknownStage(s.to_string())),
        }
    }
}
