// ============================================================
// Layer 2 — TestUseCase
// ============================================================
// Runs the test stage: setup(Test), then one pass over the
// test loader.

use anyhow::Result;

use crate::application::{drain_loader, LoaderBackend, PartitionSummary};
use crate::data::{config::DataModuleConfig, datamodule::EventDataModule};
use crate::domain::stage::Stage;

pub struct TestUseCase {
    config: DataModuleConfig,
}

impl TestUseCase {
    pub fn new(config: DataModuleConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<PartitionSummary> {
        let mut dm = EventDataModule::new(self.config.clone())?;
        tracing::info!("{}", dm);
        dm.setup(Stage::Test)?;

        Ok(drain_loader("test", &dm.test_dataloader::<LoaderBackend>()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_counts_test_rows() {
        let dir  = tempdir().unwrap();
        let rows: String = (0..5).map(|i| format!("event_{i}\tlabel\n")).collect();
        fs::write(dir.path().join("test_data.csv"), rows).unwrap();

        let cfg = DataModuleConfig {
            data_dir:   dir.path().to_path_buf(),
            batch_size: 2,
            ..Default::default()
        };
        let summary = TestUseCase::new(cfg).execute().unwrap();
        assert_eq!(summary, PartitionSummary { name: "test", records: 5, batches: 3 });
    }
}
