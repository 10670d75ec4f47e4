// ============================================================
// Layer 4 — Event Data Module
// ============================================================
// Ties the data pipeline together behind the hooks a training
// loop calls:
//
//   prepare_data(stage)   → raw rows for a stage, straight from disk
//   setup(Fit)            → shuffle + split into train / validation
//   setup(Test)           → shuffle into the test partition
//   *_dataloader()        → EventLoader over one partition
//
// Partition lifecycle:
//   all three start unset → setup fills them → they live as long
//   as the data module. A second setup(Fit) rebuilds train and
//   validation from scratch; setup(Validate | Predict) touches
//   nothing.

use anyhow::Result;
use burn::prelude::Backend;
use std::fmt;

use crate::data::config::DataModuleConfig;
use crate::data::dataloader::{EventLoader, LoaderSettings};
use crate::data::dataset::EventDataset;
use crate::data::loader::TsvLoader;
use crate::data::splitter::{seeded_shuffle, split_train_val};
use crate::data::transform::TransformPipeline;
use crate::domain::event_record::EventRecord;
use crate::domain::stage::Stage;
use crate::domain::traits::RecordSource;

/// Which partition a loader was asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Partition {
    Train,
    Validation,
    Test,
}

impl Partition {
    /// Stage whose setup builds this partition
    pub fn stage(self) -> Stage {
        match self {
            Partition::Train | Partition::Validation => Stage::Fit,
            Partition::Test                          => Stage::Test,
        }
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Partition::Train      => "train",
            Partition::Validation => "validation",
            Partition::Test       => "test",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PartitionError {
    #[error("{partition} partition is not set up; call setup({stage}) first", stage = .partition.stage())]
    NotReady { partition: Partition },
}

// ─── EventDataModule ──────────────────────────────────────────────────────────
pub struct EventDataModule {
    config:     DataModuleConfig,
    transforms: TransformPipeline,
    source:     Box<dyn RecordSource>,
    train:      Option<EventDataset>,
    val:        Option<EventDataset>,
    test:       Option<EventDataset>,
}

impl EventDataModule {
    /// Build a data module reading from `config.data_dir`.
    pub fn new(config: DataModuleConfig) -> Result<Self> {
        let source = TsvLoader::new(config.data_dir.clone());
        Self::with_source(config, source)
    }

    /// Build a data module over any record source.
    pub fn with_source(config: DataModuleConfig, source: impl RecordSource + 'static) -> Result<Self> {
        config.validate()?;
        let transforms = TransformPipeline::from_names(config.transforms.as_slice())?;

        tracing::debug!(
            "Data module ready: seed={}, split={}, transforms={:?}",
            config.seed,
            config.train_val_split,
            transforms.names()
        );

        Ok(Self {
            config,
            transforms,
            source: Box::new(source),
            train:  None,
            val:    None,
            test:   None,
        })
    }

    pub fn config(&self) -> &DataModuleConfig {
        &self.config
    }

    /// Raw rows for `stage`: test_data.csv for Test, train_data.csv otherwise.
    pub fn prepare_data(&self, stage: Stage) -> Result<Vec<EventRecord>> {
        self.source.load(stage)
    }

    /// Build the partitions `stage` needs.
    pub fn setup(&mut self, stage: Stage) -> Result<()> {
        match stage {
            Stage::Fit => {
                let rows       = self.prepare_data(Stage::Fit)?;
                let (tr, val)  = split_train_val(rows, self.config.train_val_split, self.config.seed);

                tracing::info!("Fit setup: {} train, {} validation", tr.len(), val.len());

                self.train = Some(EventDataset::new(tr,  &self.transforms));
                self.val   = Some(EventDataset::new(val, &self.transforms));
            }
            Stage::Test => {
                let mut rows = self.prepare_data(Stage::Test)?;
                seeded_shuffle(&mut rows, self.config.seed);

                tracing::info!("Test setup: {} test", rows.len());

                self.test = Some(EventDataset::new(rows, &self.transforms));
            }
            Stage::Validate | Stage::Predict => {
                tracing::debug!("setup({}) builds no partitions", stage);
            }
        }
        Ok(())
    }

    pub fn train_dataset(&self) -> Option<&EventDataset> {
        self.train.as_ref()
    }

    pub fn val_dataset(&self) -> Option<&EventDataset> {
        self.val.as_ref()
    }

    pub fn test_dataset(&self) -> Option<&EventDataset> {
        self.test.as_ref()
    }

    pub fn loader_settings(&self) -> LoaderSettings {
        LoaderSettings::from(&self.config)
    }

    pub fn train_dataloader<B: Backend>(&self) -> Result<EventLoader<B>, PartitionError> {
        self.dataloader(Partition::Train)
    }

    pub fn val_dataloader<B: Backend>(&self) -> Result<EventLoader<B>, PartitionError> {
        self.dataloader(Partition::Validation)
    }

    pub fn test_dataloader<B: Backend>(&self) -> Result<EventLoader<B>, PartitionError> {
        self.dataloader(Partition::Test)
    }

    fn dataloader<B: Backend>(&self, partition: Partition) -> Result<EventLoader<B>, PartitionError> {
        let dataset = match partition {
            Partition::Train      => self.train.as_ref(),
            Partition::Validation => self.val.as_ref(),
            Partition::Test       => self.test.as_ref(),
        }
        .ok_or(PartitionError::NotReady { partition })?;

        Ok(EventLoader::new(dataset.clone(), self.loader_settings()))
    }
}

impl fmt::Display for EventDataModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EventDataModule(batch_size={}, pin_memory={}, num_workers={})",
            self.config.batch_size, self.config.pin_memory, self.config.num_workers
        )
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::seed::resolve_seed;
    use burn::backend::NdArray;
    use std::fs;
    use tempfile::{tempdir, TempDir};

    /// In-memory source: `n` training rows, `m` test rows
    struct FixedSource {
        train: Vec<EventRecord>,
        test:  Vec<EventRecord>,
    }

    impl FixedSource {
        fn new(n: usize, m: usize) -> Self {
            let rows = |prefix: &str, k: usize| -> Vec<EventRecord> {
                (0..k)
                    .map(|i| EventRecord::new(format!("{prefix}_{i}"), format!("label_{}", i % 2)))
                    .collect()
            };
            Self { train: rows("train", n), test: rows("test", m) }
        }
    }

    impl RecordSource for FixedSource {
        fn load(&self, stage: Stage) -> Result<Vec<EventRecord>> {
            Ok(match stage {
                Stage::Test => self.test.clone(),
                _           => self.train.clone(),
            })
        }
    }

    fn config(seed: u64) -> DataModuleConfig {
        DataModuleConfig { batch_size: 4, seed, ..Default::default() }
    }

    fn names(ds: Option<&EventDataset>) -> Vec<String> {
        ds.unwrap().records().iter().map(|r| r.event_name.clone()).collect()
    }

    fn write_data_dir(train_rows: usize, test_rows: usize) -> TempDir {
        let dir  = tempdir().unwrap();
        let body = |prefix: &str, k: usize| -> String {
            (0..k).map(|i| format!("{prefix}_{i}\tlabel_{}\n", i % 3)).collect()
        };
        fs::write(dir.path().join("train_data.csv"), body("train", train_rows)).unwrap();
        fs::write(dir.path().join("test_data.csv"),  body("test",  test_rows)).unwrap();
        dir
    }

    #[test]
    fn test_ten_rows_split_eight_two() {
        let mut dm = EventDataModule::with_source(config(42), FixedSource::new(10, 0)).unwrap();
        dm.setup(Stage::Fit).unwrap();

        assert_eq!(dm.train_dataset().unwrap().records().len(), 8);
        assert_eq!(dm.val_dataset().unwrap().records().len(),   2);
    }

    #[test]
    fn test_partitions_are_disjoint_and_complete() {
        let mut dm = EventDataModule::with_source(config(42), FixedSource::new(37, 0)).unwrap();
        dm.setup(Stage::Fit).unwrap();

        let train = names(dm.train_dataset());
        let val   = names(dm.val_dataset());
        assert_eq!(train.len(), (37.0_f64 * 0.8).floor() as usize);
        assert_eq!(train.len() + val.len(), 37);

        let mut all: Vec<String> = train.into_iter().chain(val).collect();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), 37);
    }

    #[test]
    fn test_repeated_setup_is_deterministic() {
        let mut dm = EventDataModule::with_source(config(42), FixedSource::new(50, 0)).unwrap();
        dm.setup(Stage::Fit).unwrap();
        let first = (names(dm.train_dataset()), names(dm.val_dataset()));

        dm.setup(Stage::Fit).unwrap();
        let second = (names(dm.train_dataset()), names(dm.val_dataset()));
        assert_eq!(first, second);

        let mut other = EventDataModule::with_source(config(42), FixedSource::new(50, 0)).unwrap();
        other.setup(Stage::Fit).unwrap();
        assert_eq!(first, (names(other.train_dataset()), names(other.val_dataset())));
    }

    #[test]
    fn test_invalid_seed_matches_unset_seed() {
        let mut invalid = EventDataModule::with_source(config(resolve_seed(Some("abc"))), FixedSource::new(30, 0)).unwrap();
        let mut unset   = EventDataModule::with_source(config(resolve_seed(None)),        FixedSource::new(30, 0)).unwrap();
        invalid.setup(Stage::Fit).unwrap();
        unset.setup(Stage::Fit).unwrap();

        assert_eq!(names(invalid.train_dataset()), names(unset.train_dataset()));
        assert_eq!(names(invalid.val_dataset()),   names(unset.val_dataset()));
    }

    #[test]
    fn test_fit_setup_leaves_test_unset() {
        let mut dm = EventDataModule::with_source(config(42), FixedSource::new(10, 5)).unwrap();
        dm.setup(Stage::Fit).unwrap();

        assert!(dm.test_dataset().is_none());
        assert!(dm.train_dataloader::<NdArray>().is_ok());
        assert_eq!(
            dm.test_dataloader::<NdArray>().err(),
            Some(PartitionError::NotReady { partition: Partition::Test })
        );
    }

    #[test]
    fn test_loaders_before_setup_are_errors() {
        let dm = EventDataModule::with_source(config(42), FixedSource::new(10, 5)).unwrap();
        assert!(dm.train_dataloader::<NdArray>().is_err());
        assert!(dm.val_dataloader::<NdArray>().is_err());

        let err = dm.test_dataloader::<NdArray>().err().unwrap();
        assert_eq!(err.to_string(), "test partition is not set up; call setup(test) first");
    }

    #[test]
    fn test_other_stages_build_nothing() {
        let mut dm = EventDataModule::with_source(config(42), FixedSource::new(10, 5)).unwrap();
        dm.setup(Stage::Validate).unwrap();
        dm.setup(Stage::Predict).unwrap();

        assert!(dm.train_dataset().is_none());
        assert!(dm.val_dataset().is_none());
        assert!(dm.test_dataset().is_none());
    }

    #[test]
    fn test_test_setup_shuffles_every_row() {
        let mut dm = EventDataModule::with_source(config(42), FixedSource::new(0, 20)).unwrap();
        dm.setup(Stage::Test).unwrap();

        let shuffled = names(dm.test_dataset());
        let mut sorted = shuffled.clone();
        sorted.sort();
        let mut expected: Vec<String> = (0..20).map(|i| format!("test_{i}")).collect();
        expected.sort();
        assert_eq!(sorted, expected);

        let original: Vec<String> = (0..20).map(|i| format!("test_{i}")).collect();
        assert_ne!(shuffled, original);
    }

    #[test]
    fn test_loaders_carry_settings() {
        let cfg = DataModuleConfig {
            batch_size:  3,
            num_workers: 2,
            pin_memory:  true,
            ..config(42)
        };
        let mut dm = EventDataModule::with_source(cfg, FixedSource::new(10, 0)).unwrap();
        dm.setup(Stage::Fit).unwrap();

        let loader = dm.train_dataloader::<NdArray>().unwrap();
        assert_eq!(loader.settings(), LoaderSettings {
            batch_size:         3,
            num_workers:        2,
            pin_memory:         true,
            persistent_workers: true,
        });
        assert_eq!(loader.num_items(),   8);
        assert_eq!(loader.num_batches(), 3);
    }

    #[test]
    fn test_transforms_reach_batches() {
        let cfg = DataModuleConfig {
            transforms: vec!["lowercase".to_string()],
            ..config(42)
        };
        let source = FixedSource {
            train: vec![EventRecord::new("LOGIN", "A"), EventRecord::new("LOGOUT", "B")],
            test:  Vec::new(),
        };
        let mut dm = EventDataModule::with_source(cfg, source).unwrap();
        dm.setup(Stage::Fit).unwrap();

        let loader = dm.train_dataloader::<NdArray>().unwrap();
        let batch  = loader.iter().next().unwrap();
        assert!(batch.event_names.iter().all(|n| n == &n.to_lowercase()));
        assert_eq!(batch.len(), 1);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let cfg = DataModuleConfig { batch_size: 0, ..config(42) };
        assert!(EventDataModule::with_source(cfg, FixedSource::new(1, 1)).is_err());
    }

    #[test]
    fn test_reads_files_from_data_dir() {
        let dir = write_data_dir(10, 4);
        let cfg = DataModuleConfig { data_dir: dir.path().to_path_buf(), ..config(42) };
        let mut dm = EventDataModule::new(cfg).unwrap();

        assert_eq!(dm.prepare_data(Stage::Fit).unwrap().len(),  10);
        assert_eq!(dm.prepare_data(Stage::Test).unwrap().len(), 4);

        dm.setup(Stage::Fit).unwrap();
        dm.setup(Stage::Test).unwrap();

        let val: usize = dm.val_dataloader::<NdArray>().unwrap().iter().map(|b| b.len()).sum();
        assert_eq!(val, 2);
        let test: usize = dm.test_dataloader::<NdArray>().unwrap().iter().map(|b| b.len()).sum();
        assert_eq!(test, 4);
    }

    #[test]
    fn test_missing_test_file_propagates() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("train_data.csv"), "a\tx\n").unwrap();
        let cfg = DataModuleConfig { data_dir: dir.path().to_path_buf(), ..config(42) };
        let mut dm = EventDataModule::new(cfg).unwrap();

        assert!(dm.setup(Stage::Fit).is_ok());
        assert!(dm.setup(Stage::Test).is_err());
        assert!(dm.test_dataset().is_none());
    }

    #[test]
    fn test_display() {
        let dm = EventDataModule::with_source(config(42), FixedSource::new(0, 0)).unwrap();
        assert_eq!(dm.to_string(), "EventDataModule(batch_size=4, pin_memory=false, num_workers=0)");
    }
}
