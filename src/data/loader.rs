// ============================================================
// Layer 4 — TSV Loader
// ============================================================
// Reads the event files from the data directory using the csv
// crate configured for tab-separated input:
//
//   data_dir/
//     train_data.csv   ← read for fit / validate / predict
//     test_data.csv    ← read for test
//
// Despite the extension both files are tab-separated with no
// header row and exactly two columns:
//
//   event_name<TAB>label
//
// Every value is kept as a string. A row with any other number
// of columns is an error; nothing is skipped or repaired.

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

use crate::domain::event_record::EventRecord;
use crate::domain::stage::Stage;
use crate::domain::traits::RecordSource;

/// Loads the stage files from a directory.
/// Implements the RecordSource trait from Layer 3.
#[derive(Debug, Clone)]
pub struct TsvLoader {
    /// Directory holding train_data.csv and test_data.csv
    dir: PathBuf,
}

impl TsvLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Full path of the file a stage reads
    pub fn path_for(&self, stage: Stage) -> PathBuf {
        self.dir.join(stage.data_file())
    }
}

impl RecordSource for TsvLoader {
    fn load(&self, stage: Stage) -> Result<Vec<EventRecord>> {
        let path    = self.path_for(stage);
        let records = read_tsv(&path)?;

        tracing::info!(
            "Read {} rows from '{}' (stage={})",
            records.len(),
            path.display(),
            stage
        );
        Ok(records)
    }
}

/// Parse one headerless, tab-separated, two-column file.
pub fn read_tsv(path: &Path) -> Result<Vec<EventRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("Cannot open '{}'", path.display()))?;

    let mut records = Vec::new();

    for (row, result) in reader.records().enumerate() {
        let fields = result
            .with_context(|| format!("Malformed row {} in '{}'", row + 1, path.display()))?;

        if fields.len() != 2 {
            bail!(
                "Row {} in '{}' has {} columns, expected 2",
                row + 1,
                path.display(),
                fields.len()
            );
        }

        records.push(EventRecord::new(&fields[0], &fields[1]));
    }

    Ok(records)
}
