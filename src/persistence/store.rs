//! Calculation stores and the fire-and-forget save helper.

use super::types::CalculationRecord;
use crate::flames::FlamesResult;
use crate::utils::error::PersistenceError;
use log::{debug, warn};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Somewhere calculations can be appended to
pub trait CalculationStore {
    fn store(&self, record: &CalculationRecord) -> Result<(), PersistenceError>;
}

/// Append-only local log, one JSON object per line
pub struct JsonLinesStore {
    path: PathBuf,
}

impl JsonLinesStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CalculationStore for JsonLinesStore {
    fn store(&self, record: &CalculationRecord) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                debug!("Creating parent directories: {}", parent.display());
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut line = serde_json::to_string(record)?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;

        debug!("Appended calculation to {}", self.path.display());
        Ok(())
    }
}

/// Save a result, logging and swallowing any failure
///
/// **Public** - persistence must never stop a result from being shown
///
/// # Returns
/// `true` if the store accepted the record
pub fn persist_quietly(store: &dyn CalculationStore, result: &FlamesResult) -> bool {
    let record = CalculationRecord::from(result);

    match store.store(&record) {
        Ok(()) => true,
        Err(e) => {
            warn!("Failed to save calculation: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flames::calculate_flames;

    struct FailingStore;

    impl CalculationStore for FailingStore {
        fn store(&self, _record: &CalculationRecord) -> Result<(), PersistenceError> {
            Err(PersistenceError::Rejected {
                status: 503,
                body: "unavailable".to_string(),
            })
        }
    }

    #[test]
    fn test_persist_quietly_swallows_errors() {
        let result = calculate_flames("a", "b");
        assert!(!persist_quietly(&FailingStore, &result));
    }

    #[test]
    fn test_json_lines_store_appends() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("logs/calculations.jsonl");
        let store = JsonLinesStore::new(&path);

        assert!(persist_quietly(&store, &calculate_flames("Romeo", "Juliet")));
        assert!(persist_quietly(&store, &calculate_flames("AA", "AA")));

        let contents = std::fs::read_to_string(&path).unwrap();
        let records: Vec<CalculationRecord> = contents
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name1, "romeo");
        assert_eq!(records[0].letter_count, 9);
        assert_eq!(records[1].letter_count, 0);
    }

    #[test]
    fn test_json_lines_store_into_directory_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = JsonLinesStore::new(temp_dir.path());
        let record = CalculationRecord::from(&calculate_flames("x", "y"));
        assert!(store.store(&record).is_err());
    }
}
