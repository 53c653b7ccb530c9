//! JSON result report writer.
//!
//! Writes ResultReport structs to JSON files with proper formatting.

use crate::flames::FlamesResult;
use crate::policy::REFUSAL_MESSAGE;
use crate::utils::config::SCHEMA_VERSION;
use crate::utils::error::OutputError;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Top-level report structure written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Timestamp when the report was generated (RFC 3339)
    pub generated_at: String,

    /// Whether the result was withheld from display
    pub restricted: bool,

    /// The calculation itself
    pub result: FlamesResult,
}

impl ResultReport {
    /// Wrap a result, stamping the current schema version and time
    pub fn new(result: FlamesResult, restricted: bool) -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            restricted,
            result,
        }
    }
}

/// Write a report to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Arguments
/// * `report` - Report to write
/// * `output_path` - Path to output JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_result(report: &ResultReport, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing result to: {}", output_path.display());

    validate_output_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, report).map_err(OutputError::SerializationFailed)?;

    Ok(())
}

/// Serialize a report to a pretty JSON string
pub fn result_to_string(report: &ResultReport) -> Result<String, OutputError> {
    serde_json::to_string_pretty(report).map_err(OutputError::SerializationFailed)
}

/// What gets shown in place of a withheld result
///
/// Carries no names, count, rounds or final letter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefusalReport {
    pub version: String,
    pub restricted: bool,
    pub message: String,
}

impl Default for RefusalReport {
    fn default() -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            restricted: true,
            message: REFUSAL_MESSAGE.to_string(),
        }
    }
}

/// Serialize the refusal to a pretty JSON string
pub fn refusal_to_string() -> Result<String, OutputError> {
    serde_json::to_string_pretty(&RefusalReport::default())
        .map_err(OutputError::SerializationFailed)
}

/// Validate that output path is writable
///
/// **Private** - internal validation
fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    // Check if we're trying to overwrite a directory
    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Read a report from a JSON file
///
/// **Public** - used by the validate command and tests
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_result(input_path: impl AsRef<Path>) -> Result<ResultReport, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading result from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;
    let report: ResultReport =
        serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    debug!(
        "Result loaded: version {}, {} & {}",
        report.version, report.result.name1, report.result.name2
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flames::calculate_flames;
    use pretty_assertions::assert_eq;
    use tempfile::NamedTempFile;

    #[test]
    fn test_write_and_read_result() {
        let report = ResultReport::new(calculate_flames("Romeo", "Juliet"), false);
        let temp_file = NamedTempFile::new().unwrap();

        write_result(&report, temp_file.path()).unwrap();
        let loaded = read_result(temp_file.path()).unwrap();

        assert_eq!(loaded, report);
    }

    #[test]
    fn test_report_json_shape() {
        let report = ResultReport::new(calculate_flames("AA", "AA"), true);
        let value: serde_json::Value =
            serde_json::from_str(&result_to_string(&report).unwrap()).unwrap();

        assert_eq!(value["version"], SCHEMA_VERSION);
        assert_eq!(value["restricted"], true);
        assert_eq!(value["result"]["letter_count"], 0);
        assert_eq!(value["result"]["result"], "F");
        assert_eq!(value["result"]["elimination_rounds"][0]["eliminated"], "S");
    }

    #[test]
    fn test_refusal_json_has_no_result() {
        let json = refusal_to_string().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["restricted"], true);
        assert_eq!(value["message"], REFUSAL_MESSAGE);
        assert!(value.get("result").is_none());
        assert!(!json.contains("elimination_rounds"));
    }

    #[test]
    fn test_validate_output_path_empty() {
        assert!(validate_output_path(Path::new("")).is_err());
    }

    #[test]
    fn test_validate_output_path_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(validate_output_path(temp_dir.path()).is_err());
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested_path = temp_dir.path().join("nested/dirs/result.json");

        let report = ResultReport::new(calculate_flames("a", "b"), false);
        write_result(&report, &nested_path).unwrap();

        assert!(nested_path.exists());
    }

    #[test]
    fn test_read_missing_file() {
        assert!(matches!(
            read_result("/no/such/result.json"),
            Err(OutputError::WriteFailed(_))
        ));
    }
}
