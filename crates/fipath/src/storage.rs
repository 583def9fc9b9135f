//! Plan file storage
//!
//! The plan lives in a single JSON document (`user_data.json` by default)
//! with top-level `portfolio`, `events`, and `settings` keys. A missing file
//! is not an error: the example plan is used instead so a first run always
//! produces output.

use std::fs;
use std::path::Path;

use fipath_core::PlanConfig;

/// Error types for storage operations
#[derive(Debug)]
pub enum StorageError {
    Io(String),
    Parse(String),
    Serialize(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(msg) => write!(f, "IO error: {}", msg),
            StorageError::Parse(msg) => write!(f, "Parse error: {}", msg),
            StorageError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// Load a plan from a JSON document
pub fn load(path: &Path) -> Result<PlanConfig, StorageError> {
    let content = fs::read_to_string(path)
        .map_err(|e| StorageError::Io(format!("Failed to read plan file: {}", e)))?;

    serde_json::from_str(&content)
        .map_err(|e| StorageError::Parse(format!("Failed to parse plan file: {}", e)))
}

/// Load a plan, falling back to the example when the file does not exist.
/// A file that exists but does not parse is still an error; silently
/// replacing a defective plan would hide the defect.
pub fn load_or_example(path: &Path) -> Result<PlanConfig, StorageError> {
    if !path.exists() {
        tracing::warn!(
            path = %path.display(),
            "Plan file not found, using the example plan (write it with --init)"
        );
        return Ok(PlanConfig::example());
    }
    load(path)
}

/// Write the example plan to the given path
pub fn write_example(path: &Path) -> Result<(), StorageError> {
    let json = serde_json::to_string_pretty(&PlanConfig::example())
        .map_err(|e| StorageError::Serialize(format!("Failed to serialize plan: {}", e)))?;

    fs::write(path, json).map_err(|e| StorageError::Io(format!("Failed to write plan: {}", e)))
}
