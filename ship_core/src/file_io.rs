//! # Scenario Files
//!
//! Read and write a single [`ScenarioInput`] as pretty JSON. Saves are
//! atomic: the JSON goes to a `.tmp` sibling, is synced, read back and
//! parsed, and only then renamed over the destination. A failed save
//! removes the `.tmp` file. Saved history is never written here.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ship_core::calculations::ScenarioInput;
//! use ship_core::file_io::{load_scenario, save_scenario};
//! use std::path::Path;
//!
//! let path = Path::new("lanterns.json");
//! save_scenario(&ScenarioInput::default().with_quantity(60), path)?;
//!
//! let input = load_scenario(path)?;
//! assert_eq!(input.quantity, 60);
//! # Ok::<(), ship_core::errors::CalcError>(())
//! ```

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::calculations::ScenarioInput;
use crate::errors::{CalcError, CalcResult};

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write `json` to the temp file, sync it, then read it back and parse it.
fn write_and_verify(tmp_path: &Path, json: &str) -> CalcResult<()> {
    let mut tmp_file = File::create(tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    let written = fs::read_to_string(tmp_path).map_err(|e| {
        CalcError::file_error("verify temp file", tmp_path.display().to_string(), e.to_string())
    })?;
    let _: ScenarioInput = serde_json::from_str(&written)?;
    Ok(())
}

/// Save a scenario with atomic write semantics.
///
/// The input is validated first, so a saved file always loads.
pub fn save_scenario(input: &ScenarioInput, path: &Path) -> CalcResult<()> {
    input.validate()?;
    let json = serde_json::to_string_pretty(input)?;

    let tmp_path = tmp_path_for(path);

    if let Err(e) = write_and_verify(&tmp_path, &json) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    tracing::debug!(path = %path.display(), "saved scenario");
    Ok(())
}

/// Load and validate a scenario file.
///
/// # Returns
///
/// * `Ok(ScenarioInput)` - A scenario that passes validation
/// * `Err(CalcError::FileError)` - I/O error
/// * `Err(CalcError::SerializationError)` - Invalid JSON or missing keys
/// * `Err(CalcError::InvalidInput)` - Parsed, but a value is out of range
pub fn load_scenario(path: &Path) -> CalcResult<ScenarioInput> {
    let json = fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;

    let input: ScenarioInput = serde_json::from_str(&json)?;
    input.validate()?;
    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scenario.json");
        let input = ScenarioInput::default().with_dimensions(12.0, 12.0, 18.5).with_quantity(40);

        save_scenario(&input, &path).unwrap();
        let loaded = load_scenario(&path).unwrap();
        assert_eq!(loaded, input);
    }

    #[test]
    fn test_atomic_save_leaves_no_tmp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scenario.json");
        save_scenario(&ScenarioInput::default(), &path).unwrap();

        assert!(path.exists());
        assert!(!dir.path().join("scenario.json.tmp").exists());
    }

    #[test]
    fn test_failed_write_removes_tmp_file() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the temp file should go makes File::create fail
        fs::create_dir(dir.path().join("scenario.json.tmp")).unwrap();
        let path = dir.path().join("scenario.json");

        let err = save_scenario(&ScenarioInput::default(), &path).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
        assert!(!path.exists());
    }

    #[test]
    fn test_failed_rename_removes_tmp_file() {
        let dir = tempfile::tempdir().unwrap();
        // Renaming a file over a non-empty directory fails on every platform
        let path = dir.path().join("scenario.json");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "x").unwrap();

        let err = save_scenario(&ScenarioInput::default(), &path).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
        assert!(!dir.path().join("scenario.json.tmp").exists());
    }

    #[test]
    fn test_saved_file_verifies_as_scenario() {
        let dir = tempfile::tempdir().unwrap();
        let tmp = dir.path().join("check.tmp");
        let json = serde_json::to_string(&ScenarioInput::default()).unwrap();
        write_and_verify(&tmp, &json).unwrap();

        let err = write_and_verify(&tmp, r#"{ "quantity": 3 }"#).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_invalid_input_not_saved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scenario.json");
        let input = ScenarioInput::default().with_container_cbm(0.0);

        assert!(matches!(save_scenario(&input, &path), Err(CalcError::InvalidInput { .. })));
        assert!(!path.exists());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_scenario(&dir.path().join("nope.json")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_load_rejects_out_of_range_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scenario.json");
        let mut value = serde_json::to_value(ScenarioInput::default()).unwrap();
        value["freight_coverage_cbm"] = serde_json::json!(0.0);
        fs::write(&path, value.to_string()).unwrap();

        let err = load_scenario(&path).unwrap_err();
        assert!(err.to_string().contains("freight_coverage_cbm"));
    }

    #[test]
    fn test_load_rejects_missing_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scenario.json");
        fs::write(&path, r#"{ "quantity": 3 }"#).unwrap();

        let err = load_scenario(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }
}
