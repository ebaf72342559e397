//! Command dispatch and handlers.

pub mod show;
pub mod verify;

use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::checkable::Checkable;
use crate::cli::Command;

/// Dispatch a parsed command to its handler.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    match command {
        Command::Show { path, id, json } => show::run(path, *id, *json),
        Command::Verify { path, id } => verify::run(path, *id),
    }
}

/// Loads a checkable definition from disk.
///
/// Files ending in `.yaml` or `.yml` are read as YAML; anything else as JSON.
///
/// # Errors
///
/// Returns an error string if the file cannot be read, parsed, or is not a
/// valid checkable.
pub fn load_checkable(path: &Path, id: Option<u64>) -> Result<Checkable, String> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;

    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));
    debug!(path = %path.display(), is_yaml, "loading checkable");

    let value: Value = if is_yaml {
        serde_yaml::from_str(&contents)
            .map_err(|e| format!("Failed to parse {}: {e}", path.display()))?
    } else {
        serde_json::from_str(&contents)
            .map_err(|e| format!("Failed to parse {}: {e}", path.display()))?
    };

    Checkable::from_json(&value, id)
        .map_err(|e| format!("Invalid checkable {}: {e}", path.display()))
}
