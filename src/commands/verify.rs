//! `checkable verify` command.

use std::path::Path;

/// Execute the `verify` command.
///
/// Runs every checker on a single-threaded runtime and prints the aggregate.
///
/// # Errors
///
/// Returns an error string if the definition cannot be loaded, the checkable
/// is manual, or any checker does not pass.
pub fn run(path: &Path, id: Option<u64>) -> Result<(), String> {
    let checkable = super::load_checkable(path, id)?;
    let verification =
        checkable.run_checkers().map_err(|e| format!("{}: {e}", path.display()))?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("Failed to start runtime: {e}"))?;
    let passed = runtime.block_on(verification);

    if passed {
        println!("Result: PASSED");
        Ok(())
    } else {
        println!("Result: FAILED");
        Err(format!("{}: checks did not pass", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn verify_passes_when_file_exists() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("installed");
        std::fs::write(&marker, "").unwrap();
        let def = dir.path().join("task.json");
        std::fs::write(
            &def,
            serde_json::json!({
                "type": "Checkable",
                "steps": ["Install it"],
                "checkers": [{"type": "file_exists", "path": marker}],
            })
            .to_string(),
        )
        .unwrap();

        assert!(run(&def, None).is_ok());
    }

    #[test]
    fn verify_fails_on_manual_checkable() {
        let dir = tempfile::tempdir().unwrap();
        let def = dir.path().join("task.json");
        std::fs::write(&def, r#"{"type": "Checkable", "steps": ["Reboot"]}"#).unwrap();

        let err = run(&def, None).unwrap_err();
        assert!(err.contains("manual checkable"), "unexpected error: {err}");
    }

    #[test]
    fn verify_fails_when_a_checker_fails() {
        let dir = tempfile::tempdir().unwrap();
        let def = dir.path().join("task.json");
        std::fs::write(
            &def,
            serde_json::json!({
                "type": "Checkable",
                "steps": [],
                "checkers": [{"type": "file_exists", "path": dir.path().join("absent")}],
            })
            .to_string(),
        )
        .unwrap();

        assert!(run(&def, None).unwrap_err().contains("did not pass"));
    }
}
