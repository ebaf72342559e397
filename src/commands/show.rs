//! `checkable show` command.

use std::path::Path;

use crate::checkable::Checkable;

/// Execute the `show` command.
///
/// Prints a summary of the checkable, or its normalized JSON definition
/// when `json` is set.
///
/// # Errors
///
/// Returns an error string if the definition cannot be loaded.
pub fn run(path: &Path, id: Option<u64>, json: bool) -> Result<(), String> {
    let checkable = super::load_checkable(path, id)?;

    if json {
        let rendered = serde_json::to_string_pretty(&checkable.as_json())
            .map_err(|e| format!("Failed to render {}: {e}", path.display()))?;
        println!("{rendered}");
    } else {
        println!("{}", summarize(&checkable));
    }
    Ok(())
}

/// Formats a human-readable summary of a checkable.
#[must_use]
pub fn summarize(checkable: &Checkable) -> String {
    let mut lines = Vec::new();
    if let Some(id) = checkable.id() {
        lines.push(format!("Checkable #{id}"));
    }

    lines.push("Steps:".to_string());
    if checkable.steps().is_empty() {
        lines.push("  (none)".to_string());
    }
    for step in checkable.steps() {
        let text = step.text().map_or_else(|| step.as_json().to_string(), str::to_string);
        lines.push(format!("  {}. {text}", step.index() + 1));
    }

    match checkable.checkers() {
        None => lines.push("Verification: manual".to_string()),
        Some(checkers) => {
            let noun = if checkers.len() == 1 { "checker" } else { "checkers" };
            lines.push(format!("Verification: automated ({} {noun})", checkers.len()));
            for checker in checkers {
                lines.push(format!("  - {}", checker.as_json()));
            }
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn summarizes_manual_checkable() {
        let checkable = Checkable::from_json(
            &json!({"type": "Checkable", "steps": ["Open settings", {"text": "Enable SSH"}]}),
            Some(5),
        )
        .unwrap();

        assert_eq!(
            summarize(&checkable),
            "Checkable #5\nSteps:\n  1. Open settings\n  2. Enable SSH\nVerification: manual"
        );
    }

    #[test]
    fn summarizes_automated_checkable() {
        let checkable = Checkable::from_json(
            &json!({
                "type": "Checkable",
                "steps": [],
                "checkers": [{"type": "env_var", "name": "EDITOR"}],
            }),
            None,
        )
        .unwrap();

        let summary = summarize(&checkable);
        assert!(summary.contains("  (none)"));
        assert!(summary.contains("Verification: automated (1 checker)"));
        assert!(summary.contains(r#"{"name":"EDITOR","type":"env_var"}"#));
    }

    #[test]
    fn pluralizes_checker_count() {
        let checkable = Checkable::from_json(
            &json!({
                "type": "Checkable",
                "steps": ["Install"],
                "checkers": [
                    {"type": "env_var", "name": "EDITOR"},
                    {"type": "file_exists", "path": "/tmp"},
                ],
            }),
            None,
        )
        .unwrap();

        assert!(summarize(&checkable).contains("Verification: automated (2 checkers)"));
    }
}
