//! Discriminator dispatch from checker descriptions to concrete checkers.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{Checker, EnvVar, FileContains, FileExists};
use crate::checkable::CheckableError;

/// Every discriminator the factory recognizes.
pub const KNOWN_KINDS: &[&str] = &[FileExists::KIND, FileContains::KIND, EnvVar::KIND];

/// Builds the checker described by `desc`, found at `index` of a `checkers` array.
///
/// # Errors
///
/// Returns [`CheckableError::MissingCheckerKind`] if `desc` has no string `type`,
/// [`CheckableError::UnknownCheckerKind`] if the `type` is not registered, and
/// [`CheckableError::InvalidChecker`] if the remaining fields do not fit that kind.
pub fn checker_from_json(desc: &Value, index: usize) -> Result<Box<dyn Checker>, CheckableError> {
    let kind = desc
        .get("type")
        .and_then(Value::as_str)
        .ok_or(CheckableError::MissingCheckerKind { index })?;

    match kind {
        FileExists::KIND => build::<FileExists>(kind, desc),
        FileContains::KIND => build::<FileContains>(kind, desc),
        EnvVar::KIND => build::<EnvVar>(kind, desc),
        other => Err(CheckableError::UnknownCheckerKind { kind: other.to_string() }),
    }
}

fn build<C>(kind: &str, desc: &Value) -> Result<Box<dyn Checker>, CheckableError>
where
    C: Checker + DeserializeOwned + 'static,
{
    let checker: C = serde_json::from_value(desc.clone()).map_err(|e| {
        CheckableError::InvalidChecker { kind: kind.to_string(), reason: e.to_string() }
    })?;
    Ok(Box::new(checker))
}
