//! The checkable unit of work.
//!
//! A checkable owns an ordered list of [`Step`]s and, when it can be
//! verified automatically, a list of [`Checker`]s. Without checkers it is
//! *manual*: a person has to confirm it, and [`Checkable::run_checkers`]
//! refuses to run.
//!
//! The serialized form is a JSON object:
//!
//! ```text
//! {
//!   "type": "Checkable",
//!   "steps": [ <step>, ... ],
//!   "checkers": [ { "type": <kind>, ... }, ... ]   // optional
//! }
//! ```

mod error;
mod step;

use std::future::Future;

use futures::future::join_all;
use serde_json::{json, Map, Value};
use tracing::{debug, info};

use crate::checker::{checker_from_json, Checker};

pub use error::CheckableError;
pub use step::Step;

/// Value of the `type` field every serialized checkable carries.
pub const TYPE_TAG: &str = "Checkable";

/// A unit of work verified either by a person or by its checkers.
#[derive(Debug)]
pub struct Checkable {
    steps: Vec<Step>,
    id: Option<u64>,
    checkers: Option<Vec<Box<dyn Checker>>>,
}

impl Checkable {
    /// Assembles a checkable from already-built parts.
    ///
    /// `checkers: None` makes it manual; `Some(vec![])` is automated with
    /// nothing to check.
    #[must_use]
    pub fn new(
        steps: Vec<Step>,
        checkers: Option<Vec<Box<dyn Checker>>>,
        id: Option<u64>,
    ) -> Self {
        Self { steps, id, checkers }
    }

    /// Parses a serialized checkable.
    ///
    /// `id` is assigned by the enclosing recipe and should be unique among its
    /// checkables for the lifetime of the run; it is not checked here.
    ///
    /// A falsy `checkers` value (`null`, `false`, `0`, `""`) is treated as absent.
    /// Fields other than `type`, `steps` and `checkers` are ignored.
    ///
    /// # Errors
    ///
    /// Returns, in order of precedence:
    /// - [`CheckableError::InvalidInput`] if `json` is neither an object nor an array
    /// - [`CheckableError::TypeMismatch`] if `type` is not `"Checkable"` (always for arrays)
    /// - [`CheckableError::MissingSteps`] if `steps` is missing or not an array
    /// - [`CheckableError::InvalidStep`] if a step payload is rejected
    /// - [`CheckableError::InvalidCheckers`] if `checkers` is truthy but not an array
    /// - any error from [`checker_from_json`] for the first bad checker description
    pub fn from_json(json: &Value, id: Option<u64>) -> Result<Self, CheckableError> {
        // Arrays are object-shaped; they fail on the missing type tag instead.
        let obj = match json {
            Value::Object(obj) => obj,
            Value::Array(_) => {
                return Err(CheckableError::TypeMismatch { found: "nothing".to_string() });
            }
            _ => return Err(CheckableError::InvalidInput),
        };

        match obj.get("type") {
            Some(Value::String(tag)) if tag == TYPE_TAG => {}
            other => {
                return Err(CheckableError::TypeMismatch {
                    found: other.map_or_else(|| "nothing".to_string(), Value::to_string),
                });
            }
        }

        let steps = obj
            .get("steps")
            .and_then(Value::as_array)
            .ok_or(CheckableError::MissingSteps)?
            .iter()
            .enumerate()
            .map(|(i, step)| Step::from_json(step, i))
            .collect::<Result<Vec<_>, _>>()?;

        let checkers = match obj.get("checkers") {
            Some(value) if is_truthy(value) => {
                let descs = value.as_array().ok_or(CheckableError::InvalidCheckers)?;
                let checkers = descs
                    .iter()
                    .enumerate()
                    .map(|(i, desc)| checker_from_json(desc, i))
                    .collect::<Result<Vec<_>, _>>()?;
                Some(checkers)
            }
            _ => None,
        };

        debug!(
            id = ?id,
            steps = steps.len(),
            checkers = checkers.as_ref().map(Vec::len),
            "parsed checkable"
        );

        Ok(Self { steps, id, checkers })
    }

    /// Ordered steps, in the order they were defined.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Runtime identifier assigned at construction.
    #[must_use]
    pub fn id(&self) -> Option<u64> {
        self.id
    }

    /// `true` when there are no checkers and a person must confirm the work.
    #[must_use]
    pub fn is_manual(&self) -> bool {
        self.checkers.is_none()
    }

    /// Owned checkers, or `None` for a manual checkable.
    #[must_use]
    pub fn checkers(&self) -> Option<&[Box<dyn Checker>]> {
        self.checkers.as_deref()
    }

    /// Serializes the persisted definition.
    ///
    /// `checkers` is omitted entirely for a manual checkable so that the
    /// manual/automated distinction survives a round trip. `id` is never emitted.
    #[must_use]
    pub fn as_json(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("type".into(), json!(TYPE_TAG));
        obj.insert("steps".into(), self.steps.iter().map(Step::as_json).collect());
        if let Some(checkers) = &self.checkers {
            obj.insert("checkers".into(), checkers.iter().map(|c| c.as_json()).collect());
        }
        Value::Object(obj)
    }

    /// Verifies the checkable by running every checker concurrently.
    ///
    /// The returned future resolves to `true` only if every checker reports a
    /// pass. A checker that reports `false` and a checker whose run errors both
    /// make the result `false`; the two cases are not distinguished.
    ///
    /// # Errors
    ///
    /// Returns [`CheckableError::ManualCheckable`] immediately, before any
    /// checker is started, if the checkable is manual.
    pub fn run_checkers(&self) -> Result<impl Future<Output = bool> + Send + '_, CheckableError> {
        let checkers = self.checkers.as_ref().ok_or(CheckableError::ManualCheckable)?;
        let runs: Vec<_> = checkers.iter().map(|checker| checker.run()).collect();

        Ok(async move {
            let outcomes = join_all(runs).await;
            let mut passed = true;
            for (checker, outcome) in checkers.iter().zip(outcomes) {
                match outcome {
                    Ok(true) => {}
                    Ok(false) => passed = false,
                    Err(e) => {
                        debug!(kind = checker.kind(), error = %e, "checker errored");
                        passed = false;
                    }
                }
            }
            info!(id = ?self.id, passed, "ran checkers");
            passed
        })
    }
}

/// Checkables are equal when their persisted definitions are; `id` is ignored.
impl PartialEq for Checkable {
    fn eq(&self, other: &Self) -> bool {
        self.as_json() == other.as_json()
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f.abs() > 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
