//! Errors raised while building or verifying a checkable.

use thiserror::Error;

/// Failure to construct a [`Checkable`](super::Checkable) or to start its verification.
///
/// Construction errors are fatal to that one attempt: no partially built
/// checkable is ever returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CheckableError {
    /// The input was not a JSON object.
    #[error("no JSON object given for Checkable")]
    InvalidInput,
    /// The `type` field was not the literal `"Checkable"`.
    #[error("\"type\" field is not \"Checkable\" (found {found})")]
    TypeMismatch {
        /// The offending `type` value, rendered as JSON.
        found: String,
    },
    /// The `steps` field was missing or not an array.
    #[error("\"steps\" field missing or not an array")]
    MissingSteps,
    /// A step payload was rejected by the step constructor.
    #[error("step {index}: {reason}")]
    InvalidStep {
        /// Position of the step in the `steps` array.
        index: usize,
        /// Why the step was rejected.
        reason: String,
    },
    /// The `checkers` field was present and truthy but not an array.
    #[error("\"checkers\" field is not an array")]
    InvalidCheckers,
    /// A checker description had no string `type` discriminator.
    #[error("checker {index} has no \"type\" discriminator")]
    MissingCheckerKind {
        /// Position of the description in the `checkers` array.
        index: usize,
    },
    /// No registered checker kind matches the discriminator.
    #[error("unknown checker kind {kind:?}")]
    UnknownCheckerKind {
        /// The unmatched discriminator.
        kind: String,
    },
    /// The discriminator matched, but the remaining fields did not fit that kind.
    #[error("invalid {kind} checker: {reason}")]
    InvalidChecker {
        /// The matched discriminator.
        kind: String,
        /// Deserialization failure detail.
        reason: String,
    },
    /// Verification was requested on a checkable that has no checkers.
    #[error("cannot run checkers on a manual checkable")]
    ManualCheckable,
}
