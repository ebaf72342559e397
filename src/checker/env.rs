//! Checker that inspects the process environment.

use std::env::{self, VarError};

use serde::Deserialize;
use serde_json::{json, Value};

use super::{CheckFuture, Checker, CheckerError};

/// Passes when the environment variable `name` is set, and equals `value` if one is given.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EnvVar {
    /// Variable name.
    pub name: String,
    /// Required value, if any.
    #[serde(default)]
    pub value: Option<String>,
}

impl EnvVar {
    /// Discriminator for this kind.
    pub const KIND: &'static str = "env_var";
}

impl Checker for EnvVar {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn run(&self) -> CheckFuture<'_> {
        Box::pin(async move {
            match env::var(&self.name) {
                Ok(actual) => Ok(self.value.as_ref().is_none_or(|expected| *expected == actual)),
                Err(VarError::NotPresent) => Ok(false),
                Err(VarError::NotUnicode(_)) => {
                    Err(CheckerError::NotUnicode { name: self.name.clone() })
                }
            }
        })
    }

    fn as_json(&self) -> Value {
        let mut desc = json!({"type": Self::KIND, "name": self.name});
        if let Some(value) = &self.value {
            desc["value"] = json!(value);
        }
        desc
    }
}
