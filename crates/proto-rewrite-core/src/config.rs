//! Configuration for schema rewriting.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RewriteError;

/// A single rewrite pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Pass {
    /// Lift nested messages to the top level of the file.
    LiftMessages,
    /// Give every enum a constant with value 0.
    CompleteZero,
    /// Prefix enum constants whose names start with a digit.
    PrefixDigits,
}

impl Pass {
    /// All passes, in default pipeline order.
    pub const ALL: [Pass; 3] = [Pass::LiftMessages, Pass::CompleteZero, Pass::PrefixDigits];

    pub fn as_str(self) -> &'static str {
        match self {
            Pass::LiftMessages => "lift-messages",
            Pass::CompleteZero => "complete-zero",
            Pass::PrefixDigits => "prefix-digits",
        }
    }
}

impl fmt::Display for Pass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Pass {
    type Err = RewriteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pass::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| RewriteError::UnknownPass {
                name: s.to_string(),
            })
    }
}

/// Options for schema rewriting.
///
/// ## Serialization Format
///
/// Fields are serialized in `kebab-case` (e.g., `zero-value-name`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct RewriteOptions {
    /// Passes to run, in order. Default: all three.
    pub passes: Vec<Pass>,
    /// Name of the constant inserted into enums lacking a zero value.
    pub zero_value_name: String,
    /// Prefix prepended to enum constants whose names start with a digit.
    pub digit_prefix: String,
}

impl RewriteOptions {
    /// Check that the options keep every pass's guarantees.
    ///
    /// The digit prefix must be non-empty and must not start with an ASCII
    /// digit, otherwise prefixed names still start with a digit and a second
    /// run renames them again. The zero-value name must be non-empty.
    pub fn validate(&self) -> Result<(), RewriteError> {
        if self.digit_prefix.is_empty() {
            return Err(invalid("digit-prefix", "must not be empty"));
        }
        if self.digit_prefix.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(invalid(
                "digit-prefix",
                &format!("'{}' must not start with a digit", self.digit_prefix),
            ));
        }
        if self.zero_value_name.is_empty() {
            return Err(invalid("zero-value-name", "must not be empty"));
        }
        Ok(())
    }
}

fn invalid(option: &str, reason: &str) -> RewriteError {
    RewriteError::InvalidOption {
        option: option.to_string(),
        reason: reason.to_string(),
    }
}

impl Default for RewriteOptions {
    fn default() -> Self {
        Self {
            passes: Pass::ALL.to_vec(),
            zero_value_name: "DEFAULT".to_string(),
            digit_prefix: "NUM_".to_string(),
        }
    }
}
