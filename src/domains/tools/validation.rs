//! Argument validation shared by every tool.
//!
//! A tool's input contract is its parameter struct: the serde derive decodes
//! and type-checks the raw JSON object and applies defaults, the schemars
//! derive publishes the same contract as JSON Schema. Constraints serde cannot
//! express are added through [`Validate`].

use std::fmt::Display;

use rmcp::model::JsonObject;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::ToolError;

/// Checks that go beyond what the type system enforces.
pub trait Validate {
    /// Record every violated constraint. The default accepts everything.
    fn validate(&self, _violations: &mut Violations) {}
}

/// Accumulates constraint violations so they can be reported together.
#[derive(Debug, Default)]
pub struct Violations(Vec<String>);

impl Violations {
    /// Record a violation for `field`.
    pub fn push(&mut self, field: &str, problem: impl Display) {
        self.0.push(format!("`{field}` {problem}"));
    }

    /// Require `value` to lie within `min..=max`.
    pub fn range<N>(&mut self, field: &str, value: N, min: N, max: N)
    where
        N: PartialOrd + Display,
    {
        if value < min || value > max {
            self.push(field, format_args!("must be between {min} and {max}, got {value}"));
        }
    }

    /// Require `value` to be at least `min`, with no upper bound.
    pub fn at_least<N>(&mut self, field: &str, value: N, min: N)
    where
        N: PartialOrd + Display,
    {
        if value < min {
            self.push(field, format_args!("must be at least {min}, got {value}"));
        }
    }

    /// Require a string to contain something other than whitespace.
    pub fn not_blank(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.push(field, "must not be empty");
        }
    }

    /// `Ok` when nothing was recorded, otherwise one combined error.
    pub fn into_result(self) -> Result<(), ToolError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(ToolError::invalid_arguments(self.0.join("; ")))
        }
    }
}

/// Decode and validate raw tool arguments.
///
/// Absent arguments are treated as an empty object, so only fields the
/// parameter type actually requires can fail.
pub fn parse_arguments<P>(arguments: Option<JsonObject>) -> Result<P, ToolError>
where
    P: DeserializeOwned + Validate,
{
    let value = Value::Object(arguments.unwrap_or_default());
    let params: P =
        serde_json::from_value(value).map_err(|e| ToolError::invalid_arguments(e.to_string()))?;

    let mut violations = Violations::default();
    params.validate(&mut violations);
    violations.into_result()?;

    Ok(params)
}
