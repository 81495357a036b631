//! Expression model for rule evaluation.

use serde::{Deserialize, Serialize};

/// A raw boolean rule expression.
///
/// Wraps the rule text supplied by the caller, e.g. `"(a < b) && (b < c)"`.
/// The text is immutable once constructed; the evaluator never mutates it.
/// Expressions whose text is exactly `true` or `false` are recognized as a
/// fast path that bypasses tokenization entirely.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Expression {
	/// The raw rule text
	value: String,
}

impl Expression {
	/// Creates a new expression from the given rule text.
	pub fn new(value: impl Into<String>) -> Self {
		Self {
			value: value.into(),
		}
	}

	/// Returns the raw rule text.
	pub fn value(&self) -> &str {
		&self.value
	}
}

impl From<&str> for Expression {
	fn from(value: &str) -> Self {
		Self::new(value)
	}
}

impl std::fmt::Display for Expression {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.value)
	}
}
