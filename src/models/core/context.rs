//! Runtime variable bindings for rule evaluation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Declared type of a bound variable value.
///
/// Determines which comparison semantics apply when the value appears as an
/// operand in an expression. Closed set; there is no nested or nullable
/// variant.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Hash)]
pub enum DataType {
	/// Calendar date, ISO format (e.g. `2020-01-01`)
	#[serde(rename = "DATE")]
	Date,

	/// Combined date and time (e.g. `2020-01-01T10:00:00`)
	#[serde(rename = "DATE_TIME")]
	DateTime,

	/// Base-10 signed integer
	#[serde(rename = "INTEGER")]
	Integer,

	/// Plain string, equality comparisons only
	#[serde(rename = "STRING")]
	String,
}

impl std::fmt::Display for DataType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let name = match self {
			DataType::Date => "DATE",
			DataType::DateTime => "DATE_TIME",
			DataType::Integer => "INTEGER",
			DataType::String => "STRING",
		};
		write!(f, "{}", name)
	}
}

/// A typed variable value bound in a [`Context`].
///
/// Pairs a declared [`DataType`] tag with a string-encoded value. The value
/// is owned by the caller and immutable once passed in; parsing into the
/// declared type happens lazily at comparison time.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct VariableValue {
	/// Declared type of the value
	pub data_type: DataType,

	/// String-encoded value
	pub value: String,
}

impl VariableValue {
	/// Creates a new variable value with the given type tag.
	pub fn new(data_type: DataType, value: impl Into<String>) -> Self {
		Self {
			data_type,
			value: value.into(),
		}
	}
}

/// Runtime variable bindings supplied by the caller.
///
/// Maps variable names to their typed values. The context is constructed and
/// owned entirely by the caller; the evaluator only reads it.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Context {
	variables: HashMap<String, VariableValue>,
}

impl Context {
	/// Creates an empty context.
	pub fn new() -> Self {
		Self::default()
	}

	/// Binds a variable name to a typed value, replacing any previous binding.
	pub fn bind(
		&mut self,
		name: impl Into<String>,
		data_type: DataType,
		value: impl Into<String>,
	) -> &mut Self {
		self.variables
			.insert(name.into(), VariableValue::new(data_type, value));
		self
	}

	/// Looks up the binding for a variable name.
	pub fn get(&self, name: &str) -> Option<&VariableValue> {
		self.variables.get(name)
	}

	/// Returns the full name-to-value mapping.
	pub fn variables(&self) -> &HashMap<String, VariableValue> {
		&self.variables
	}
}
