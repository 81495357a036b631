//! Error types for the evaluation of rule expressions.
//!
//! This module defines the `EvaluationError` enum, which represents the
//! failure modes of the evaluation pipeline: missing expressions, literal
//! parsing failures, unsupported operators, type dispatch failures, and
//! operand stack underflow on malformed input.

use crate::utils::logging::error::{ErrorContext, TraceableError};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EvaluationError {
	/// The expression is absent or its text is blank.
	#[error("Missing expression: {0}")]
	MissingExpression(Box<ErrorContext>),

	/// A date, date-time, or integer literal fails to parse.
	#[error("Failed to parse value: {0}")]
	ParseError(Box<ErrorContext>),

	/// An operator has no evaluation routine for the operands it was given.
	#[error("Unsupported operator: {0}")]
	UnsupportedOperator(Box<ErrorContext>),

	/// A comparison could not be routed to any data type.
	#[error("Type mismatch: {0}")]
	TypeMismatch(Box<ErrorContext>),

	/// An operand pop hit an empty stack (malformed expression structure).
	#[error("Stack underflow: {0}")]
	StackUnderflow(Box<ErrorContext>),
}

impl EvaluationError {
	/// Creates a new `MissingExpression` error.
	pub fn missing_expression(
		message: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::MissingExpression(Box::new(ErrorContext::new_with_log(
			message, source, metadata,
		)))
	}

	/// Creates a new `ParseError` error.
	/// The `message` for `ErrorContext` should describe the parsing failure.
	pub fn parse_error(
		message: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::ParseError(Box::new(ErrorContext::new_with_log(
			message, source, metadata,
		)))
	}

	/// Creates a new `UnsupportedOperator` error.
	/// The `message` for `ErrorContext` should describe why the operator is
	/// unsupported, e.g., "'<' for type STRING".
	pub fn unsupported_operator(
		message: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::UnsupportedOperator(Box::new(ErrorContext::new_with_log(
			message, source, metadata,
		)))
	}

	/// Creates a new `TypeMismatch` error.
	/// The `message` for `ErrorContext` should describe the operands that
	/// could not be routed to a data type.
	pub fn type_mismatch(
		message: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::TypeMismatch(Box::new(ErrorContext::new_with_log(
			message, source, metadata,
		)))
	}

	/// Creates a new `StackUnderflow` error.
	/// The `message` for `ErrorContext` should name the operator whose pop
	/// emptied the stack.
	pub fn stack_underflow(
		message: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::StackUnderflow(Box::new(ErrorContext::new_with_log(
			message, source, metadata,
		)))
	}
}

impl TraceableError for EvaluationError {
	fn trace_id(&self) -> String {
		match self {
			Self::MissingExpression(ctx)
			| Self::ParseError(ctx)
			| Self::UnsupportedOperator(ctx)
			| Self::TypeMismatch(ctx)
			| Self::StackUnderflow(ctx) => ctx.trace_id.clone(),
		}
	}
}
