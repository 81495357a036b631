//! Error handling utilities for the library.
//!
//! This module provides a structured approach to error handling with context
//! and metadata. The primary type is [`ErrorContext`], which wraps errors with
//! additional information such as timestamps, trace IDs, and custom metadata.

use chrono::Utc;
use std::{collections::HashMap, fmt};
use uuid::Uuid;

/// A context wrapper for errors with additional metadata.
///
/// Each error context includes a descriptive message, an optional source
/// error, optional key-value metadata, a timestamp, and a unique trace ID.
/// When the source chain already carries a trace ID it is retained, so a
/// failure keeps one ID from the point it was first recorded.
#[derive(Debug)]
pub struct ErrorContext {
	/// The error message
	pub message: String,
	/// The source error that caused this error
	pub source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
	/// Additional metadata about the error
	pub metadata: Option<HashMap<String, String>>,
	/// The timestamp of the error in RFC 3339 format
	pub timestamp: String,
	/// The unique identifier for the error (UUID v4)
	pub trace_id: String,
}

impl ErrorContext {
	/// Creates a new error context with the given message, source, and
	/// metadata. The trace ID is inherited from the source chain when one is
	/// present, otherwise freshly generated.
	pub fn new(
		message: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		let trace_id = if let Some(ref src) = source {
			TraceableError::trace_id(src.as_ref())
		} else {
			Uuid::new_v4().to_string()
		};

		Self {
			message: message.into(),
			source,
			metadata,
			timestamp: Utc::now().to_rfc3339(),
			trace_id,
		}
	}

	/// Creates a new error context and logs it.
	pub fn new_with_log(
		message: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		let error_context = Self::new(message, source, metadata);
		log_error(&error_context);
		error_context
	}

	/// Adds a single key-value metadata pair to the error context.
	pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		let metadata = self.metadata.get_or_insert_with(HashMap::new);
		metadata.insert(key.into(), value.into());
		self
	}

	/// Formats the error message with its metadata appended in a readable
	/// format: `"message [key1=value1, key2=value2, ...]"`. Metadata keys are
	/// sorted for consistent output.
	pub fn format_with_metadata(&self) -> String {
		let mut result = self.message.clone();

		if let Some(metadata) = &self.metadata {
			if !metadata.is_empty() {
				let mut keys: Vec<_> = metadata.keys().collect();
				keys.sort();

				let parts: Vec<String> = keys
					.into_iter()
					.filter_map(|key| metadata.get(key).map(|value| format!("{}={}", key, value)))
					.collect();

				if !parts.is_empty() {
					result.push_str(&format!(" [{}]", parts.join(", ")));
				}
			}
		}

		result
	}
}

impl fmt::Display for ErrorContext {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.format_with_metadata())
	}
}

impl std::error::Error for ErrorContext {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		self.source
			.as_ref()
			.map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
	}
}

/// A trait for errors that can provide a trace ID
pub trait TraceableError: std::error::Error + Send + Sync {
	/// Returns the trace ID for this error
	fn trace_id(&self) -> String;
}

impl TraceableError for dyn std::error::Error + Send + Sync + 'static {
	fn trace_id(&self) -> String {
		if let Some(id) = try_extract_trace_id(self) {
			return id;
		}

		// Walk the source chain to retain an existing trace ID
		let mut source = self.source();
		const MAX_DEPTH: usize = 3;
		let mut depth = 0;

		while let Some(err) = source {
			depth += 1;
			if depth > MAX_DEPTH {
				break;
			}

			if let Some(id) = try_extract_trace_id(err) {
				return id;
			}

			source = err.source();
		}

		Uuid::new_v4().to_string()
	}
}

/// Helper function to try extracting a trace ID from an error
fn try_extract_trace_id(err: &(dyn std::error::Error + 'static)) -> Option<String> {
	if let Some(ctx) = err.downcast_ref::<ErrorContext>() {
		return Some(ctx.trace_id.clone());
	}

	if let Some(e) = err.downcast_ref::<crate::services::evaluator::EvaluationError>() {
		return Some(e.trace_id());
	}

	None
}

/// Helper function to format the complete error chain
fn format_error_chain(err: &dyn std::error::Error) -> String {
	let mut result = err.to_string();
	let mut source = err.source();

	while let Some(err) = source {
		result.push_str("\n\tCaused by: ");
		result.push_str(&err.to_string());
		source = err.source();
	}

	result
}

/// Log the error with structured fields
fn log_error(error: &ErrorContext) {
	if let Some(err) = &error.source {
		tracing::error!(
			message = error.format_with_metadata(),
			trace_id = %error.trace_id,
			timestamp = %error.timestamp,
			error.chain = %format_error_chain(&**err),
			"Error occurred"
		);
	} else {
		tracing::error!(
			message = error.format_with_metadata(),
			trace_id = %error.trace_id,
			timestamp = %error.timestamp,
			"Error occurred"
		);
	}
}
