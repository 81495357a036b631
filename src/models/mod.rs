//! Domain models and data structures for rule evaluation.
//!
//! This module contains all the core data structures used throughout the library:
//!
//! - `core`: Core domain models (Expression, Context, VariableValue, DataType)

mod core;

// Re-export core types
pub use core::{Context, DataType, Expression, VariableValue};
