//! Core domain models for the rule evaluation system.
//!
//! This module contains the fundamental data structures that represent:
//! - Expressions: Raw rule text to evaluate
//! - Contexts: Runtime variable bindings supplied by the caller

mod context;
mod expression;

pub use context::{Context, DataType, VariableValue};
pub use expression::Expression;
