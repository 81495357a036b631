//! Core services implementing the evaluation logic.
//!
//! This module contains the main service implementations:
//! - `evaluator`: Tokenization, RPN conversion, and postfix evaluation

pub mod evaluator;
