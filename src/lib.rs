//! Boolean rule expression evaluation.
//!
//! This library evaluates rule expressions against a caller-supplied context
//! of typed variable values. A rule expression is raw text mixing comparison
//! operators, logical connectives, parentheses, literals, and named
//! variables. It includes:
//!
//! - Tokenization of raw expression strings
//! - Infix to postfix (RPN) conversion via the shunting-yard algorithm
//! - Typed comparison and logical evaluation on an operand stack
//!
//! # Module Structure
//!
//! - `models`: Data structures for expressions and variable bindings
//! - `services`: Core evaluation logic
//! - `utils`: Common utilities and helper functions

pub mod models;
pub mod services;
pub mod utils;
