//! Shared logic for tokenizing, converting, and evaluating rule expressions

mod error;
mod evaluation;
mod helpers;
mod operators;
mod parsing;

pub use error::EvaluationError;
pub use evaluation::{Evaluator, RpnEvaluator};
pub use helpers::compare_ordered_values;
pub use operators::{Associativity, Operator, LEFT_PARENTHESIS, RIGHT_PARENTHESIS};
pub use parsing::{convert_infix_to_rpn, tokenize};
