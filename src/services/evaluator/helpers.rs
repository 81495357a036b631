//! Shared comparison helpers for the postfix evaluator.

use super::{error::EvaluationError, operators::Operator};

/// Compares two values implementing the Ord trait using the specified
/// comparison operator.
///
/// Returns an error for operators with no ordering semantics (logical and
/// arithmetic operators).
pub fn compare_ordered_values<T: Ord>(
	left: &T,
	op: &Operator,
	right: &T,
) -> Result<bool, EvaluationError> {
	match op {
		Operator::Eq => Ok(left == right),
		Operator::Ne => Ok(left != right),
		Operator::Gt => Ok(left > right),
		Operator::Gte => Ok(left >= right),
		Operator::Lt => Ok(left < right),
		Operator::Lte => Ok(left <= right),
		_ => {
			let msg = format!(
				"Unsupported operator '{}' for ordered type {}",
				op.symbol(),
				std::any::type_name::<T>()
			);
			Err(EvaluationError::unsupported_operator(msg, None, None))
		}
	}
}
