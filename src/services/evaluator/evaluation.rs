//! Postfix evaluation of rule expressions against a variable context.
//!
//! This module provides the `Evaluator` trait and its `RpnEvaluator`
//! implementation. Evaluation runs the full pipeline: tokenize the raw rule
//! text, convert it to postfix, resolve variable tokens to typed operands,
//! then fold the postfix sequence on an operand stack. Each call is
//! self-contained; the stack is created fresh per call and nothing is shared
//! across calls besides the immutable operator table.

use chrono::{NaiveDate, NaiveDateTime};
use std::collections::HashMap;

use super::{
	error::EvaluationError,
	helpers::compare_ordered_values,
	operators::Operator,
	parsing::{convert_infix_to_rpn, tokenize},
};
use crate::models::{Context, DataType, Expression, VariableValue};

pub const EXPRESSION_TRUE: &str = "true";
pub const EXPRESSION_FALSE: &str = "false";

/// The `Evaluator` trait defines the single entry point of the library:
/// evaluating a rule expression against a context of variable bindings.
pub trait Evaluator {
	/// Evaluates the expression to a boolean, or fails with an
	/// [`EvaluationError`] describing the first problem encountered.
	fn evaluate(&self, context: &Context, expression: &Expression)
		-> Result<bool, EvaluationError>;
}

/// A single entry on the operand stack.
///
/// Variable tokens are tagged with their declared data type when they are
/// resolved, so a comparison can be routed without guessing from the operand
/// text. Results of sub-expressions are booleans and never participate in
/// typed comparisons.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Operand {
	/// Result of an already-evaluated sub-expression
	Bool(bool),
	/// A substituted variable value carrying its declared type
	Typed { data_type: DataType, text: String },
	/// A bare token: a literal or an identifier with no binding
	Raw(String),
}

impl Operand {
	fn data_type(&self) -> Option<DataType> {
		match self {
			Operand::Typed { data_type, .. } => Some(*data_type),
			_ => None,
		}
	}

	/// The operand's text view, with booleans rendered as `true`/`false`.
	fn as_str(&self) -> &str {
		match self {
			Operand::Bool(true) => EXPRESSION_TRUE,
			Operand::Bool(false) => EXPRESSION_FALSE,
			Operand::Typed { text, .. } => text,
			Operand::Raw(text) => text,
		}
	}

	/// The operand's truth view: a lenient boolean parse where anything but
	/// a case-insensitive `true` is false.
	fn truth(&self) -> bool {
		match self {
			Operand::Bool(value) => *value,
			other => other.as_str().eq_ignore_ascii_case(EXPRESSION_TRUE),
		}
	}
}

/// Stack-based postfix evaluator for rule expressions.
///
/// Stateless; a single instance may be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct RpnEvaluator;

impl RpnEvaluator {
	pub fn new() -> Self {
		Self
	}

	/// Resolves a postfix token into an operand, tagging it with the bound
	/// variable's data type when the token matches a binding.
	fn resolve_operand(token: &str, variables: &HashMap<String, VariableValue>) -> Operand {
		match variables.get(token) {
			Some(binding) => Operand::Typed {
				data_type: binding.data_type,
				text: binding.value.clone(),
			},
			None => Operand::Raw(token.to_string()),
		}
	}

	fn pop_operand(
		stack: &mut Vec<Operand>,
		operator: Operator,
	) -> Result<Operand, EvaluationError> {
		stack.pop().ok_or_else(|| {
			let msg = format!(
				"Operand pop for operator '{}' hit an empty stack",
				operator.symbol()
			);
			EvaluationError::stack_underflow(msg, None, None)
		})
	}

	/// Applies an operator to the two popped operands. `first` is the stack
	/// top and `second` the entry below it, so the result reads
	/// `second OP first`.
	fn apply_operator(
		&self,
		operator: Operator,
		first: &Operand,
		second: &Operand,
	) -> Result<bool, EvaluationError> {
		match operator {
			// "&&" is literal equality of the two operand texts, not a
			// truth-table AND: two false sub-results compare equal and
			// yield true. Preserved behavior.
			Operator::And => Ok(second.as_str() == first.as_str()),
			Operator::Or => Ok(second.truth() || first.truth()),
			Operator::Eq
			| Operator::Ne
			| Operator::Gt
			| Operator::Gte
			| Operator::Lt
			| Operator::Lte => self.apply_comparison(operator, first, second),
			other => {
				let msg = format!(
					"No evaluation routine for operator '{}'",
					other.symbol()
				);
				Err(EvaluationError::unsupported_operator(msg, None, None))
			}
		}
	}

	/// Routes a comparison to the data type of its operands. The left
	/// operand's tag wins when both sides are typed; boolean sub-results
	/// never carry a tag.
	fn apply_comparison(
		&self,
		operator: Operator,
		first: &Operand,
		second: &Operand,
	) -> Result<bool, EvaluationError> {
		let data_type = second
			.data_type()
			.or_else(|| first.data_type())
			.ok_or_else(|| {
				let msg = format!(
					"No data type for operands '{}' and '{}' of operator '{}'",
					second.as_str(),
					first.as_str(),
					operator.symbol()
				);
				EvaluationError::type_mismatch(msg, None, None)
			})?;

		tracing::debug!(
			operator = operator.symbol(),
			%data_type,
			left = second.as_str(),
			right = first.as_str(),
			"Routing typed comparison"
		);

		match data_type {
			DataType::Date => self.compare_date(operator, first.as_str(), second.as_str()),
			DataType::DateTime => {
				self.compare_date_time(operator, first.as_str(), second.as_str())
			}
			DataType::Integer => {
				self.compare_numeric::<i64>(operator, first.as_str(), second.as_str())
			}
			DataType::String => self.compare_string(operator, first.as_str(), second.as_str()),
		}
	}

	fn compare_date(
		&self,
		operator: Operator,
		first: &str,
		second: &str,
	) -> Result<bool, EvaluationError> {
		let right = parse_date(first)?;
		let left = parse_date(second)?;
		compare_ordered_values(&left, &operator, &right)
	}

	fn compare_date_time(
		&self,
		operator: Operator,
		first: &str,
		second: &str,
	) -> Result<bool, EvaluationError> {
		let right = parse_date_time(first)?;
		let left = parse_date_time(second)?;
		match operator {
			// Lte shares the strictly-before branch with Lt: equal instants
			// fail "<=". Known DATE_TIME asymmetry, preserved.
			Operator::Lt | Operator::Lte => Ok(left < right),
			Operator::Gt => Ok(left > right),
			Operator::Gte => Ok(left >= right),
			Operator::Eq => Ok(left == right),
			Operator::Ne => Ok(left != right),
			other => {
				let msg = format!("Operator '{}' for type DATE_TIME", other.symbol());
				Err(EvaluationError::unsupported_operator(msg, None, None))
			}
		}
	}

	fn compare_numeric<T: std::str::FromStr + Ord>(
		&self,
		operator: Operator,
		first: &str,
		second: &str,
	) -> Result<bool, EvaluationError>
	where
		<T as std::str::FromStr>::Err: std::error::Error + Send + Sync + 'static,
	{
		let right = parse_integer::<T>(first)?;
		let left = parse_integer::<T>(second)?;
		compare_ordered_values(&left, &operator, &right)
	}

	fn compare_string(
		&self,
		operator: Operator,
		first: &str,
		second: &str,
	) -> Result<bool, EvaluationError> {
		match operator {
			Operator::Eq => Ok(second == first),
			Operator::Ne => Ok(second != first),
			other => {
				// STRING has no ordering semantics
				let msg = format!("Operator '{}' for type STRING", other.symbol());
				Err(EvaluationError::unsupported_operator(msg, None, None))
			}
		}
	}
}

impl Evaluator for RpnEvaluator {
	fn evaluate(
		&self,
		context: &Context,
		expression: &Expression,
	) -> Result<bool, EvaluationError> {
		let raw = expression.value();
		if raw.trim().is_empty() {
			return Err(EvaluationError::missing_expression(
				"Expression is empty",
				None,
				None,
			));
		}

		// Fast path: literal expressions bypass tokenization entirely.
		// Exact, case-sensitive match.
		if raw == EXPRESSION_TRUE {
			return Ok(true);
		}
		if raw == EXPRESSION_FALSE {
			return Ok(false);
		}

		let rpn = convert_infix_to_rpn(&tokenize(raw));
		tracing::debug!(expression = raw, postfix = ?rpn, "Evaluating postfix sequence");

		let mut stack: Vec<Operand> = Vec::new();
		for token in &rpn {
			match Operator::from_symbol(token) {
				None => stack.push(Self::resolve_operand(token, context.variables())),
				Some(operator) => {
					let first = Self::pop_operand(&mut stack, operator)?;
					let second = Self::pop_operand(&mut stack, operator)?;
					let result = self.apply_operator(operator, &first, &second)?;
					stack.push(Operand::Bool(result));
				}
			}
		}

		let final_operand = stack.pop().ok_or_else(|| {
			EvaluationError::stack_underflow("No result left on the operand stack", None, None)
		})?;
		Ok(final_operand.truth())
	}
}

fn parse_date(text: &str) -> Result<NaiveDate, EvaluationError> {
	text.parse::<NaiveDate>().map_err(|e| {
		let msg = format!("Could not parse '{}' as DATE", text);
		EvaluationError::parse_error(msg, Some(e.into()), None)
	})
}

fn parse_date_time(text: &str) -> Result<NaiveDateTime, EvaluationError> {
	text.parse::<NaiveDateTime>().map_err(|e| {
		let msg = format!("Could not parse '{}' as DATE_TIME", text);
		EvaluationError::parse_error(msg, Some(e.into()), None)
	})
}

fn parse_integer<T: std::str::FromStr>(text: &str) -> Result<T, EvaluationError>
where
	<T as std::str::FromStr>::Err: std::error::Error + Send + Sync + 'static,
{
	text.parse::<T>().map_err(|e| {
		let msg = format!("Could not parse '{}' as INTEGER", text);
		EvaluationError::parse_error(msg, Some(Box::new(e)), None)
	})
}
