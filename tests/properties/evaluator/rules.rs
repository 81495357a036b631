//! Properties of the evaluation pipeline over random bindings.

use proptest::prelude::*;

use crate::properties::strategies::{
	apply_comparison, comparison_operator_strategy, date_strategy, integer_value_strategy,
	variable_name_strategy,
};
use rule_evaluator::{
	models::{Context, DataType, Expression},
	services::evaluator::{Evaluator, RpnEvaluator},
};

fn evaluate(context: &Context, raw: String) -> Result<bool, impl std::error::Error> {
	RpnEvaluator::new().evaluate(context, &Expression::new(raw))
}

proptest! {
	#[test]
	fn prop_integer_comparisons_agree_with_native(
		left in integer_value_strategy(),
		right in integer_value_strategy(),
		operator in comparison_operator_strategy(),
	) {
		let mut context = Context::new();
		context
			.bind("lhs", DataType::Integer, left.to_string())
			.bind("rhs", DataType::Integer, right.to_string());

		let result = evaluate(&context, format!("lhs {} rhs", operator)).unwrap();
		prop_assert_eq!(result, apply_comparison(&left, operator, &right));
	}

	#[test]
	fn prop_date_comparisons_agree_with_native(
		left in date_strategy(),
		right in date_strategy(),
		operator in comparison_operator_strategy(),
	) {
		let mut context = Context::new();
		context
			.bind("lhs", DataType::Date, left.to_string())
			.bind("rhs", DataType::Date, right.to_string());

		let result = evaluate(&context, format!("lhs {} rhs", operator)).unwrap();
		prop_assert_eq!(result, apply_comparison(&left, operator, &right));
	}

	#[test]
	fn prop_or_agrees_with_truth_table(
		(a, b, c, d) in (
			integer_value_strategy(),
			integer_value_strategy(),
			integer_value_strategy(),
			integer_value_strategy(),
		),
		op1 in comparison_operator_strategy(),
		op2 in comparison_operator_strategy(),
	) {
		let mut context = Context::new();
		context
			.bind("a", DataType::Integer, a.to_string())
			.bind("b", DataType::Integer, b.to_string())
			.bind("c", DataType::Integer, c.to_string())
			.bind("d", DataType::Integer, d.to_string());

		let first = apply_comparison(&a, op1, &b);
		let second = apply_comparison(&c, op2, &d);

		let result = evaluate(&context, format!("(a {} b) || (c {} d)", op1, op2)).unwrap();
		prop_assert_eq!(result, first || second);
	}

	#[test]
	fn prop_and_is_equality_of_subresults(
		(a, b, c, d) in (
			integer_value_strategy(),
			integer_value_strategy(),
			integer_value_strategy(),
			integer_value_strategy(),
		),
		op1 in comparison_operator_strategy(),
		op2 in comparison_operator_strategy(),
	) {
		let mut context = Context::new();
		context
			.bind("a", DataType::Integer, a.to_string())
			.bind("b", DataType::Integer, b.to_string())
			.bind("c", DataType::Integer, c.to_string())
			.bind("d", DataType::Integer, d.to_string());

		let first = apply_comparison(&a, op1, &b);
		let second = apply_comparison(&c, op2, &d);

		// "&&" is literal equality of the two sub-results, not a
		// truth-table AND; the property pins that behavior down
		let result = evaluate(&context, format!("(a {} b) && (c {} d)", op1, op2)).unwrap();
		prop_assert_eq!(result, first == second);
	}

	#[test]
	fn prop_evaluation_is_idempotent(
		left in integer_value_strategy(),
		right in integer_value_strategy(),
		operator in comparison_operator_strategy(),
	) {
		let mut context = Context::new();
		context
			.bind("lhs", DataType::Integer, left.to_string())
			.bind("rhs", DataType::Integer, right.to_string());

		let expression = format!("lhs {} rhs", operator);
		let once = evaluate(&context, expression.clone()).unwrap();
		let twice = evaluate(&context, expression).unwrap();
		prop_assert_eq!(once, twice);
	}

	#[test]
	fn prop_self_equality_holds_for_any_string_binding(
		name in variable_name_strategy(),
		value in "[a-zA-Z0-9 .:-]{0,16}",
	) {
		let mut context = Context::new();
		context.bind(name.clone(), DataType::String, value);

		let result = evaluate(&context, format!("{} == {}", name, name)).unwrap();
		prop_assert!(result);
	}
}
