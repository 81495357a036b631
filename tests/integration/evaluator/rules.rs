//! End-to-end rule evaluation scenarios.

use rule_evaluator::{
	models::{Context, DataType, Expression},
	services::evaluator::{EvaluationError, Evaluator, RpnEvaluator},
};

fn evaluate(context: &Context, raw: &str) -> Result<bool, EvaluationError> {
	RpnEvaluator::new().evaluate(context, &Expression::new(raw))
}

#[test]
fn literal_expressions_short_circuit_with_empty_context() {
	let context = Context::new();
	assert!(evaluate(&context, "true").unwrap());
	assert!(!evaluate(&context, "false").unwrap());
}

#[test]
fn integer_rule_with_multiple_clauses() {
	let mut context = Context::new();
	context
		.bind("age", DataType::Integer, "42")
		.bind("threshold", DataType::Integer, "18")
		.bind("limit", DataType::Integer, "65");

	assert!(evaluate(&context, "age >= threshold && age < limit").unwrap());
	assert!(evaluate(&context, "(age < threshold) || (age < limit)").unwrap());
	assert!(!evaluate(&context, "age < threshold || age > limit").unwrap());
}

#[test]
fn mixed_type_rule_with_dates_and_integers() {
	let mut context = Context::new();
	context
		.bind("start", DataType::Date, "2024-01-01")
		.bind("end", DataType::Date, "2024-12-31")
		.bind("count", DataType::Integer, "7");

	assert!(evaluate(&context, "(start < end) && (count > 5)").unwrap());
	assert!(!evaluate(&context, "(start > end) || (count == 0)").unwrap());
}

#[test]
fn string_and_datetime_rule() {
	let mut context = Context::new();
	context
		.bind("status", DataType::String, "active")
		.bind("expected", DataType::String, "active")
		.bind("created", DataType::DateTime, "2024-05-01T08:00:00")
		.bind("deadline", DataType::DateTime, "2024-06-01T00:00:00");

	assert!(evaluate(&context, "(status == expected) && (created < deadline)").unwrap());
}

#[test]
fn context_deserialized_from_json() {
	let json = r#"{
		"a": {"data_type": "INTEGER", "value": "1"},
		"b": {"data_type": "INTEGER", "value": "2"},
		"c": {"data_type": "INTEGER", "value": "3"}
	}"#;
	let context: Context = serde_json::from_str(json).unwrap();

	assert!(evaluate(&context, "(a < b) && (b < c)").unwrap());
	assert!(evaluate(&context, "(a > b) || (b < c)").unwrap());
}

#[test]
fn deeply_nested_parentheses() {
	let mut context = Context::new();
	context
		.bind("a", DataType::Integer, "1")
		.bind("b", DataType::Integer, "2")
		.bind("c", DataType::Integer, "3")
		.bind("d", DataType::Integer, "4");

	assert!(evaluate(&context, "( (a < b) && (c < d) ) || (a > d)").unwrap());
	assert!(evaluate(&context, "(a < b) && ( (b < c) || (d < c) )").unwrap());
}

#[test]
fn unbound_identifier_fails_type_dispatch() {
	let context = Context::new();
	let result = evaluate(&context, "missing == other");
	assert!(matches!(result, Err(EvaluationError::TypeMismatch(_))));
}

#[test]
fn malformed_rule_fails_with_stack_underflow() {
	let mut context = Context::new();
	context.bind("a", DataType::Integer, "5");

	assert!(matches!(
		evaluate(&context, "a >"),
		Err(EvaluationError::StackUnderflow(_))
	));
	assert!(matches!(
		evaluate(&context, "&& a"),
		Err(EvaluationError::StackUnderflow(_))
	));
}

#[test]
fn arithmetic_rule_fails_explicitly() {
	let mut context = Context::new();
	context
		.bind("a", DataType::Integer, "5")
		.bind("b", DataType::Integer, "3");

	assert!(matches!(
		evaluate(&context, "a + b > a"),
		Err(EvaluationError::UnsupportedOperator(_))
	));
}

#[test]
fn repeated_evaluation_leaks_no_state() {
	let evaluator = RpnEvaluator::new();
	let mut context = Context::new();
	context
		.bind("d1", DataType::Date, "2020-01-01")
		.bind("d2", DataType::Date, "2021-01-01");
	let expression = Expression::new("(d1 < d2) && (d1 != d2)");

	for _ in 0..10 {
		assert!(evaluator.evaluate(&context, &expression).unwrap());
	}

	// Same evaluator, unrelated context and expression
	let mut other = Context::new();
	other.bind("s", DataType::String, "x");
	assert!(evaluator
		.evaluate(&other, &Expression::new("s == s"))
		.unwrap());
}

#[test]
fn error_messages_are_human_readable() {
	let mut context = Context::new();
	context
		.bind("d1", DataType::Date, "garbage")
		.bind("d2", DataType::Date, "2021-01-01");

	let error = evaluate(&context, "d1 < d2").unwrap_err();
	let message = error.to_string();
	assert!(message.contains("garbage"), "message was: {}", message);
	assert!(message.contains("DATE"), "message was: {}", message);
}
