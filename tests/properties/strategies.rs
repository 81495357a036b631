//! Shared proptest strategies for rule evaluation properties.

use chrono::NaiveDate;
use proptest::prelude::*;

/// Comparison operator symbols the evaluator implements.
pub const COMPARISON_OPERATORS: [&str; 6] = ["<", "<=", ">", ">=", "==", "!="];

/// Applies a comparison operator symbol to two ordered values.
pub fn apply_comparison<T: Ord>(left: &T, operator: &str, right: &T) -> bool {
	match operator {
		"<" => left < right,
		"<=" => left <= right,
		">" => left > right,
		">=" => left >= right,
		"==" => left == right,
		"!=" => left != right,
		other => panic!("unexpected operator symbol: {}", other),
	}
}

pub fn comparison_operator_strategy() -> impl Strategy<Value = &'static str> {
	prop::sample::select(COMPARISON_OPERATORS.to_vec())
}

/// Identifier strategy for variable names; never collides with the
/// `true`/`false` literals.
pub fn variable_name_strategy() -> impl Strategy<Value = String> {
	"[a-z][a-z0-9_]{0,7}".prop_filter("reserved literal", |name| {
		name != "true" && name != "false"
	})
}

pub fn integer_value_strategy() -> impl Strategy<Value = i64> {
	any::<i64>()
}

/// Calendar dates within a broad, chrono-safe range.
pub fn date_strategy() -> impl Strategy<Value = NaiveDate> {
	(1970i32..2100, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| {
		NaiveDate::from_ymd_opt(y, m, d).expect("day 1-28 is valid for every month")
	})
}
