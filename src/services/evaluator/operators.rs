//! Operator definitions for rule expressions.
//!
//! Each operator carries a symbol, an associativity, and an integer
//! precedence. Higher precedence binds tighter. The symbol table is a
//! process-wide immutable map initialized once at startup; it is never
//! mutated afterwards, so unsynchronized concurrent reads are safe.

use lazy_static::lazy_static;
use std::collections::HashMap;

pub const LEFT_PARENTHESIS: &str = "(";
pub const RIGHT_PARENTHESIS: &str = ")";

/// Tie-breaking rule for operators of equal precedence during RPN conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
	Left,
	Right,
}

/// Closed set of operator symbols recognized by the tokenizer and converter.
///
/// Arithmetic operators (`+`, `-`, `/`, `*`, `%`, `^`) are tokenized and
/// precedence-ranked so that mixed expressions convert to well-formed postfix
/// sequences, but the evaluator has no routine for them and rejects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
	Add,
	Sub,
	Div,
	Mul,
	Mod,
	Pow,
	Or,
	And,
	Eq,
	Ne,
	Gt,
	Gte,
	Lt,
	Lte,
}

impl Operator {
	/// All operators, in symbol-table order.
	pub fn all() -> &'static [Operator] {
		&[
			Operator::Add,
			Operator::Sub,
			Operator::Div,
			Operator::Mul,
			Operator::Mod,
			Operator::Pow,
			Operator::Or,
			Operator::And,
			Operator::Eq,
			Operator::Ne,
			Operator::Gt,
			Operator::Gte,
			Operator::Lt,
			Operator::Lte,
		]
	}

	/// Returns the textual symbol for this operator.
	pub fn symbol(&self) -> &'static str {
		match self {
			Operator::Add => "+",
			Operator::Sub => "-",
			Operator::Div => "/",
			Operator::Mul => "*",
			Operator::Mod => "%",
			Operator::Pow => "^",
			Operator::Or => "||",
			Operator::And => "&&",
			Operator::Eq => "==",
			Operator::Ne => "!=",
			Operator::Gt => ">",
			Operator::Gte => ">=",
			Operator::Lt => "<",
			Operator::Lte => "<=",
		}
	}

	/// Returns the associativity governing pop order during conversion.
	pub fn associativity(&self) -> Associativity {
		match self {
			Operator::Add | Operator::Sub => Associativity::Right,
			_ => Associativity::Left,
		}
	}

	/// Returns the precedence rank; higher binds tighter.
	pub fn precedence(&self) -> i32 {
		match self {
			Operator::Add | Operator::Sub | Operator::Or => 0,
			Operator::Div | Operator::Mul | Operator::Mod | Operator::And => 5,
			Operator::Pow | Operator::Eq | Operator::Ne => 10,
			Operator::Gt | Operator::Gte | Operator::Lt | Operator::Lte => 15,
		}
	}

	/// Looks up the operator for a token, if the token is an operator symbol.
	pub fn from_symbol(token: &str) -> Option<Operator> {
		OPERATORS.get(token).copied()
	}

	/// Compares this operator's precedence against another's.
	pub fn compare_precedence(&self, other: &Operator) -> i32 {
		self.precedence() - other.precedence()
	}
}

lazy_static! {
	/// Symbol to operator lookup table, built once at first use.
	pub static ref OPERATORS: HashMap<&'static str, Operator> = {
		let mut map = HashMap::new();
		for operator in Operator::all() {
			map.insert(operator.symbol(), *operator);
		}
		map
	};
}
