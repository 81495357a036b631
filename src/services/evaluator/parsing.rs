//! Tokenization and infix-to-postfix conversion of rule expressions.
//!
//! The tokenizer splits a raw expression string into operators, parentheses,
//! identifiers, and literals using a character-adjacency rule. The converter
//! reorders the token sequence into Reverse Polish Notation with the
//! shunting-yard algorithm, using the operator table for precedence and
//! associativity.

use super::operators::{Associativity, Operator, LEFT_PARENTHESIS, RIGHT_PARENTHESIS};

/// Characters tokenized as maximal runs of `&`/`|`, so `&&` and `||` stay
/// joined while a boundary falls between them and anything else.
fn is_logical_symbol(c: char) -> bool {
	matches!(c, '&' | '|')
}

/// The extended symbol class. Adjacent characters both in this class stay
/// joined, which is what keeps `==`, `!=`, `<=`, `>=` together.
fn is_operator_symbol(c: char) -> bool {
	matches!(c, '=' | '+' | '<' | '>' | '^' | '*' | '!' | '(' | ')')
}

/// Decides whether a token boundary falls between two adjacent characters.
///
/// A boundary is inserted iff any of:
/// - the next character is `)` and the previous is not `(`;
/// - exactly one of the two characters is `&`/`|`;
/// - exactly one of the two characters is in the extended symbol class.
///
/// Note the consequences at the edges: `()` stays a single token while `))`
/// splits, and runs like `((` stay joined. Malformed fragments are not
/// rejected here; they surface later as tokens that fail lookup.
fn is_boundary(prev: char, next: char) -> bool {
	if next == ')' && prev != '(' {
		return true;
	}
	if is_logical_symbol(prev) != is_logical_symbol(next) {
		return true;
	}
	is_operator_symbol(prev) != is_operator_symbol(next)
}

/// Splits a raw expression string into an ordered sequence of tokens.
///
/// Each fragment is trimmed and empty fragments are dropped. Identifiers and
/// literals are not distinguished from each other at this stage; no token
/// carries type information.
pub fn tokenize(raw: &str) -> Vec<String> {
	let mut tokens = Vec::new();
	let mut current = String::new();
	let mut prev: Option<char> = None;

	for c in raw.chars() {
		if let Some(p) = prev {
			if is_boundary(p, c) {
				push_trimmed(&mut tokens, &current);
				current.clear();
			}
		}
		current.push(c);
		prev = Some(c);
	}
	push_trimmed(&mut tokens, &current);

	tokens
}

fn push_trimmed(tokens: &mut Vec<String>, fragment: &str) {
	let trimmed = fragment.trim();
	if !trimmed.is_empty() {
		tokens.push(trimmed.to_string());
	}
}

/// Converts an infix token sequence to postfix (RPN) with the shunting-yard
/// algorithm.
///
/// Operand tokens go straight to the output. `(` is pushed onto the operator
/// stack; `)` pops into the output until the matching `(`, which is
/// discarded. An operator pops the stack while the top is an operator and
/// either the incoming operator is left-associative with precedence no higher
/// than the top's, or right-associative with strictly lower precedence. The
/// incoming operator's precedence and associativity are re-read on every
/// iteration of the popping loop. Remaining operators drain LIFO at the end.
///
/// No parenthesis-balance validation is performed: a `)` with no matching `(`
/// pops whatever the stack holds, and a stray `(` drains into the output.
pub fn convert_infix_to_rpn(tokens: &[String]) -> Vec<String> {
	let mut output: Vec<String> = Vec::new();
	let mut stack: Vec<String> = Vec::new();

	for token in tokens {
		if let Some(current) = Operator::from_symbol(token) {
			loop {
				let pop_top = match stack.last().and_then(|top| Operator::from_symbol(top)) {
					Some(top) => match current.associativity() {
						Associativity::Left => current.compare_precedence(&top) <= 0,
						Associativity::Right => current.compare_precedence(&top) < 0,
					},
					// Top is a parenthesis or the stack is empty
					None => false,
				};
				if !pop_top {
					break;
				}
				if let Some(popped) = stack.pop() {
					output.push(popped);
				}
			}
			stack.push(token.clone());
		} else if token == LEFT_PARENTHESIS {
			stack.push(token.clone());
		} else if token == RIGHT_PARENTHESIS {
			while stack.last().is_some_and(|top| top != LEFT_PARENTHESIS) {
				if let Some(popped) = stack.pop() {
					output.push(popped);
				}
			}
			// Discard the matching "(" without emitting it
			stack.pop();
		} else {
			output.push(token.clone());
		}
	}

	while let Some(popped) = stack.pop() {
		output.push(popped);
	}

	output
}
