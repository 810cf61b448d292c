//! The calculator token grammar: parentheses, arithmetic, bitwise and shift operators, and
//! multi-digit numbers.

#[cfg(test)]
mod tests;

use crate::grammar::Grammar;


/// The default token delimiter for calculator input.
pub const DELIMITER: u8 = b' ';


pub const ALPHABET: &[u8] = b"*/+-0123456789()^|&!<>";


#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CalcState {
	Start,
	LParen,
	RParen,
	Mul,
	Div,
	Add,
	Sub,
	Num,
	Xor,
	Or,
	And,
	Not,
	Lt,
	Gt,
	LShift,
	RShift,
}


/// Single character tokens, reachable straight from the start state.
const OPERATORS: &[(u8, CalcState, &str)] = &[
	(b'(', CalcState::LParen, "LPAREN"),
	(b')', CalcState::RParen, "RPAREN"),
	(b'*', CalcState::Mul, "MUL"),
	(b'/', CalcState::Div, "DIV"),
	(b'+', CalcState::Add, "ADD"),
	(b'-', CalcState::Sub, "SUB"),
	(b'^', CalcState::Xor, "XOR"),
	(b'|', CalcState::Or, "OR"),
	(b'&', CalcState::And, "AND"),
	(b'!', CalcState::Not, "NOT"),
	(b'<', CalcState::Lt, "LESS_THAN"),
	(b'>', CalcState::Gt, "GREATER_THAN"),
];


pub fn grammar() -> Grammar<CalcState> {
	let grammar = OPERATORS
		.iter()
		.fold(
			Grammar::new(CalcState::Start).alphabet(ALPHABET.iter().copied()),
			|grammar, &(symbol, state, label)| grammar
				.accept(state, label)
				.transition(CalcState::Start, symbol, state)
		);

	grammar
		.accept(CalcState::Num, "NUM")
		.accept(CalcState::LShift, "LEFT_SHIFT")
		.accept(CalcState::RShift, "RIGHT_SHIFT")
		.transitions(CalcState::Start, b'0' ..= b'9', CalcState::Num)
		.transitions(CalcState::Num, b'0' ..= b'9', CalcState::Num)
		.transition(CalcState::Lt, b'<', CalcState::LShift)
		.transition(CalcState::Gt, b'>', CalcState::RShift)
}
