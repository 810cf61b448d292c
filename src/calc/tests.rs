use super::*;
use crate::automaton::Automaton;

use assert_matches::assert_matches;


#[test]
fn test_every_state_but_start_accepts() {
	let grammar = grammar();

	assert_eq!(grammar.start(), CalcState::Start);
	assert_eq!(grammar.labels().len(), 15);
	assert_eq!(grammar.label(CalcState::Start), None);
	assert_eq!(grammar.label(CalcState::Lt).map(|label| &**label), Some("LESS_THAN"));
	assert_eq!(grammar.label(CalcState::RShift).map(|label| &**label), Some("RIGHT_SHIFT"));
}


#[test]
fn test_alphabet() {
	let grammar = grammar();
	let alphabet = grammar.alphabet_set();

	assert_eq!(alphabet.len(), ALPHABET.len());
	assert!(alphabet.contains(b'9'));
	assert!(!alphabet.contains(DELIMITER));
	assert!(!alphabet.contains(b'%'));
}


#[test]
fn test_whole_tokens() {
	let mut automaton = Automaton::new(grammar());

	let cases: &[(&[u8], &str)] = &[
		(b"(", "LPAREN"),
		(b"-", "SUB"),
		(b"!", "NOT"),
		(b"0", "NUM"),
		(b"9", "NUM"),
		(b"1234567890", "NUM"),
		(b"<", "LESS_THAN"),
		(b"<<", "LEFT_SHIFT"),
		(b">>", "RIGHT_SHIFT"),
	];

	for &(input, label) in cases {
		assert_matches!(automaton.run(input), Ok(true));
		assert_eq!(automaton.label().map(|label| &**label), Some(label));
	}
}


#[test]
fn test_operators_do_not_chain() {
	let mut automaton = Automaton::new(grammar());

	assert_matches!(automaton.run(b"<<<"), Err(_));
	assert_matches!(automaton.run(b"1+"), Err(_));
	assert_matches!(automaton.run(b"()"), Err(_));
	assert_matches!(automaton.run(b"<>"), Err(_));
}
