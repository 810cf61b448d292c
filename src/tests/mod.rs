mod util;

use std::io;

use crate::{automaton::Automaton, calc, lexer::Lexer};


fn test_lines<F>(path: &str, check: F) -> io::Result<()>
where
	F: Fn(&Lexer<calc::CalcState>, bool) -> bool,
{
	let automaton = Automaton::new(calc::grammar());
	let mut lexer = Lexer::new(automaton, calc::DELIMITER);

	util::test_dir(
		path,
		|path, line_number, line| {
			let ok = match lexer.tokenize(line) {
				Ok(()) => true,
				Err(error) => {
					eprintln!("{}:{}: {}", path.display(), line_number, error);
					false
				}
			};

			if !check(&lexer, ok) {
				panic!("{}:{}: unexpected result for {:?}", path.display(), line_number, line);
			}
		}
	)
}


#[test]
fn test_positive() -> io::Result<()> {
	test_lines(
		"src/tests/data/positive",
		|lexer, ok| ok && lexer.tokens().iter().all(|token| !token.lexeme.is_empty()),
	)
}


#[test]
fn test_negative() -> io::Result<()> {
	test_lines("src/tests/data/negative", |_, ok| !ok)
}
