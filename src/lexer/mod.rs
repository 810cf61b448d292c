mod cursor;
mod error;
mod token;

use std::sync::Arc;

use crate::{
	automaton::{self, Automaton},
	grammar::State,
};
pub(crate) use cursor::{Checkpoint, Cursor};
pub use error::{Error, ErrorKind};
pub use token::{Token, EOF};


/// A maximal-munch lexer driven by an automaton.
///
/// Tokens are delimited either by the delimiter symbol, which is discarded, or by the
/// automaton getting stuck, in which case the lexer retreats to the last accepting
/// position and starts the next token from there.
///
/// `tokenize` fills the token sequence, which is then consumed with `next_token` and
/// `peek`.
#[derive(Debug)]
pub struct Lexer<S> {
	automaton: Automaton<S>,
	delimiter: u8,
	tokens: Vec<Token>,
	/// Index of the next token to be consumed.
	position: usize,
	/// Length of the last tokenized input, where EOF is placed.
	input_len: usize,
}


impl<S: State> Lexer<S> {
	pub fn new(automaton: Automaton<S>, delimiter: u8) -> Self {
		Self {
			automaton,
			delimiter,
			tokens: Vec::new(),
			position: 0,
			input_len: 0,
		}
	}


	/// Tokenize the input, replacing any previous tokens.
	/// On error, the tokens produced before the error remain available.
	pub fn tokenize<I>(&mut self, input: I) -> Result<(), Error>
	where
		I: AsRef<[u8]>,
	{
		let input = input.as_ref();

		self.tokens.clear();
		self.position = 0;
		self.input_len = input.len();

		let result = self.lex(Cursor::from(input));

		if let Err(error) = &result {
			log::debug!("tokenization stopped after {} tokens: {}", self.tokens.len(), error);
		}

		result
	}


	fn lex(&mut self, mut cursor: Cursor) -> Result<(), Error> {
		self.automaton.reset();

		let mut start = cursor.checkpoint();
		// Where and how the current token could end, if the automaton was stuck.
		let mut last_accept: Option<(Checkpoint, Arc<str>)> = None;

		while let Some(symbol) = cursor.peek() {
			if symbol == self.delimiter {
				if let Some(label) = self.automaton.label().cloned() {
					self.emit(label, start, cursor.since(start));
				}

				cursor.step();
				self.automaton.reset();
				start = cursor.checkpoint();
				last_accept = None;
				continue;
			}

			match self.automaton.step(symbol) {
				Ok(accepting) => {
					cursor.step();

					if accepting {
						last_accept = self
							.automaton
							.label()
							.map(|label| (cursor.checkpoint(), label.clone()));
					}
				}

				Err(automaton::Error::SymbolNotInAlphabet(symbol)) => {
					return Err(Error::not_in_alphabet(symbol, cursor.offset()));
				}

				Err(automaton::Error::NoTransition { from, .. }) => {
					let (end, label) = last_accept
						.take()
						.ok_or_else(|| Error::syntax(cursor.since_inclusive(start), start.offset()))?;

					log::debug!(
						"stuck at {:?} on column {}, retreating to column {}",
						from,
						cursor.offset() + 1,
						end.offset() + 1,
					);

					// The symbol is not consumed, and will be retried from the start state.
					cursor.rewind(end);
					self.emit(label, start, cursor.since(start));
					self.automaton.reset();
					start = end;
				}
			}
		}

		if let Some(label) = self.automaton.label().cloned() {
			self.emit(label, start, cursor.since(start));
		}

		Ok(())
	}


	fn emit(&mut self, label: Arc<str>, start: Checkpoint, lexeme: &[u8]) {
		let token = Token::new(label, lexeme, start.offset());
		log::debug!("token {}", token);
		self.tokens.push(token);
	}


	/// Consume the next token. At the end of the sequence, yields EOF without advancing.
	pub fn next_token(&mut self) -> Token {
		let token = self.peek();

		if !token.is_eof() {
			self.position += 1;
		}

		token
	}


	/// The token that `next_token` would return.
	pub fn peek(&self) -> Token {
		self.peek_nth(1)
	}


	/// Look `n` tokens ahead without consuming anything: `peek_nth(1)` is the next token.
	/// `peek_nth(0)` is the most recently consumed token, or EOF if nothing was consumed.
	pub fn peek_nth(&self, n: usize) -> Token {
		self.position
			.checked_add(n)
			.and_then(|index| index.checked_sub(1))
			.and_then(|index| self.tokens.get(index))
			.cloned()
			.unwrap_or_else(|| Token::eof(self.input_len))
	}


	/// Whether all tokens have been consumed.
	pub fn is_done(&self) -> bool {
		self.position >= self.tokens.len()
	}


	/// All produced tokens, consumed or not.
	pub fn tokens(&self) -> &[Token] {
		&self.tokens
	}


	pub fn delimiter(&self) -> u8 {
		self.delimiter
	}


	pub fn automaton(&self) -> &Automaton<S> {
		&self.automaton
	}


	/// Give the automaton back, e.g. to drive another lexer.
	pub fn into_automaton(self) -> Automaton<S> {
		self.automaton
	}
}


/// Consumes the remaining tokens, stopping before EOF.
impl<S: State> Iterator for Lexer<S> {
	type Item = Token;

	fn next(&mut self) -> Option<Token> {
		if self.is_done() {
			None
		} else {
			Some(self.next_token())
		}
	}
}
