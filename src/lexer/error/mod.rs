mod fmt;


/// The kind of lexical error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
	/// A character outside the alphabet.
	SymbolNotInAlphabet(u8),
	/// No token can be formed from the token boundary. Holds the pending input up to and
	/// including the rejected character.
	Syntax(Box<[u8]>),
}


/// A lexical error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
	pub error: ErrorKind,
	/// Byte offset in the input.
	pub offset: usize,
}


impl std::error::Error for Error {}


impl Error {
	pub fn not_in_alphabet(symbol: u8, offset: usize) -> Self {
		Self { error: ErrorKind::SymbolNotInAlphabet(symbol), offset }
	}

	pub fn syntax(pending: &[u8], offset: usize) -> Self {
		Self { error: ErrorKind::Syntax(pending.into()), offset }
	}
}
