use std::{
	fmt::{self, Display},
	sync::Arc,
};

use bstr::{BStr, ByteSlice};


/// The label of the end of stream sentinel.
pub const EOF: &str = "EOF";


/// A labeled lexeme.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
	/// The name of the accepting state that produced the token.
	pub label: Arc<str>,
	/// The consumed input.
	pub lexeme: Box<[u8]>,
	/// Byte offset of the lexeme in the input.
	pub offset: usize,
}


impl Token {
	pub fn new<L>(label: L, lexeme: &[u8], offset: usize) -> Self
	where
		L: Into<Arc<str>>,
	{
		Self { label: label.into(), lexeme: lexeme.into(), offset }
	}


	/// The end of stream sentinel, with an empty lexeme.
	pub fn eof(offset: usize) -> Self {
		Self::new(EOF, b"", offset)
	}


	pub fn is_eof(&self) -> bool {
		&*self.label == EOF && self.lexeme.is_empty()
	}


	pub fn label(&self) -> &str {
		&self.label
	}


	pub fn lexeme(&self) -> &BStr {
		self.lexeme.as_bstr()
	}
}


/// Formats as `label, lexeme`.
impl Display for Token {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}, {}", self.label, self.lexeme())
	}
}
