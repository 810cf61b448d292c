use std::fmt::{self, Display};

use bstr::ByteSlice;

use super::{Error, ErrorKind};


impl Display for ErrorKind {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::SymbolNotInAlphabet(symbol) => write!(
				f,
				"the character '{}' is not in the alphabet",
				(*symbol as char).escape_debug()
			),

			Self::Syntax(pending) => write!(f, "can't read input: '{}'", pending.as_bstr()),
		}
	}
}


impl Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "column {} - {}.", self.offset + 1, self.error)
	}
}
