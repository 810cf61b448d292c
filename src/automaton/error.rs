use std::fmt::{self, Debug, Display};


/// A failed automaton step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error<S> {
	/// The symbol is not part of the alphabet.
	SymbolNotInAlphabet(u8),
	/// There is no configured transition for the current state and symbol.
	NoTransition { from: S, symbol: u8 },
}


impl<S: Debug> Display for Error<S> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::SymbolNotInAlphabet(symbol) => write!(
				f,
				"the character '{}' is not in the alphabet",
				(*symbol as char).escape_debug()
			),

			Self::NoTransition { from, symbol } => write!(
				f,
				"no transition from state {:?} given '{}'",
				from,
				(*symbol as char).escape_debug()
			),
		}
	}
}


impl<S: Debug> std::error::Error for Error<S> {}
