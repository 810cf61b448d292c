mod error;

use std::{collections::HashMap, sync::Arc};

use crate::grammar::{Grammar, State};
pub use error::Error;


/// A deterministic finite automaton over single byte symbols.
///
/// The configuration is shared and immutable. The only thing that changes while stepping
/// is the current state. Cloning yields an independent automaton over the same table.
#[derive(Debug, Clone)]
pub struct Automaton<S> {
	grammar: Arc<Grammar<S>>,
	current: S,
}


impl<S: State> Automaton<S> {
	pub fn new(grammar: Grammar<S>) -> Self {
		Self::from_shared(Arc::new(grammar))
	}


	/// Build an automaton over a configuration that may be shared with other automata.
	pub fn from_shared(grammar: Arc<Grammar<S>>) -> Self {
		let current = grammar.start();
		Self { grammar, current }
	}


	/// Go back to the start state.
	pub fn reset(&mut self) {
		self.current = self.grammar.start();
	}


	/// Feed a single symbol, returning whether the new state is accepting.
	/// On error, the current state is left untouched.
	pub fn step(&mut self, symbol: u8) -> Result<bool, Error<S>> {
		if !self.grammar.alphabet_set().contains(symbol) {
			return Err(Error::SymbolNotInAlphabet(symbol));
		}

		let next = self
			.grammar
			.target(self.current, symbol)
			.ok_or(Error::NoTransition { from: self.current, symbol })?;

		log::trace!(
			"{:?} --{}--> {:?}",
			self.current,
			(symbol as char).escape_debug(),
			next
		);

		self.current = next;

		Ok(self.is_accepting())
	}


	/// Run a whole input from the start state, returning whether it is accepted.
	/// The first failing step aborts the run.
	pub fn run<I>(&mut self, input: I) -> Result<bool, Error<S>>
	where
		I: AsRef<[u8]>,
	{
		self.reset();

		for &symbol in input.as_ref() {
			self.step(symbol)?;
		}

		Ok(self.is_accepting())
	}


	pub fn is_accepting(&self) -> bool {
		self.grammar.labels().contains_key(&self.current)
	}


	/// The label of the current state, if accepting.
	pub fn label(&self) -> Option<&Arc<str>> {
		self.grammar.label(self.current)
	}


	pub fn start(&self) -> S {
		self.grammar.start()
	}


	pub fn current(&self) -> S {
		self.current
	}


	/// The accepting states and their labels.
	pub fn labels(&self) -> &HashMap<S, Arc<str>> {
		self.grammar.labels()
	}


	pub fn grammar(&self) -> &Arc<Grammar<S>> {
		&self.grammar
	}
}
