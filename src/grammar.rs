use std::{
	collections::HashMap,
	fmt::Debug,
	hash::Hash,
	iter::FromIterator,
	sync::Arc,
};


/// Requirements for automaton states. Any fieldless enum deriving the usual traits will
/// do.
pub trait State: Copy + Eq + Ord + Hash + Debug {}


impl<T> State for T where T: Copy + Eq + Ord + Hash + Debug {}


/// A set of single byte symbols.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Alphabet([u64; 4]);


impl Alphabet {
	pub fn new() -> Self {
		Self::default()
	}


	pub fn insert(&mut self, symbol: u8) {
		self.0[(symbol >> 6) as usize] |= 1u64 << (symbol & 63);
	}


	pub fn contains(&self, symbol: u8) -> bool {
		self.0[(symbol >> 6) as usize] & (1u64 << (symbol & 63)) != 0
	}


	pub fn len(&self) -> usize {
		self.0.iter().map(|word| word.count_ones() as usize).sum()
	}


	pub fn is_empty(&self) -> bool {
		self.0.iter().all(|&word| word == 0)
	}


	pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
		(0 ..= u8::MAX).filter(move |&symbol| self.contains(symbol))
	}
}


impl FromIterator<u8> for Alphabet {
	fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
		let mut alphabet = Self::new();
		alphabet.extend(iter);
		alphabet
	}
}


impl Extend<u8> for Alphabet {
	fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
		for symbol in iter {
			self.insert(symbol);
		}
	}
}


/// The full configuration of an automaton: alphabet, start state, accepting states with
/// their token labels, and the sparse transition table.
///
/// Grammars are built by chaining the methods below, and become immutable once handed to
/// an automaton.
#[derive(Debug, Clone)]
pub struct Grammar<S> {
	alphabet: Alphabet,
	start: S,
	labels: HashMap<S, Arc<str>>,
	table: HashMap<(S, u8), S>,
}


impl<S: State> Grammar<S> {
	pub fn new(start: S) -> Self {
		Self {
			alphabet: Alphabet::new(),
			start,
			labels: HashMap::new(),
			table: HashMap::new(),
		}
	}


	/// Add symbols to the alphabet.
	pub fn alphabet<I>(mut self, symbols: I) -> Self
	where
		I: IntoIterator<Item = u8>,
	{
		self.alphabet.extend(symbols);
		self
	}


	/// Mark a state as accepting. A state has a single label, so declaring it again
	/// replaces the previous one.
	pub fn accept<L>(mut self, state: S, label: L) -> Self
	where
		L: Into<Arc<str>>,
	{
		self.labels.insert(state, label.into());
		self
	}


	/// Add a single transition. Replaces any previous transition for the same state and
	/// symbol.
	pub fn transition(mut self, from: S, symbol: u8, to: S) -> Self {
		self.table.insert((from, symbol), to);
		self
	}


	/// Add the same transition for every given symbol, e.g. a range of digits.
	pub fn transitions<I>(mut self, from: S, symbols: I, to: S) -> Self
	where
		I: IntoIterator<Item = u8>,
	{
		for symbol in symbols {
			self.table.insert((from, symbol), to);
		}
		self
	}


	pub fn start(&self) -> S {
		self.start
	}


	pub fn alphabet_set(&self) -> &Alphabet {
		&self.alphabet
	}


	/// The accepting states and their labels.
	pub fn labels(&self) -> &HashMap<S, Arc<str>> {
		&self.labels
	}


	pub fn label(&self, state: S) -> Option<&Arc<str>> {
		self.labels.get(&state)
	}


	pub fn target(&self, from: S, symbol: u8) -> Option<S> {
		self.table.get(&(from, symbol)).copied()
	}


	pub fn transition_count(&self) -> usize {
		self.table.len()
	}
}
