/// A saved cursor position, which may be restored later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Checkpoint(usize);


impl Checkpoint {
	pub fn offset(self) -> usize {
		self.0
	}
}


/// A cursor for the input bytes.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
	input: &'a [u8],
	offset: usize,
}


impl<'a> Cursor<'a> {
	pub fn offset(&self) -> usize {
		self.offset
	}


	pub fn is_eof(&self) -> bool {
		self.offset == self.input.len()
	}


	pub fn peek(&self) -> Option<u8> {
		self.input.get(self.offset).copied()
	}


	pub fn step(&mut self) {
		if self.is_eof() {
			return;
		}

		self.offset += 1;
	}


	pub fn checkpoint(&self) -> Checkpoint {
		Checkpoint(self.offset)
	}


	/// Go back (or forward) to a saved position.
	pub fn rewind(&mut self, checkpoint: Checkpoint) {
		debug_assert!(checkpoint.0 <= self.input.len());
		self.offset = checkpoint.0;
	}


	/// The input between a checkpoint and the current position.
	pub fn since(&self, checkpoint: Checkpoint) -> &'a [u8] {
		&self.input[checkpoint.0 .. self.offset]
	}


	/// The input between a checkpoint and the current position, including the current
	/// byte if any.
	pub fn since_inclusive(&self, checkpoint: Checkpoint) -> &'a [u8] {
		let end = (self.offset + 1).min(self.input.len());
		&self.input[checkpoint.0 .. end]
	}
}


impl<'a> From<&'a [u8]> for Cursor<'a> {
	fn from(input: &'a [u8]) -> Self {
		Self { input, offset: 0 }
	}
}
