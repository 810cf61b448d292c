use std::fmt::{self, Display};

use termion::{color as term, style};
pub use termion::color::{Red, Yellow};


/// Diagnostics go to stderr, so escape codes are only emitted when it is a terminal.
fn enabled() -> bool {
	termion::is_tty(&std::io::stderr())
}


/// Paint the foreground with a given color when formatting the value.
pub struct Fg<C, T>(pub C, pub T);


impl<C, T> Display for Fg<C, T>
where
	C: term::Color + Copy,
	T: Display,
{
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		if !enabled() {
			return self.1.fmt(f);
		}

		write!(f, "{}", term::Fg(self.0))?;
		self.1.fmt(f)?;
		write!(f, "{}", term::Fg(term::Reset))
	}
}


/// Use a bold style when formatting the value.
pub struct Bold<T>(pub T);


impl<T> Display for Bold<T>
where
	T: Display,
{
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		if !enabled() {
			return self.0.fmt(f);
		}

		write!(f, "{}{}{}", style::Bold, self.0, style::Reset)
	}
}
