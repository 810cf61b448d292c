use std::{ffi::OsString, str::FromStr};

use clap::{clap_app, crate_version, crate_description, Arg};


#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
	Help(Box<str>),
	Version(Box<str>),
	Run(Args)
}


/// What to do when the input can't be tokenized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorPolicy {
	/// Report the error, then print the tokens read before it.
	Report,
	/// Report the error and exit with failure, printing no tokens.
	Abort,
}


impl FromStr for ErrorPolicy {
	type Err = String;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value {
			"report" => Ok(Self::Report),
			"abort" => Ok(Self::Abort),
			_ => Err(format!("invalid error policy: {}", value)),
		}
	}
}


#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Args {
	/// The symbol that separates tokens.
	pub delimiter: u8,
	/// What to do on lexical errors.
	pub on_error: ErrorPolicy,
	/// Log verbosity, from the number of -v flags.
	pub verbosity: u64,
}


fn validate_delimiter(value: String) -> Result<(), String> {
	if value.len() == 1 {
		Ok(())
	} else {
		Err(format!("the delimiter must be a single byte, got {:?}", value))
	}
}


pub fn parse<A, T>(args: A) -> clap::Result<Command>
where
	A: IntoIterator<Item = T>,
	T: Into<OsString> + Clone
{
	let app = clap_app!(
		Munch =>
			(version: crate_version!())
			(about: crate_description!())
			(@arg verbose: -v ... "Log more (-v for debug, -vv for trace)")
	)
		.arg(
			Arg::with_name("delimiter")
				.short("d")
				.long("delimiter")
				.value_name("CHAR")
				.help("The token delimiter")
				.takes_value(true)
				.default_value(" ")
				.validator(validate_delimiter)
		)
		.arg(
			Arg::with_name("on-error")
				.long("on-error")
				.value_name("POLICY")
				.help("Whether to report lexical errors and print the tokens read so far, or abort")
				.takes_value(true)
				.possible_values(&["report", "abort"])
				.default_value("report")
		);

	match app.get_matches_from_safe(args) {
		Ok(matches) => {
			let delimiter = matches
				.value_of("delimiter")
				.and_then(|value| value.bytes().next())
				.unwrap_or(b' ');

			let on_error = matches
				.value_of("on-error")
				.unwrap_or("report")
				.parse()
				.map_err(|message: String| clap::Error::with_description(
					&message,
					clap::ErrorKind::InvalidValue
				))?;

			Ok(
				Command::Run(
					Args {
						delimiter,
						on_error,
						verbosity: matches.occurrences_of("verbose"),
					}
				)
			)
		},

		Err(error) => match error.kind {
			clap::ErrorKind::HelpDisplayed => Ok(
				Command::Help(error.message.into_boxed_str())
			),
			clap::ErrorKind::VersionDisplayed => Ok(
				Command::Version(error.message.into_boxed_str())
			),
			_ => Err(error)
		}
	}
}
