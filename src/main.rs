mod args;
mod term;

use std::io::{self, BufRead};

use bstr::ByteSlice;

use log::LevelFilter;

use munch::{calc, lexer, Automaton, Lexer};
use term::color;

use args::{Args, Command, ErrorPolicy};


fn main() -> ! {
	let command = match args::parse(std::env::args_os()) {
		Ok(command) => command,
		Err(error) => {
			eprint!("{}", error);
			std::process::exit(1)
		}
	};

	let result = match command {
		Command::Run(args) => run(args),
		Command::Help(msg) | Command::Version(msg) => {
			println!("{}", msg);
			std::process::exit(0)
		},
	};

	let exit_code = match result {
		Ok(code) => code,
		Err(error) => {
			eprintln!("{}: {}", color::Fg(color::Red, "Error"), error);
			1
		}
	};

	std::process::exit(exit_code)
}


fn init_logger(verbosity: u64) {
	let mut builder = env_logger::Builder::from_env(
		env_logger::Env::default().default_filter_or("warn")
	);

	match verbosity {
		0 => (),
		1 => { builder.filter_level(LevelFilter::Debug); },
		_ => { builder.filter_level(LevelFilter::Trace); },
	}

	builder.init();
}


fn run(args: Args) -> io::Result<i32> {
	init_logger(args.verbosity);

	let line = read_line(io::stdin().lock())?;

	log::debug!("tokenizing {:?}", line.as_bstr());

	let mut lexer = Lexer::new(Automaton::new(calc::grammar()), args.delimiter);

	if let Err(error) = lexer.tokenize(&line) {
		report(&error, &line);

		if args.on_error == ErrorPolicy::Abort {
			return Ok(1);
		}
	}

	for token in lexer {
		println!("{}", token);
	}

	Ok(0)
}


/// Read a single line as raw bytes, without the line terminator. Bytes outside the
/// alphabet are left for the lexer to reject.
fn read_line<R: BufRead>(mut reader: R) -> io::Result<Vec<u8>> {
	let mut line = Vec::new();
	reader.read_until(b'\n', &mut line)?;

	while line.last().map_or(false, |&byte| byte == b'\n' || byte == b'\r') {
		line.pop();
	}

	Ok(line)
}


/// Print a lexical error, pointing at the offending column.
fn report(error: &lexer::Error, line: &[u8]) {
	eprintln!("{}: {}", color::Fg(color::Red, "Error"), error);
	eprintln!("  {}", color::Bold(line.as_bstr()));
	eprintln!(
		"  {}{}",
		caret_padding(line, error.offset),
		color::Fg(color::Yellow, "^")
	);
}


/// Whitespace lining up with the given byte offset: one space per character, keeping tabs
/// so the caret stays aligned with the echoed line.
fn caret_padding(line: &[u8], offset: usize) -> String {
	line[.. offset.min(line.len())]
		.chars()
		.map(|c| if c == '\t' { '\t' } else { ' ' })
		.collect()
}
