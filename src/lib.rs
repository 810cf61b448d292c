//! A deterministic finite automaton engine, and a maximal-munch lexer driven by it.
//!
//! Grammars are plain values: an alphabet, a start state, the accepting states with their
//! token labels, and a sparse transition table. See [`calc`] for an example.

pub mod automaton;
pub mod calc;
pub mod grammar;
pub mod lexer;
#[cfg(test)]
mod tests;

pub use automaton::Automaton;
pub use grammar::{Alphabet, Grammar, State};
pub use lexer::{Lexer, Token};
