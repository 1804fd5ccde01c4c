//! Provides for the parsing and compilation of a postfix regular expression
//! into its corresponding minimal deterministic automaton.
//!
//! # Example
//!
//! ```rust
//! // Parsing and compilation of a pattern into a runnable automaton is
//! // accomplished by a single function exposed in the `mygrep_compiler` crate.
//! use mygrep_compiler::compile;
//!
//! // Evaluating a given line against an automaton is accomplished via a
//! // single exposed function in the `mygrep_runtime` crate.
//! use mygrep_runtime::accept;
//!
//! // Patterns are written in postfix notation, with `@` standing for
//! // concatenation. This one matches `(ab)*` in infix notation.
//! let pattern = "a b @ *";
//!
//! let dfa = compile(pattern).expect("failed to parse or compile");
//!
//! // A line is accepted only when the automaton matches it in its entirety.
//! assert!(accept(&dfa, "abab"));
//! assert!(!accept(&dfa, "aba"));
//! ```

pub mod ast;
pub mod compiler;
pub mod determinize;
pub mod minimize;
pub mod occurrence;
pub mod parser;
pub mod thompson;

pub use compiler::{compile, Compiler};
pub use parser::{parse, ParseErr, ParseErrKind};
