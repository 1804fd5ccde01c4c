//! Provides the configuration front door chaining every stage of the
//! pipeline: parsing, construction, determinization and minimization.
//!
//! # Example
//!
//! ```
//! use mygrep_compiler::Compiler;
//! use mygrep_runtime::{accept, Alphabet};
//!
//! let compiler = Compiler::new()
//!     .with_alphabet(Alphabet::ascii_letters())
//!     .with_substring_search(true);
//!
//! let dfa = compiler.compile("a b @").unwrap();
//!
//! assert!(accept(&dfa, "xxabyy"));
//! assert!(!accept(&dfa, "xxbayy"));
//! ```

use mygrep_runtime::{Alphabet, Dfa};

use super::ast::Ast;
use super::determinize::determinize;
use super::minimize::minimize;
use super::occurrence::occurrence_automaton;
use super::parser::{parse, ParseErr};
use super::thompson::thompson;

/// Compilation settings shared by every pattern compiled with them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compiler {
    alphabet: Alphabet,
    minimize: bool,
    substring_search: bool,
}

impl Default for Compiler {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::default(),
            minimize: true,
            substring_search: false,
        }
    }
}

impl Compiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the alphabet literals are checked against and automata are made
    /// total over.
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    pub fn with_minimization(mut self, minimize: bool) -> Self {
        self.minimize = minimize;
        self
    }

    /// When enabled, a line is accepted if any part of it matches the
    /// pattern, rather than the whole line.
    pub fn with_substring_search(mut self, substring_search: bool) -> Self {
        self.substring_search = substring_search;
        self
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Parses `pattern` into the tree the automaton is built from, including
    /// the surrounding wildcards in substring search mode.
    pub fn parse(&self, pattern: &str) -> Result<Ast, ParseErr> {
        let input = pattern.chars().enumerate().collect::<Vec<(usize, char)>>();
        let ast = parse(&input, &self.alphabet)?;

        if self.substring_search {
            Ok(ast.surrounded_by_any(&self.alphabet))
        } else {
            Ok(ast)
        }
    }

    /// Compiles a postfix pattern into a total automaton.
    pub fn compile(&self, pattern: &str) -> Result<Dfa, ParseErr> {
        let ast = self.parse(pattern)?;
        let nfa = thompson(&ast);
        let dfa = determinize(&nfa, &self.alphabet);

        let dfa = if self.minimize { minimize(&dfa) } else { dfa };
        log::debug!(
            "compiled {:?} into {} states",
            pattern,
            dfa.state_count()
        );
        Ok(dfa)
    }

    /// Compiles a plain literal, read without any operators, into an
    /// automaton accepting every line containing it.
    pub fn compile_literal(&self, literal: &str) -> Result<Dfa, ParseErr> {
        let dfa = occurrence_automaton(literal, &self.alphabet)?;

        if self.minimize {
            Ok(minimize(&dfa))
        } else {
            Ok(dfa)
        }
    }
}

/// Compiles a postfix pattern with the default configuration: printable
/// ASCII, minimized, matching whole lines.
pub fn compile(pattern: &str) -> Result<Dfa, ParseErr> {
    Compiler::default().compile(pattern)
}
