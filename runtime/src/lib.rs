//! Provides the automaton types shared by every stage of the mygrep pipeline
//! and the matcher that evaluates input lines against a compiled [Dfa].
//!
//! # Example
//!
//! ```rust
//! use mygrep_runtime::{accept, Alphabet, Dfa};
//!
//! // A two state automaton over {a, b} accepting any line ending in `b`.
//! let mut dfa = Dfa::new(Alphabet::new("ab".chars()));
//! let (other, ends_in_b) = (dfa.add_state(), dfa.add_state());
//! dfa.add_final_state(ends_in_b);
//! for state in [other, ends_in_b] {
//!     dfa.add_transition(state, 'a', other);
//!     dfa.add_transition(state, 'b', ends_in_b);
//! }
//!
//! assert!(accept(&dfa, "aab"));
//! assert!(!accept(&dfa, "aba"));
//!
//! // symbols outside the alphabet are rejected rather than raising an error.
//! assert!(!accept(&dfa, "acb"));
//! ```

mod alphabet;
mod dfa;
pub mod matcher;
mod nfa;
mod state;

pub use alphabet::{Alphabet, Label, EPSILON};
pub use dfa::Dfa;
pub use nfa::Nfa;
pub use state::{StateId, StateSet};

use matcher::{DfaEvaluator, PatternEvaluatorMut};

/// Runs `line` through the automaton's transition function from its initial
/// state, returning `true` if the entire line is accepted.
///
/// A symbol outside the alphabet routes to rejection.
pub fn accept(dfa: &Dfa, line: &str) -> bool {
    let accepted = DfaEvaluator::new(dfa).matches(line.chars());
    log::trace!("line {:?} accepted: {}", line, accepted);
    accepted
}
