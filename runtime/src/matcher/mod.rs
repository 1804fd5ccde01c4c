//! Evaluators that drive an automaton over an input one symbol at a time.

use crate::dfa::Dfa;
use crate::nfa::Nfa;
use crate::state::{StateId, StateSet};

pub trait PatternEvaluatorMut: Sized {
    /// The input iterable type to be compared.
    type Item;

    fn initial_state(mut self) -> Self {
        self.initial_state_mut();
        self
    }

    /// Returns the evaluator to its initial state.
    fn initial_state_mut(&mut self);

    /// Returns a boolean signifying if the match is in a final state.
    fn is_in_accept_state(&self) -> bool;

    /// Attempts to advance to the next state, returning a boolean signifying
    /// whether the evaluator can still reach a final state.
    fn advance_mut(&mut self, next: &Self::Item) -> bool;

    /// Feeds every item of `iter` to the evaluator, then reports whether the
    /// whole input was accepted.
    fn matches<I>(&mut self, iter: I) -> bool
    where
        I: IntoIterator<Item = Self::Item>,
    {
        for item in iter {
            if !self.advance_mut(&item) {
                return false;
            }
        }

        self.is_in_accept_state()
    }
}

/// Walks a [Dfa]'s transition function.
///
/// A symbol without a transition, which can only be a symbol outside the
/// automaton's alphabet when the automaton is total, moves the evaluator into
/// a virtual reject state it never leaves.
///
/// # Examples
///
/// ```
/// use mygrep_runtime::matcher::*;
/// use mygrep_runtime::{Alphabet, Dfa};
///
/// // a single looping accepting state over {a}.
/// let mut dfa = Dfa::new(Alphabet::new(['a']));
/// let state = dfa.add_state();
/// dfa.add_final_state(state);
/// dfa.add_transition(state, 'a', state);
///
/// let mut evaluator = DfaEvaluator::new(&dfa).initial_state();
/// assert!(evaluator.matches("aaa".chars()));
///
/// evaluator.initial_state_mut();
/// assert!(!evaluator.matches("aba".chars()));
/// ```
#[derive(Debug, Clone)]
pub struct DfaEvaluator<'a> {
    dfa: &'a Dfa,
    current: Option<StateId>,
}

impl<'a> DfaEvaluator<'a> {
    #[must_use]
    pub fn new(dfa: &'a Dfa) -> Self {
        Self {
            dfa,
            current: Some(dfa.initial_state()),
        }
    }

    /// The current state, or `None` once rejected.
    pub fn current_state(&self) -> Option<StateId> {
        self.current
    }
}

impl<'a> PatternEvaluatorMut for DfaEvaluator<'a> {
    type Item = char;

    fn initial_state_mut(&mut self) {
        self.current = Some(self.dfa.initial_state());
    }

    fn is_in_accept_state(&self) -> bool {
        self.current
            .map(|state| self.dfa.is_final(state))
            .unwrap_or(false)
    }

    fn advance_mut(&mut self, next: &char) -> bool {
        self.current = self
            .current
            .and_then(|state| self.dfa.transition(state, *next));
        self.current.is_some()
    }
}

/// Simulates an [Nfa] directly by tracking the epsilon-closed set of active
/// states.
///
/// This is the reference evaluator for the unminimized pipeline. It is
/// slower than a [DfaEvaluator] but needs no determinization.
///
/// # Examples
///
/// ```
/// use mygrep_runtime::matcher::*;
/// use mygrep_runtime::{Nfa, StateSet};
///
/// // 0 --'a'--> 1 with both 0 and 1 initial: accepts "" and "a".
/// let mut nfa = Nfa::new(StateSet::from_iter([0, 1]), StateSet::singleton(1));
/// nfa.add_transition(0, 'a'.into(), 1);
///
/// let mut evaluator = NfaEvaluator::new(&nfa).initial_state();
/// assert!(evaluator.matches("".chars()));
///
/// evaluator.initial_state_mut();
/// assert!(evaluator.matches("a".chars()));
///
/// evaluator.initial_state_mut();
/// assert!(!evaluator.matches("aa".chars()));
/// ```
#[derive(Debug, Clone)]
pub struct NfaEvaluator<'a> {
    nfa: &'a Nfa,
    active: StateSet,
}

impl<'a> NfaEvaluator<'a> {
    #[must_use]
    pub fn new(nfa: &'a Nfa) -> Self {
        Self {
            nfa,
            active: nfa.epsilon_closure(nfa.initial_states()),
        }
    }

    pub fn active_states(&self) -> &StateSet {
        &self.active
    }
}

impl<'a> PatternEvaluatorMut for NfaEvaluator<'a> {
    type Item = char;

    fn initial_state_mut(&mut self) {
        self.active = self.nfa.epsilon_closure(self.nfa.initial_states());
    }

    fn is_in_accept_state(&self) -> bool {
        self.nfa.is_accepting(&self.active)
    }

    fn advance_mut(&mut self, next: &char) -> bool {
        self.active = self.nfa.step(&self.active, *next);
        !self.active.is_empty()
    }
}
