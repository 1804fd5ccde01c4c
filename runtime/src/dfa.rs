//! A deterministic finite automaton over a fixed [Alphabet].

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::fmt::Display;

use crate::alphabet::{Alphabet, Label};
use crate::nfa::Nfa;
use crate::state::{StateId, StateSet};

/// A deterministic automaton with a single initial state.
///
/// States are dense identifiers in `0..state_count()`. Once built a `Dfa` is
/// never mutated by the matching phase and holds no references to the
/// structures it was constructed from.
///
/// # Example
///
/// ```
/// use mygrep_runtime::{Alphabet, Dfa};
///
/// // accepts exactly "a" over {a, b}, with an explicit sink in state 2.
/// let mut dfa = Dfa::new(Alphabet::new("ab".chars()));
/// let (start, accept, sink) = (dfa.add_state(), dfa.add_state(), dfa.add_state());
/// dfa.add_final_state(accept);
/// dfa.add_transition(start, 'a', accept);
/// dfa.add_transition(start, 'b', sink);
/// for state in [accept, sink] {
///     dfa.add_transition(state, 'a', sink);
///     dfa.add_transition(state, 'b', sink);
/// }
///
/// assert!(dfa.is_total());
/// assert_eq!(Some(sink), dfa.sink());
/// assert!(mygrep_runtime::accept(&dfa, "a"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dfa {
    alphabet: Alphabet,
    initial: StateId,
    final_states: StateSet,
    transitions: Vec<BTreeMap<char, StateId>>,
}

impl Dfa {
    /// Instantiates an automaton with no states. The first state added becomes
    /// the initial state unless overridden by [Dfa::set_initial_state].
    #[must_use]
    pub fn new(alphabet: Alphabet) -> Self {
        Self {
            alphabet,
            initial: 0,
            final_states: StateSet::new(),
            transitions: vec![],
        }
    }

    /// Allocates a new state with no outgoing transitions.
    pub fn add_state(&mut self) -> StateId {
        let state = self.transitions.len();
        self.transitions.push(BTreeMap::new());
        state
    }

    pub fn set_initial_state(&mut self, state: StateId) {
        self.initial = state;
    }

    pub fn add_final_state(&mut self, state: StateId) {
        self.final_states.insert(state);
    }

    /// Records `src --symbol--> dest`, replacing any previous target.
    ///
    /// Symbols outside the alphabet are never matched, so they are not
    /// recorded.
    pub fn add_transition(&mut self, src: StateId, symbol: char, dest: StateId) {
        if !self.alphabet.contains(symbol) {
            return;
        }

        if let Some(row) = self.transitions.get_mut(src) {
            row.insert(symbol, dest);
        }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn initial_state(&self) -> StateId {
        self.initial
    }

    pub fn final_states(&self) -> &StateSet {
        &self.final_states
    }

    pub fn state_count(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_final(&self, state: StateId) -> bool {
        self.final_states.contains(state)
    }

    /// Returns the successor of `state` on `symbol`, if one is defined.
    #[inline]
    pub fn transition(&self, state: StateId, symbol: char) -> Option<StateId> {
        self.transitions
            .get(state)
            .and_then(|row| row.get(&symbol))
            .copied()
    }

    /// Iterates every `(src, symbol, dest)` edge.
    pub fn transitions(&self) -> impl Iterator<Item = (StateId, char, StateId)> + '_ {
        self.transitions.iter().enumerate().flat_map(|(src, row)| {
            row.iter()
                .map(move |(&symbol, &dest)| (src, symbol, dest))
        })
    }

    /// Returns true if every state has exactly one transition for every
    /// symbol of the alphabet.
    pub fn is_total(&self) -> bool {
        !self.transitions.is_empty()
            && self.transitions.iter().all(|row| {
                row.len() == self.alphabet.len()
                    && self.alphabet.symbols().all(|symbol| row.contains_key(&symbol))
            })
    }

    /// Returns the first non-final state whose every transition loops back to
    /// itself, if the automaton has one.
    pub fn sink(&self) -> Option<StateId> {
        (0..self.state_count()).find(|&state| {
            !self.is_final(state)
                && self
                    .alphabet
                    .symbols()
                    .all(|symbol| self.transition(state, symbol) == Some(state))
        })
    }

    /// Produces the mirror automaton: initial and final roles are swapped and
    /// every edge is reversed.
    ///
    /// The mirror is in general non-deterministic, and has as many initial
    /// states as this automaton has final states.
    pub fn reverse(&self) -> Nfa {
        let mut mirror = Nfa::new(
            self.final_states.clone(),
            StateSet::singleton(self.initial),
        );

        for (src, symbol, dest) in self.transitions() {
            mirror.add_transition(dest, Label::Symbol(symbol), src);
        }

        mirror
    }

    /// Returns true if the two automata are identical up to a renaming of
    /// states reachable from their initial states.
    pub fn is_isomorphic(&self, other: &Dfa) -> bool {
        if self.alphabet != other.alphabet || self.state_count() != other.state_count() {
            return false;
        }

        let mut forward: HashMap<StateId, StateId> = HashMap::new();
        let mut backward: HashMap<StateId, StateId> = HashMap::new();
        let mut frontier = VecDeque::from([(self.initial, other.initial)]);
        forward.insert(self.initial, other.initial);
        backward.insert(other.initial, self.initial);

        while let Some((lhs, rhs)) = frontier.pop_front() {
            if self.is_final(lhs) != other.is_final(rhs) {
                return false;
            }

            for symbol in self.alphabet.symbols() {
                let next = (self.transition(lhs, symbol), other.transition(rhs, symbol));
                match next {
                    (None, None) => continue,
                    (Some(lhs_next), Some(rhs_next)) => {
                        match (forward.get(&lhs_next), backward.get(&rhs_next)) {
                            (None, None) => {
                                forward.insert(lhs_next, rhs_next);
                                backward.insert(rhs_next, lhs_next);
                                frontier.push_back((lhs_next, rhs_next));
                            }
                            (Some(&mapped), Some(_)) if mapped == rhs_next => continue,
                            _ => return false,
                        }
                    }
                    _ => return false,
                }
            }
        }

        true
    }
}

impl Display for Dfa {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sink = self.sink();

        writeln!(f, "initial: {:04}", self.initial)?;
        writeln!(f, "final: {}", self.final_states)?;
        if let Some(sink) = sink {
            writeln!(f, "sink: {:04}", sink)?;
        }

        for (state, row) in self.transitions.iter().enumerate() {
            if Some(state) == sink {
                continue;
            }

            // group symbols by their destination to keep wide alphabets legible.
            let mut by_dest: BTreeMap<StateId, String> = BTreeMap::new();
            for (&symbol, &dest) in row.iter().filter(|&(_, &dest)| Some(dest) != sink) {
                by_dest.entry(dest).or_default().push(symbol);
            }

            write!(f, "{:04}:", state)?;
            for (dest, symbols) in by_dest {
                write!(f, " {:?} -> {:04};", symbols, dest)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
