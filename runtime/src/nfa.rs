//! A non-deterministic finite automaton with epsilon transitions.

use std::collections::BTreeMap;

use crate::alphabet::{Label, EPSILON};
use crate::state::{StateId, StateSet};

/// A non-deterministic automaton that may have several initial states.
///
/// # Example
///
/// ```
/// use mygrep_runtime::{Nfa, StateSet, EPSILON};
///
/// // 0 --ε--> 1 --'a'--> 2
/// let mut nfa = Nfa::new(StateSet::singleton(0), StateSet::singleton(2));
/// nfa.add_transition(0, EPSILON, 1);
/// nfa.add_transition(1, 'a'.into(), 2);
///
/// let initial = nfa.epsilon_closure(nfa.initial_states());
/// assert_eq!(StateSet::from_iter([0, 1]), initial);
/// assert!(nfa.is_accepting(&nfa.step(&initial, 'a')));
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Nfa {
    initial: StateSet,
    final_states: StateSet,
    transitions: BTreeMap<StateId, BTreeMap<Label, StateSet>>,
}

impl Nfa {
    #[must_use]
    pub fn new(initial: StateSet, final_states: StateSet) -> Self {
        Self {
            initial,
            final_states,
            transitions: BTreeMap::new(),
        }
    }

    pub fn initial_states(&self) -> &StateSet {
        &self.initial
    }

    pub fn final_states(&self) -> &StateSet {
        &self.final_states
    }

    pub fn set_initial_states(&mut self, initial: StateSet) {
        self.initial = initial;
    }

    pub fn set_final_states(&mut self, final_states: StateSet) {
        self.final_states = final_states;
    }

    /// Adds a transition from `src` to `dest` on the given label.
    pub fn add_transition(&mut self, src: StateId, label: Label, dest: StateId) {
        self.transitions
            .entry(src)
            .or_default()
            .entry(label)
            .or_default()
            .insert(dest);
    }

    pub fn add_epsilon_transition(&mut self, src: StateId, dest: StateId) {
        self.add_transition(src, EPSILON, dest)
    }

    /// Returns the states directly reachable from `state` on `label`.
    ///
    /// Querying on [EPSILON] yields only real epsilon-successors, never the
    /// marker itself.
    pub fn targets(&self, state: StateId, label: Label) -> impl Iterator<Item = StateId> + '_ {
        self.transitions
            .get(&state)
            .and_then(|edges| edges.get(&label))
            .into_iter()
            .flat_map(|dests| dests.iter())
    }

    /// Every state reachable from `states` using only epsilon transitions,
    /// including `states` themselves.
    pub fn epsilon_closure(&self, states: &StateSet) -> StateSet {
        let mut closure = StateSet::new();
        let mut stack: Vec<StateId> = states.iter().collect();

        while let Some(state) = stack.pop() {
            if closure.insert(state) {
                stack.extend(
                    self.targets(state, EPSILON)
                        .filter(|next| !closure.contains(*next)),
                );
            }
        }

        closure
    }

    /// Consumes one symbol from every state in `states` then closes the result
    /// over epsilon transitions.
    pub fn step(&self, states: &StateSet, symbol: char) -> StateSet {
        let label = Label::Symbol(symbol);
        let moved = states
            .iter()
            .flat_map(|state| self.targets(state, label))
            .collect::<StateSet>();

        self.epsilon_closure(&moved)
    }

    /// Returns true if any of the states is final.
    pub fn is_accepting(&self, states: &StateSet) -> bool {
        states.intersects(&self.final_states)
    }

    /// Absorbs the transition table of another automaton.
    ///
    /// The initial and final sets of `other` are left to the caller, since
    /// each composition treats them differently.
    pub fn merge_transitions(&mut self, other: Nfa) {
        for (src, edges) in other.transitions {
            let merged = self.transitions.entry(src).or_default();
            for (label, dests) in edges {
                merged.entry(label).or_default().extend(dests);
            }
        }
    }

    /// Iterates every `(src, label, dest)` edge.
    pub fn transitions(&self) -> impl Iterator<Item = (StateId, Label, StateId)> + '_ {
        self.transitions.iter().flat_map(|(&src, edges)| {
            edges
                .iter()
                .flat_map(move |(&label, dests)| dests.iter().map(move |dest| (src, label, dest)))
        })
    }

    /// Every state mentioned by the automaton.
    pub fn states(&self) -> StateSet {
        self.initial
            .iter()
            .chain(self.final_states.iter())
            .chain(
                self.transitions()
                    .flat_map(|(src, _, dest)| [src, dest].into_iter()),
            )
            .collect()
    }

    pub fn transition_count(&self) -> usize {
        self.transitions().count()
    }
}
