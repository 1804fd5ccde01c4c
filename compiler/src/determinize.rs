//! Subset construction: converts an [Nfa] into an equivalent total [Dfa]
//! whose states stand for sets of automaton states.

use std::collections::{HashMap, VecDeque};

use mygrep_runtime::{Alphabet, Dfa, Nfa, StateId, StateSet};

/// Determinizes `nfa` over `alphabet`.
///
/// Composite states are discovered breadth-first starting from the epsilon
/// closure of the initial states, so every state of the result is reachable
/// from its initial state. The empty set is a composite like any other: once
/// discovered it maps to itself on every symbol and serves as the sink, which
/// keeps the result total.
///
/// # Example
///
/// ```
/// use mygrep_compiler::{ast::Ast, determinize::determinize, thompson::thompson};
/// use mygrep_runtime::{accept, Alphabet};
///
/// let alphabet = Alphabet::new("ab".chars());
/// let nfa = thompson(&Ast::concat(Ast::literal('a'), Ast::literal('b')));
/// let dfa = determinize(&nfa, &alphabet);
///
/// assert!(dfa.is_total());
/// assert!(accept(&dfa, "ab"));
/// assert!(!accept(&dfa, "ba"));
/// ```
pub fn determinize(nfa: &Nfa, alphabet: &Alphabet) -> Dfa {
    let mut dfa = Dfa::new(alphabet.clone());
    let mut discovered: HashMap<StateSet, StateId> = HashMap::new();
    let mut frontier: VecDeque<(StateSet, StateId)> = VecDeque::new();

    let initial = nfa.epsilon_closure(nfa.initial_states());
    let initial_id = discover(&mut dfa, &mut discovered, &mut frontier, nfa, initial);
    dfa.set_initial_state(initial_id);

    while let Some((composite, state)) = frontier.pop_front() {
        for symbol in alphabet.symbols() {
            let next = nfa.step(&composite, symbol);
            let next_state = match discovered.get(&next) {
                Some(&existing) => existing,
                None => discover(&mut dfa, &mut discovered, &mut frontier, nfa, next),
            };

            dfa.add_transition(state, symbol, next_state);
        }
    }

    log::debug!(
        "determinized into {} states, sink: {:?}",
        dfa.state_count(),
        dfa.sink()
    );
    dfa
}

/// Registers a newly seen composite state and queues it for exploration.
fn discover(
    dfa: &mut Dfa,
    discovered: &mut HashMap<StateSet, StateId>,
    frontier: &mut VecDeque<(StateSet, StateId)>,
    nfa: &Nfa,
    composite: StateSet,
) -> StateId {
    let state = dfa.add_state();
    if nfa.is_accepting(&composite) {
        dfa.add_final_state(state);
    }

    log::trace!("discovered composite {} as {:04}", composite, state);
    discovered.insert(composite.clone(), state);
    frontier.push_back((composite, state));
    state
}
