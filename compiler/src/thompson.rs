//! Lowers a parsed [Ast] into a non-deterministic automaton, one small
//! sub-automaton per node, composed bottom-up.

use super::ast::Ast;
use mygrep_runtime::{Nfa, StateId, StateSet};

/// Hands out fresh state identifiers for the duration of a single build.
///
/// Identifiers increase monotonically and are never reused, so the transition
/// tables of independently built sub-automata never collide when merged.
#[derive(Debug, Default)]
pub struct StateAllocator {
    next: StateId,
}

impl StateAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self) -> StateId {
        let state = self.next;
        self.next += 1;
        state
    }

    /// The number of states allocated so far.
    pub fn allocated(&self) -> usize {
        self.next
    }
}

/// Builds automata with the Thompson construction.
#[derive(Debug, Default)]
pub struct Builder {
    allocator: StateAllocator,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocated(&self) -> usize {
        self.allocator.allocated()
    }

    /// Recursively builds the automaton for `ast`.
    pub fn build(&mut self, ast: &Ast) -> Nfa {
        match ast {
            Ast::CharGroup(labels) => {
                let (initial, last) = (self.allocator.allocate(), self.allocator.allocate());
                let mut nfa = Nfa::new(StateSet::singleton(initial), StateSet::singleton(last));
                for &label in labels {
                    nfa.add_transition(initial, label, last);
                }
                nfa
            }
            Ast::Union(left, right) => {
                let mut nfa = self.build(left);
                let other = self.build(right);

                let initial = nfa.initial_states().iter().chain(other.initial_states());
                let initial = initial.collect::<StateSet>();
                let final_states = nfa.final_states().iter().chain(other.final_states());
                let final_states = final_states.collect::<StateSet>();

                nfa.merge_transitions(other);
                nfa.set_initial_states(initial);
                nfa.set_final_states(final_states);
                nfa
            }
            Ast::Concat(left, right) => {
                let mut nfa = self.build(left);
                let other = self.build(right);

                let joins = nfa.final_states().clone();
                let initial = other.initial_states().clone();
                let final_states = other.final_states().clone();

                nfa.merge_transitions(other);
                for src in &joins {
                    for dest in &initial {
                        nfa.add_epsilon_transition(src, dest);
                    }
                }
                nfa.set_final_states(final_states);
                nfa
            }
            // The loop is routed through a fresh hub state rather than
            // linking the child's initial and final states to each other
            // directly, since a child initial state may be re-entered from
            // inside the child.
            Ast::Star(child) => {
                let mut nfa = self.build(child);
                let hub = self.allocator.allocate();

                let (initial, final_states) =
                    (nfa.initial_states().clone(), nfa.final_states().clone());
                for dest in &initial {
                    nfa.add_epsilon_transition(hub, dest);
                }
                for src in &final_states {
                    nfa.add_epsilon_transition(src, hub);
                }

                nfa.set_initial_states(StateSet::singleton(hub));
                nfa.set_final_states(StateSet::singleton(hub));
                nfa
            }
        }
    }
}

/// Builds the automaton for `ast` with a fresh allocator.
///
/// # Example
///
/// ```
/// use mygrep_compiler::{ast::Ast, thompson::thompson};
/// use mygrep_runtime::matcher::{NfaEvaluator, PatternEvaluatorMut};
///
/// let nfa = thompson(&Ast::star(Ast::literal('a')));
///
/// assert!(NfaEvaluator::new(&nfa).matches("aaa".chars()));
/// assert!(!NfaEvaluator::new(&nfa).matches("ab".chars()));
/// ```
pub fn thompson(ast: &Ast) -> Nfa {
    let mut builder = Builder::new();
    let nfa = builder.build(ast);
    log::debug!(
        "built nfa with {} states and {} transitions",
        builder.allocated(),
        nfa.transition_count()
    );
    nfa
}
