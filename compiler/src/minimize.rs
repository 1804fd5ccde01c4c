use mygrep_runtime::Dfa;

use super::determinize::determinize;

/// Reduces a total automaton to its unique minimal equivalent using
/// Brzozowski's double reversal.
///
/// The first reversal and determinization drops every state that cannot reach
/// a final state. The second drops every state unreachable from the new
/// initial state and collapses equivalent ones.
///
/// # Panics
///
/// Panics if `dfa` is not total. Reversing a partial automaton silently drops
/// the missing transitions, so the result would describe the wrong language.
///
/// # Example
///
/// ```
/// use mygrep_compiler::{ast::Ast, determinize::determinize, minimize::minimize, thompson::thompson};
/// use mygrep_runtime::Alphabet;
///
/// let alphabet = Alphabet::new("ab".chars());
/// let doubled = thompson(&Ast::union(Ast::literal('a'), Ast::literal('a')));
/// let single = thompson(&Ast::literal('a'));
///
/// assert_eq!(
///     minimize(&determinize(&single, &alphabet)).state_count(),
///     minimize(&determinize(&doubled, &alphabet)).state_count(),
/// );
/// ```
pub fn minimize(dfa: &Dfa) -> Dfa {
    assert!(
        dfa.is_total(),
        "minimization requires a total automaton over {} symbols",
        dfa.alphabet().len()
    );

    let alphabet = dfa.alphabet();
    let mirrored = determinize(&dfa.reverse(), alphabet);
    let minimal = determinize(&mirrored.reverse(), alphabet);

    log::debug!(
        "minimized {} states to {}",
        dfa.state_count(),
        minimal.state_count()
    );
    minimal
}
