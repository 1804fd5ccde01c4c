//! The occurrence automaton of a literal: a prefix automaton recognizing
//! every line that contains the literal.

use mygrep_runtime::{Alphabet, Dfa};

use super::parser::{ParseErr, ParseErrKind};

/// Computes the KMP failure table, where entry `i` is the length of the
/// longest proper prefix of `pattern[..=i]` that is also its suffix.
fn failure_table(pattern: &[char]) -> Vec<usize> {
    let mut table = vec![0; pattern.len()];
    let mut border = 0;

    for idx in 1..pattern.len() {
        while border > 0 && pattern[idx] != pattern[border] {
            border = table[border - 1];
        }
        if pattern[idx] == pattern[border] {
            border += 1;
        }
        table[idx] = border;
    }

    table
}

/// Builds a total automaton over `alphabet` accepting exactly the words that
/// contain `literal`.
///
/// State `q` records that the longest prefix of the literal ending the input
/// read so far has length `q`. The last state, reached once the whole literal
/// has been seen, absorbs every symbol.
///
/// # Example
///
/// ```
/// use mygrep_compiler::occurrence::occurrence_automaton;
/// use mygrep_runtime::{accept, Alphabet};
///
/// let dfa = occurrence_automaton("aab", &Alphabet::ascii_letters()).unwrap();
///
/// assert!(accept(&dfa, "xaaabz"));
/// assert!(!accept(&dfa, "ababa"));
/// ```
pub fn occurrence_automaton(literal: &str, alphabet: &Alphabet) -> Result<Dfa, ParseErr> {
    let pattern = literal.chars().collect::<Vec<_>>();

    if let Some((position, &c)) = pattern
        .iter()
        .enumerate()
        .find(|(_, c)| !alphabet.contains(**c))
    {
        return Err(ParseErr::new(ParseErrKind::SymbolOutsideAlphabet(c)).with_position(position));
    }

    let failure = failure_table(&pattern);
    let mut dfa = Dfa::new(alphabet.clone());
    let states = (0..=pattern.len())
        .map(|_| dfa.add_state())
        .collect::<Vec<_>>();
    let matched = pattern.len();
    dfa.add_final_state(matched);

    for &state in &states[..matched] {
        for symbol in alphabet.symbols() {
            let next = if pattern[state] == symbol {
                state + 1
            } else if state == 0 {
                0
            } else {
                // the row for the border is already complete since it is
                // strictly shorter than `state`.
                dfa.transition(failure[state - 1], symbol).unwrap_or(0)
            };
            dfa.add_transition(state, symbol, next);
        }
    }

    for symbol in alphabet.symbols() {
        dfa.add_transition(matched, symbol, matched);
    }

    log::debug!(
        "built occurrence automaton for {:?} with {} states",
        literal,
        dfa.state_count()
    );
    Ok(dfa)
}
