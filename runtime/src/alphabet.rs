//! Provides the finite alphabet that every automaton is defined over.

use std::collections::BTreeSet;
use std::fmt::Display;

/// A transition label. Either a symbol from an [Alphabet] or the distinguished
/// [EPSILON] marker, which is consumable without input and is never a member
/// of any alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Label {
    Epsilon,
    Symbol(char),
}

/// The empty-word transition label.
pub const EPSILON: Label = Label::Epsilon;

impl Label {
    /// Returns the symbol carried by the label, or `None` for [EPSILON].
    pub fn as_symbol(&self) -> Option<char> {
        match self {
            Label::Epsilon => None,
            Label::Symbol(c) => Some(*c),
        }
    }

    pub fn is_epsilon(&self) -> bool {
        matches!(self, Label::Epsilon)
    }
}

impl From<char> for Label {
    fn from(src: char) -> Self {
        Self::Symbol(src)
    }
}

impl Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Label::Epsilon => write!(f, "ε"),
            Label::Symbol(c) => write!(f, "{:?}", c),
        }
    }
}

/// A fixed, finite set of symbols.
///
/// # Example
///
/// ```
/// use mygrep_runtime::Alphabet;
///
/// let alphabet = Alphabet::new("ab".chars());
///
/// assert!(alphabet.contains('a'));
/// assert!(!alphabet.contains('c'));
/// assert_eq!(vec!['a', 'b'], alphabet.symbols().collect::<Vec<_>>());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: BTreeSet<char>,
}

impl Alphabet {
    #[must_use]
    pub fn new<I>(symbols: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        Self {
            symbols: symbols.into_iter().collect(),
        }
    }

    /// `a-z` and `A-Z`.
    pub fn ascii_letters() -> Self {
        Self::new(('a'..='z').chain('A'..='Z'))
    }

    /// Every printable ASCII character, space included, plus horizontal tab.
    pub fn printable_ascii() -> Self {
        Self::new((' '..='~').chain(['\t']))
    }

    /// Returns true if the symbol is a member of the alphabet.
    #[inline]
    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }

    /// Iterates the alphabet in ascending symbol order.
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.symbols.iter().copied()
    }

    /// Iterates the alphabet as transition labels.
    pub fn labels(&self) -> impl Iterator<Item = Label> + '_ {
        self.symbols().map(Label::Symbol)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::printable_ascii()
    }
}

impl FromIterator<char> for Alphabet {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_size_presets_correctly() {
        assert_eq!(52, Alphabet::ascii_letters().len());
        // 95 printable characters plus tab.
        assert_eq!(96, Alphabet::printable_ascii().len());
        assert_eq!(Alphabet::printable_ascii(), Alphabet::default());
    }

    #[test]
    fn should_exclude_epsilon_from_labels() {
        let alphabet = Alphabet::ascii_letters();

        assert!(alphabet.labels().all(|label| !label.is_epsilon()));
        assert_eq!(None, EPSILON.as_symbol());
        assert_eq!(Some('z'), Label::from('z').as_symbol());
    }

    #[test]
    fn should_deduplicate_symbols() {
        let alphabet: Alphabet = "abba".chars().collect();

        assert_eq!(2, alphabet.len());
    }
}
