use std::collections::btree_set::{self, BTreeSet};
use std::fmt::Display;

/// An opaque automaton state identifier.
pub type StateId = usize;

/// An ordered set of states with structural equality and hashing.
///
/// Subset construction keys composite states on this type, so two sets
/// holding the same states are always the same composite state regardless
/// of how they were built.
#[derive(Debug, Default, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateSet(BTreeSet<StateId>);

impl StateSet {
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    pub fn singleton(state: StateId) -> Self {
        Self([state].into_iter().collect())
    }

    /// Inserts a state, returning `true` if it was not already present.
    pub fn insert(&mut self, state: StateId) -> bool {
        self.0.insert(state)
    }

    pub fn contains(&self, state: StateId) -> bool {
        self.0.contains(&state)
    }

    /// Returns true if any state is shared between the two sets.
    pub fn intersects(&self, other: &StateSet) -> bool {
        // walk the smaller set.
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };

        small.iter().any(|state| large.contains(state))
    }

    pub fn iter(&self) -> impl Iterator<Item = StateId> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<StateId> for StateSet {
    fn from_iter<T: IntoIterator<Item = StateId>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<StateId> for StateSet {
    fn extend<T: IntoIterator<Item = StateId>>(&mut self, iter: T) {
        self.0.extend(iter)
    }
}

impl IntoIterator for StateSet {
    type Item = StateId;
    type IntoIter = btree_set::IntoIter<StateId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a StateSet {
    type Item = StateId;
    type IntoIter = std::iter::Copied<btree_set::Iter<'a, StateId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}

impl Display for StateSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (idx, state) in self.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", state)?;
        }
        write!(f, "}}")
    }
}
