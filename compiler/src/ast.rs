use std::collections::BTreeSet;
use std::fmt::Display;

use mygrep_runtime::{Alphabet, Label, EPSILON};

/// A parsed pattern. Each node owns its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ast {
    /// Matches exactly one of the labels. A group holding [EPSILON] matches
    /// the empty word.
    CharGroup(BTreeSet<Label>),
    Union(Box<Ast>, Box<Ast>),
    Concat(Box<Ast>, Box<Ast>),
    Star(Box<Ast>),
}

impl Ast {
    pub fn literal(c: char) -> Self {
        Self::CharGroup([Label::Symbol(c)].into_iter().collect())
    }

    /// A group matching any single symbol of the alphabet.
    pub fn any(alphabet: &Alphabet) -> Self {
        Self::CharGroup(alphabet.labels().collect())
    }

    /// A group matching only the empty word.
    pub fn empty() -> Self {
        Self::CharGroup([EPSILON].into_iter().collect())
    }

    pub fn union(left: Ast, right: Ast) -> Self {
        Self::Union(Box::new(left), Box::new(right))
    }

    pub fn concat(left: Ast, right: Ast) -> Self {
        Self::Concat(Box::new(left), Box::new(right))
    }

    pub fn star(child: Ast) -> Self {
        Self::Star(Box::new(child))
    }

    /// Matches the empty word or `child` exactly once.
    pub fn optional(child: Ast) -> Self {
        Self::union(Self::empty(), child)
    }

    /// Wraps the node as `(any)* self (any)*`, so the result accepts every
    /// word containing a match of `self`.
    pub fn surrounded_by_any(self, alphabet: &Alphabet) -> Self {
        let prefix = Self::star(Self::any(alphabet));
        let suffix = Self::star(Self::any(alphabet));

        Self::concat(Self::concat(prefix, self), suffix)
    }

    fn fmt_indented(&self, f: &mut std::fmt::Formatter<'_>, depth: usize) -> std::fmt::Result {
        let indent = "  ".repeat(depth);

        match self {
            Ast::CharGroup(labels) => {
                write!(f, "{}CharGroup", indent)?;
                for label in labels {
                    write!(f, " {}", label)?;
                }
                writeln!(f)
            }
            Ast::Union(left, right) => {
                writeln!(f, "{}Union", indent)?;
                left.fmt_indented(f, depth + 1)?;
                right.fmt_indented(f, depth + 1)
            }
            Ast::Concat(left, right) => {
                writeln!(f, "{}Concat", indent)?;
                left.fmt_indented(f, depth + 1)?;
                right.fmt_indented(f, depth + 1)
            }
            Ast::Star(child) => {
                writeln!(f, "{}Star", indent)?;
                child.fmt_indented(f, depth + 1)
            }
        }
    }
}

impl Display for Ast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.fmt_indented(f, 0)
    }
}
