use quickcheck::{Arbitrary, Gen, QuickCheck, Testable};

use mygrep_compiler::determinize::determinize;
use mygrep_compiler::minimize::minimize;
use mygrep_compiler::thompson::thompson;
use mygrep_compiler::Compiler;
use mygrep_runtime::matcher::{NfaEvaluator, PatternEvaluatorMut};
use mygrep_runtime::{accept, Alphabet};

const MAX_DEPTH: usize = 4;

fn qc<T: Testable>(t: T) {
    QuickCheck::new().tests(500).quickcheck(t);
}

fn compiler() -> Compiler {
    Compiler::new().with_alphabet(Alphabet::new("ab".chars()))
}

/// A well-formed postfix pattern over `{a, b}`.
#[derive(Debug, Clone)]
struct Pattern(String);

impl Pattern {
    fn generate(g: &mut Gen, depth: usize) -> String {
        let choice = if depth == 0 { 0 } else { u8::arbitrary(g) % 6 };

        match choice {
            0 | 1 => g.choose(&["a", "b", "."]).copied().unwrap_or("a").to_string(),
            2 => format!("{} *", Self::generate(g, depth - 1)),
            3 => format!("{} ?", Self::generate(g, depth - 1)),
            4 => format!(
                "{} {} |",
                Self::generate(g, depth - 1),
                Self::generate(g, depth - 1)
            ),
            _ => format!(
                "{} {} @",
                Self::generate(g, depth - 1),
                Self::generate(g, depth - 1)
            ),
        }
    }
}

impl Arbitrary for Pattern {
    fn arbitrary(g: &mut Gen) -> Self {
        Pattern(Self::generate(g, MAX_DEPTH))
    }
}

/// A short line over `{a, b}` that occasionally contains the foreign `c`.
#[derive(Debug, Clone)]
struct Line(String);

impl Arbitrary for Line {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % 8;
        let line = (0..len)
            .map(|_| g.choose(&['a', 'b', 'a', 'b', 'c']).copied().unwrap_or('a'))
            .collect();

        Line(line)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(Line))
    }
}

#[test]
fn should_accept_same_lines_as_naive_nfa_simulation() {
    fn prop(pattern: Pattern, line: Line) -> bool {
        let compiler = compiler();
        let ast = match compiler.parse(&pattern.0) {
            Ok(ast) => ast,
            Err(_) => return false,
        };
        let nfa = thompson(&ast);
        let unminimized = determinize(&nfa, compiler.alphabet());
        let minimized = minimize(&unminimized);

        let expected = NfaEvaluator::new(&nfa).matches(line.0.chars());
        expected == accept(&unminimized, &line.0) && expected == accept(&minimized, &line.0)
    }
    qc(prop as fn(Pattern, Line) -> bool);
}

#[test]
fn should_always_produce_total_automata() {
    fn prop(pattern: Pattern) -> bool {
        let compiler = compiler();
        let unminimized = compiler.clone().with_minimization(false).compile(&pattern.0);
        let minimized = compiler.compile(&pattern.0);

        match (unminimized, minimized) {
            (Ok(unminimized), Ok(minimized)) => {
                unminimized.is_total()
                    && minimized.is_total()
                    && minimized.state_count() <= unminimized.state_count()
            }
            _ => false,
        }
    }
    qc(prop as fn(Pattern) -> bool);
}

#[test]
fn should_be_idempotent_under_minimization() {
    fn prop(pattern: Pattern) -> bool {
        match compiler().compile(&pattern.0) {
            Ok(once) => minimize(&once).is_isomorphic(&once),
            Err(_) => false,
        }
    }
    qc(prop as fn(Pattern) -> bool);
}
