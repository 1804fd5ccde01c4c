use parcel::parsers::character::expect_character;
use parcel::prelude::v1::*;

use super::ast::Ast;
use mygrep_runtime::Alphabet;

/// The distinct ways a postfix pattern can be malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrKind {
    /// An operator was applied with fewer operands than it requires.
    OperandUnderflow {
        operator: char,
        required: usize,
        available: usize,
    },
    /// The pattern did not reduce to exactly one expression.
    UnbalancedExpression(usize),
    /// A `\` was the final character of the pattern.
    UnterminatedEscape,
    /// A literal is not a member of the configured alphabet.
    SymbolOutsideAlphabet(char),
    Undefined(String),
}

impl std::fmt::Display for ParseErrKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OperandUnderflow {
                operator,
                required,
                available,
            } => write!(
                f,
                "operator '{}' requires {} operand(s) but {} available",
                operator, required, available
            ),
            Self::UnbalancedExpression(0) => write!(f, "pattern contains no expression"),
            Self::UnbalancedExpression(cnt) => write!(
                f,
                "pattern reduces to {} expressions, missing {} operator(s)",
                cnt,
                cnt - 1
            ),
            Self::UnterminatedEscape => write!(f, "escape sequence is unterminated"),
            Self::SymbolOutsideAlphabet(c) => write!(f, "symbol {:?} is outside the alphabet", c),
            Self::Undefined(err) => write!(f, "undefined parse error: {}", err),
        }
    }
}

/// A malformed pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErr {
    /// The type of triggered error.
    kind: ParseErrKind,
    /// The character offset at which the error was detected, if attributable.
    position: Option<usize>,
}

impl ParseErr {
    /// Instantiates a new error.
    pub fn new(kind: ParseErrKind) -> Self {
        Self {
            kind,
            position: None,
        }
    }

    /// Associates a pattern offset with the error, returning the modified error.
    pub fn with_position(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }

    pub fn kind(&self) -> &ParseErrKind {
        &self.kind
    }

    pub fn position(&self) -> Option<usize> {
        self.position
    }
}

impl std::fmt::Display for ParseErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "malformed pattern: {}", self.kind)?;
        match self.position {
            Some(position) => write!(f, " at position {}", position),
            None => Ok(()),
        }
    }
}

impl std::error::Error for ParseErr {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Literal(char),
    Any,
    Star,
    Optional,
    Union,
    Concat,
}

/// Parses a postfix pattern into a single [Ast].
///
/// Operands are pushed onto a stack as they are read and operators replace
/// the operands they consume with a new node. Unescaped ASCII whitespace only
/// separates tokens.
///
/// # Example
///
/// ```
/// use mygrep_compiler::{ast::Ast, parse};
/// use mygrep_runtime::Alphabet;
///
/// let input = "a b @ *".chars().enumerate().collect::<Vec<(usize, char)>>();
///
/// assert_eq!(
///     Ok(Ast::star(Ast::concat(Ast::literal('a'), Ast::literal('b')))),
///     parse(&input, &Alphabet::ascii_letters())
/// );
/// ```
pub fn parse(input: &[(usize, char)], alphabet: &Alphabet) -> Result<Ast, ParseErr> {
    let mut stack: Vec<Ast> = Vec::new();

    for (position, token) in tokenize(input)? {
        let node = match token {
            Token::Literal(c) if alphabet.contains(c) => Ast::literal(c),
            Token::Literal(c) => {
                return Err(
                    ParseErr::new(ParseErrKind::SymbolOutsideAlphabet(c)).with_position(position)
                )
            }
            Token::Any => Ast::any(alphabet),
            Token::Star => {
                let [child] = pop_operands(&mut stack, '*', position)?;
                Ast::star(child)
            }
            Token::Optional => {
                let [child] = pop_operands(&mut stack, '?', position)?;
                Ast::optional(child)
            }
            Token::Union => {
                let [left, right] = pop_operands(&mut stack, '|', position)?;
                Ast::union(left, right)
            }
            Token::Concat => {
                let [left, right] = pop_operands(&mut stack, '@', position)?;
                Ast::concat(left, right)
            }
        };

        stack.push(node);
    }

    let remaining = stack.len();
    match (stack.pop(), remaining) {
        (Some(ast), 1) => Ok(ast),
        _ => Err(ParseErr::new(ParseErrKind::UnbalancedExpression(remaining))),
    }
}

/// Removes the top `N` operands, returned in the order they were pushed.
fn pop_operands<const N: usize>(
    stack: &mut Vec<Ast>,
    operator: char,
    position: usize,
) -> Result<[Ast; N], ParseErr> {
    let available = stack.len();
    let underflow = || {
        ParseErr::new(ParseErrKind::OperandUnderflow {
            operator,
            required: N,
            available,
        })
        .with_position(position)
    };

    let split_at = available.checked_sub(N).ok_or_else(underflow)?;
    stack.split_off(split_at).try_into().map_err(|_| underflow())
}

fn tokenize(input: &[(usize, char)]) -> Result<Vec<(usize, Token)>, ParseErr> {
    let status = tokens()
        .parse(input)
        .map_err(|err| ParseErr::new(ParseErrKind::Undefined(format!("{}", err))))?;

    match status {
        MatchStatus::Match {
            remainder: [],
            inner,
            ..
        } => Ok(inner),
        // every character is either a token or whitespace, leaving only a
        // lone trailing escape unconsumed.
        MatchStatus::Match {
            remainder: [(position, _), ..],
            ..
        }
        | MatchStatus::NoMatch([(position, _), ..]) => {
            Err(ParseErr::new(ParseErrKind::UnterminatedEscape).with_position(*position))
        }
        MatchStatus::NoMatch([]) => Ok(vec![]),
    }
}

fn tokens<'a>() -> impl parcel::Parser<'a, &'a [(usize, char)], Vec<(usize, Token)>> {
    parcel::left(parcel::join(
        parcel::zero_or_more(parcel::right(parcel::join(
            whitespace(),
            positioned(token()),
        ))),
        whitespace(),
    ))
}

fn token<'a>() -> impl parcel::Parser<'a, &'a [(usize, char)], Token> {
    parcel::or(operator(), || literal())
}

// Operators

fn operator<'a>() -> impl parcel::Parser<'a, &'a [(usize, char)], Token> {
    parcel::or(expect_character('@').map(|_| Token::Concat), || {
        parcel::or(expect_character('|').map(|_| Token::Union), || {
            parcel::or(expect_character('*').map(|_| Token::Star), || {
                parcel::or(expect_character('?').map(|_| Token::Optional), || {
                    expect_character('.').map(|_| Token::Any)
                })
            })
        })
    })
}

// Literals

fn literal<'a>() -> impl parcel::Parser<'a, &'a [(usize, char)], Token> {
    parcel::or(escaped_character(), || unescaped_character()).map(Token::Literal)
}

fn escaped_character<'a>() -> impl Parser<'a, &'a [(usize, char)], char> {
    move |input: &'a [(usize, char)]| match input.get(0..2) {
        Some(&[(escape_pos, '\\'), (to_escape_pos, to_escape)]) => Ok(MatchStatus::Match {
            span: escape_pos..to_escape_pos + 1,
            remainder: &input[2..],
            inner: char_to_escaped_equivalent(to_escape),
        }),
        _ => Ok(MatchStatus::NoMatch(input)),
    }
}

fn unescaped_character<'a>() -> impl Parser<'a, &'a [(usize, char)], char> {
    move |input: &'a [(usize, char)]| match input.first() {
        Some(&(next_pos, next)) if next != '\\' && !next.is_ascii_whitespace() => {
            Ok(MatchStatus::Match {
                span: next_pos..next_pos + 1,
                remainder: &input[1..],
                inner: next,
            })
        }
        _ => Ok(MatchStatus::NoMatch(input)),
    }
}

fn char_to_escaped_equivalent(c: char) -> char {
    match c {
        't' => '\t',
        // operators, whitespace and the escape itself stand for themselves.
        other => other,
    }
}

// Terminals

fn whitespace<'a>() -> impl Parser<'a, &'a [(usize, char)], Vec<char>> {
    parcel::zero_or_more(whitespace_character())
}

fn whitespace_character<'a>() -> impl Parser<'a, &'a [(usize, char)], char> {
    move |input: &'a [(usize, char)]| match input.first() {
        Some(&(next_pos, next)) if next.is_ascii_whitespace() => Ok(MatchStatus::Match {
            span: next_pos..next_pos + 1,
            remainder: &input[1..],
            inner: next,
        }),
        _ => Ok(MatchStatus::NoMatch(input)),
    }
}

/// Pairs a parser's output with the offset of the first character it read.
fn positioned<'a, P, T>(parser: P) -> impl Parser<'a, &'a [(usize, char)], (usize, T)>
where
    P: Parser<'a, &'a [(usize, char)], T>,
{
    move |input: &'a [(usize, char)]| {
        let position = input.first().map(|&(pos, _)| pos).unwrap_or_default();

        parser.parse(input).map(|status| match status {
            MatchStatus::Match {
                span,
                remainder,
                inner,
            } => MatchStatus::Match {
                span,
                remainder,
                inner: (position, inner),
            },
            MatchStatus::NoMatch(remainder) => MatchStatus::NoMatch(remainder),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mygrep_runtime::EPSILON;

    fn enumerated(input: &str) -> Vec<(usize, char)> {
        input.chars().enumerate().collect()
    }

    #[test]
    fn should_parse_minimal_expression_with_no_errors() {
        let alphabet = Alphabet::printable_ascii();
        let inputs = ["a", "ab@", "a b @", "a*", "ab|", "a?", ".", "a b | * c @"];

        for (test_id, input) in inputs.into_iter().enumerate() {
            let parse_result = parse(&enumerated(input), &alphabet);
            assert!(parse_result.is_ok(), "{}: {:?}", test_id, parse_result)
        }
    }

    #[test]
    fn should_preserve_operand_order() {
        let alphabet = Alphabet::ascii_letters();
        let input_output = [
            (
                "a b @",
                Ast::concat(Ast::literal('a'), Ast::literal('b')),
            ),
            ("a b |", Ast::union(Ast::literal('a'), Ast::literal('b'))),
            (
                "a b c @ |",
                Ast::union(
                    Ast::literal('a'),
                    Ast::concat(Ast::literal('b'), Ast::literal('c')),
                ),
            ),
            (
                "a b @ c |",
                Ast::union(
                    Ast::concat(Ast::literal('a'), Ast::literal('b')),
                    Ast::literal('c'),
                ),
            ),
        ];

        for (test_id, (input, expected)) in input_output.into_iter().enumerate() {
            assert_eq!(
                (test_id, Ok(expected)),
                (test_id, parse(&enumerated(input), &alphabet))
            )
        }
    }

    #[test]
    fn should_parse_unary_operators() {
        let alphabet = Alphabet::ascii_letters();

        assert_eq!(
            Ok(Ast::star(Ast::literal('a'))),
            parse(&enumerated("a*"), &alphabet)
        );
        assert_eq!(
            Ok(Ast::Union(
                Box::new(Ast::CharGroup([EPSILON].into_iter().collect())),
                Box::new(Ast::literal('a'))
            )),
            parse(&enumerated("a ?"), &alphabet)
        );
    }

    #[test]
    fn should_parse_any_match_as_whole_alphabet() {
        let alphabet = Alphabet::new("xyz".chars());

        assert_eq!(Ok(Ast::any(&alphabet)), parse(&enumerated("."), &alphabet))
    }

    #[test]
    fn should_parse_escaped_operators_as_literals() {
        let alphabet = Alphabet::printable_ascii();
        let input_output = [
            ("\\@", Ast::literal('@')),
            ("\\|", Ast::literal('|')),
            ("\\*", Ast::literal('*')),
            ("\\?", Ast::literal('?')),
            ("\\.", Ast::literal('.')),
            ("\\\\", Ast::literal('\\')),
            ("\\ ", Ast::literal(' ')),
            ("\\t", Ast::literal('\t')),
        ];

        for (test_id, (input, expected)) in input_output.into_iter().enumerate() {
            assert_eq!(
                (test_id, Ok(expected)),
                (test_id, parse(&enumerated(input), &alphabet))
            )
        }
    }

    #[test]
    fn should_error_on_operand_underflow() {
        let alphabet = Alphabet::ascii_letters();
        let input_output = [
            (
                "a |",
                ParseErrKind::OperandUnderflow {
                    operator: '|',
                    required: 2,
                    available: 1,
                },
                2,
            ),
            (
                "@",
                ParseErrKind::OperandUnderflow {
                    operator: '@',
                    required: 2,
                    available: 0,
                },
                0,
            ),
            (
                "*",
                ParseErrKind::OperandUnderflow {
                    operator: '*',
                    required: 1,
                    available: 0,
                },
                0,
            ),
            (
                "  ?",
                ParseErrKind::OperandUnderflow {
                    operator: '?',
                    required: 1,
                    available: 0,
                },
                2,
            ),
        ];

        for (test_id, (input, kind, position)) in input_output.into_iter().enumerate() {
            assert_eq!(
                (test_id, Err(ParseErr::new(kind).with_position(position))),
                (test_id, parse(&enumerated(input), &alphabet))
            )
        }
    }

    #[test]
    fn should_error_when_stack_does_not_reduce_to_one_expression() {
        let alphabet = Alphabet::ascii_letters();
        let input_output = [("", 0), ("   ", 0), ("a b", 2), ("a b c |", 2)];

        for (test_id, (input, remaining)) in input_output.into_iter().enumerate() {
            assert_eq!(
                (
                    test_id,
                    Err(ParseErr::new(ParseErrKind::UnbalancedExpression(remaining)))
                ),
                (test_id, parse(&enumerated(input), &alphabet))
            )
        }
    }

    #[test]
    fn should_error_on_trailing_escape() {
        let alphabet = Alphabet::ascii_letters();

        assert_eq!(
            Err(ParseErr::new(ParseErrKind::UnterminatedEscape).with_position(2)),
            parse(&enumerated("a \\"), &alphabet)
        )
    }

    #[test]
    fn should_error_on_symbol_outside_alphabet() {
        let alphabet = Alphabet::ascii_letters();

        assert_eq!(
            Err(ParseErr::new(ParseErrKind::SymbolOutsideAlphabet('1')).with_position(2)),
            parse(&enumerated("a 1 @"), &alphabet)
        )
    }

    #[test]
    fn should_describe_errors() {
        let err = ParseErr::new(ParseErrKind::OperandUnderflow {
            operator: '|',
            required: 2,
            available: 1,
        })
        .with_position(2);

        assert_eq!(
            "malformed pattern: operator '|' requires 2 operand(s) but 1 available at position 2",
            err.to_string()
        );
        assert_eq!(
            "malformed pattern: pattern contains no expression",
            ParseErr::new(ParseErrKind::UnbalancedExpression(0)).to_string()
        );
    }
}
