use std::sync::Arc;

use mygrep_compiler::{compile, Compiler, ParseErrKind};
use mygrep_runtime::{accept, Alphabet};

#[test]
fn should_accept_exactly_the_expected_lines_for_each_pattern() {
    let input_output = [
        ("a b @", vec!["ab"], vec!["a", "b", "ba", ""]),
        ("a *", vec!["", "a", "aaaa"], vec!["b", "ab"]),
        ("a b |", vec!["a", "b"], vec!["ab", ""]),
        ("a ?", vec!["", "a"], vec!["aa"]),
        ("a * b @ *", vec!["", "b", "ab", "aabab"], vec!["a", "aba", "ba"]),
        (
            "h e @ l @ l @ o @ . *  @",
            vec!["hello", "hello world"],
            vec!["hell", " hello"],
        ),
    ];

    for (test_id, (pattern, accepted, rejected)) in input_output.into_iter().enumerate() {
        let dfa = compile(pattern).unwrap();

        for input in accepted {
            assert!(accept(&dfa, input), "{}: {:?}", test_id, input)
        }
        for input in rejected {
            assert!(!accept(&dfa, input), "{}: {:?}", test_id, input)
        }
    }
}

#[test]
fn should_report_malformed_patterns() {
    let input_output = [
        (
            "a |",
            ParseErrKind::OperandUnderflow {
                operator: '|',
                required: 2,
                available: 1,
            },
        ),
        (
            "*",
            ParseErrKind::OperandUnderflow {
                operator: '*',
                required: 1,
                available: 0,
            },
        ),
        ("a b c |", ParseErrKind::UnbalancedExpression(2)),
        ("  ", ParseErrKind::UnbalancedExpression(0)),
        ("a \\", ParseErrKind::UnterminatedEscape),
    ];

    for (test_id, (pattern, expected)) in input_output.into_iter().enumerate() {
        let res = compile(pattern).map_err(|e| e.kind().clone());
        assert_eq!((test_id, Err(expected)), (test_id, res))
    }
}

#[test]
fn should_render_position_in_error_message() {
    assert_eq!(
        Err("malformed pattern: operator '|' requires 2 operand(s) but 1 available at position 2"
            .to_string()),
        compile("a |").map_err(|e| e.to_string())
    )
}

#[test]
fn should_minimize_union_of_identical_literals_to_single_literal() {
    let doubled = compile("a a |").unwrap();
    let single = compile("a").unwrap();

    assert_eq!(single.state_count(), doubled.state_count());
}

#[test]
fn should_agree_on_substring_search_between_literal_and_pattern() {
    let alphabet = Alphabet::new("abc".chars());
    let compiler = Compiler::new()
        .with_alphabet(alphabet)
        .with_substring_search(true);

    let input_output = [
        ("a", "a"),
        ("ab", "a b @"),
        ("aab", "a a @ b @"),
        ("abcab", "a b @ c @ a @ b @"),
    ];

    for (test_id, (literal, pattern)) in input_output.into_iter().enumerate() {
        let from_literal = compiler.compile_literal(literal).unwrap();
        let from_pattern = compiler.compile(pattern).unwrap();

        // both are minimal automata for the same language.
        assert!(from_literal.is_isomorphic(&from_pattern), "{}", test_id);
    }
}

#[test]
fn should_share_compiled_automaton_across_threads() {
    let compiler = Compiler::new().with_substring_search(true);
    let dfa = Arc::new(compiler.compile("e r @ r @ o @ r @").unwrap());
    let lines = ["no error here", "all good", "terror", "err"];

    let handles = lines
        .into_iter()
        .map(|line| {
            let dfa = Arc::clone(&dfa);
            std::thread::spawn(move || accept(&dfa, line))
        })
        .collect::<Vec<_>>();

    let matched = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect::<Vec<_>>();

    assert_eq!(vec![true, false, true, false], matched);
}
