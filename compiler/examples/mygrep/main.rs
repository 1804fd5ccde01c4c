use std::fs::File;
use std::io::{self, BufRead, BufReader};

use mygrep_compiler::Compiler;
use mygrep_runtime::{accept, Alphabet};

const USAGE: &str = "mygrep [--debug|-d] [--literal|-l] [--search|-s] [--letters] PATTERN [FILE]";

#[derive(Debug, Default)]
struct Flags {
    debug: bool,
    literal: bool,
    search: bool,
    letters: bool,
}

fn main() -> Result<(), String> {
    env_logger::init();

    let (flags, args) =
        std::env::args()
            .skip(1)
            .fold((Flags::default(), vec![]), |(mut flags, mut args), arg| {
                match arg.as_str() {
                    "--debug" | "-d" => flags.debug = true,
                    "--literal" | "-l" => flags.literal = true,
                    "--search" | "-s" => flags.search = true,
                    "--letters" => flags.letters = true,
                    _ => args.push(arg),
                };
                (flags, args)
            });

    let (pattern, input): (&str, Box<dyn BufRead>) = match args.as_slice() {
        [pattern] => Ok((
            pattern.as_str(),
            Box::new(BufReader::new(io::stdin())) as Box<dyn BufRead>,
        )),
        [pattern, path] => File::open(path)
            .map(|file| {
                (
                    pattern.as_str(),
                    Box::new(BufReader::new(file)) as Box<dyn BufRead>,
                )
            })
            .map_err(|e| format!("{}: {}", path, e)),
        _ => Err(USAGE.to_string()),
    }?;

    let alphabet = if flags.letters {
        Alphabet::ascii_letters()
    } else {
        Alphabet::printable_ascii()
    };
    let compiler = Compiler::new()
        .with_alphabet(alphabet)
        .with_substring_search(flags.search);

    let dfa = if flags.literal {
        compiler.compile_literal(pattern)
    } else {
        compiler.compile(pattern)
    }
    .map_err(|e| e.to_string())?;

    if flags.debug {
        if !flags.literal {
            let ast = compiler.parse(pattern).map_err(|e| e.to_string())?;
            println!(
                "AST
--------
{}--------
",
                ast
            )
        }

        println!(
            "DEBUG
--------
{}--------
",
            dfa
        )
    }

    for line in input.lines() {
        match line {
            Ok(line) if accept(&dfa, &line) => println!("{}", line),
            Ok(_) => continue,
            Err(e) => return Err(format!("{}", e)),
        }
    }

    Ok(())
}
