//! CLI entry point for the `sigmath` tool.
//!
//! Parses one expression given on the command line (or read from a file with
//! `--file`), prints the tree and its folded value, and exits non-zero on the
//! first error.

use std::io::{self, Write};
use std::process::ExitCode;

use sigmath::{Error, Parser, evaluate};

const USAGE: &str = "usage: sigmath <expression> | sigmath --file <path>";

enum Input {
    Text(String),
    File(String),
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Option<Input> {
    let first = args.next()?;
    let input = if first == "--file" {
        Input::File(args.next()?)
    } else {
        Input::Text(first)
    };
    args.next().is_none().then_some(input)
}

fn run(input: &Input, out: &mut impl Write) -> Result<(), Box<dyn std::error::Error>> {
    let expr = match input {
        Input::Text(text) => Parser::from_text(text).parse()?,
        Input::File(path) => Parser::from_file(path).map_err(Error::from)?.parse()?,
    };
    writeln!(out, "{expr}")?;
    writeln!(out, "{}", evaluate(&expr)?)?;
    Ok(())
}

fn main() -> ExitCode {
    let Some(input) = parse_args(std::env::args().skip(1)) else {
        let _ = writeln!(io::stderr(), "{USAGE}");
        return ExitCode::from(2);
    };
    match run(&input, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let _ = writeln!(io::stderr(), "sigmath: {e}");
            ExitCode::FAILURE
        }
    }
}
