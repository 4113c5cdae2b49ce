//! Larch front-end driver.
//!
//! `larch <file>` tokenizes a source file and prints one line per token:
//! resolved location, kind, and the token's text.

use larch_lexer::Scanner;
use larch_source::{SourceId, SourceMap};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" => {
            println!("larch {}", env!("CARGO_PKG_VERSION"));
        }
        path => lex_file(path),
    }
}

/// Tokenize a file and print its token stream.
fn lex_file(path: &str) {
    let mut map = SourceMap::new();
    let id = match map.load(path) {
        Ok(id) => id,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    for line in token_lines(&map, id) {
        println!("{line}");
    }
}

/// Render every token of a source as `file:line:col  kind  text`.
fn token_lines(map: &SourceMap, id: SourceId) -> Vec<String> {
    let source = map.get(id);
    Scanner::new(source.cursor())
        .map(|token| {
            let resolved = map.resolve(source.location(token.span.start));
            let text = &source.text()[token.span.to_range()];
            format!("{resolved}  {}  {text}", token.kind)
        })
        .collect()
}

fn print_usage() {
    println!("Larch lexer driver");
    println!();
    println!("Usage: larch <file>");
    println!();
    println!("Prints one line per token: location, kind, text.");
    println!();
    println!("Commands:");
    println!("  help       Show this help message");
    println!("  version    Show version information");
}

#[cfg(test)]
mod tests;
