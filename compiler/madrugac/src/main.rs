//! Madruga lexer CLI.
//!
//! With no arguments, starts the interactive scanner. With a source path,
//! scans the file once and prints the token stream.

use madrugac::commands::{lex_file, repl};

fn main() {
    madrugac::init_tracing();

    let args: Vec<String> = std::env::args().collect();
    match args.len() {
        1 => repl(),
        2 if args[1] == "--help" || args[1] == "-h" => print_usage(),
        2 => lex_file(&args[1]),
        _ => {
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!("Usage: madruga [src path]");
    eprintln!();
    eprintln!("  madruga            start the interactive scanner");
    eprintln!("  madruga <file>     scan <file> and print its tokens");
}
