//! File mode: scan one file and print its token stream.

use madruga_lexer::scan;

use super::read_file;

/// Scan `path` and print the resulting tokens.
///
/// A syntax error prints its rendered message and fails the process.
pub fn lex_file(path: &str) {
    let content = read_file(path);
    tracing::debug!(path, bytes = content.len(), "scanning file");

    let result = scan(&content);
    if let Some(error) = result.error {
        eprintln!("{error}");
        std::process::exit(1);
    }

    println!("Tokens for '{}' ({} tokens):", path, result.tokens.len());
    for token in &result.tokens {
        println!("  {token}");
    }
}
