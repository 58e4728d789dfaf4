//! Interactive mode: scan one line of input at a time.
//!
//! Each line is an independent buffer fed through one scan. A failed scan
//! prints the rendered error and the loop continues; so does a failed
//! read. End of input ends the session.

use std::io::{self, BufRead, Write};

use madruga_lexer::scan;

/// Run the interactive scanner until end of input.
pub fn repl() {
    println!();
    println!("-----------* Madruga language *-----------");

    let stdin = io::stdin();
    let mut input = String::new();
    loop {
        print!("\n>> ");
        let _ = io::stdout().flush();

        input.clear();
        match stdin.lock().read_line(&mut input) {
            Ok(0) => break,
            Ok(_) => {}
            Err(error) => {
                eprintln!("[REPL ERROR] {error}");
                continue;
            }
        }

        tracing::trace!(bytes = input.len(), "scanning line");
        let result = scan(&input);
        match result.error {
            Some(error) => eprintln!("{error}"),
            None => {
                for token in &result.tokens {
                    println!("{token}");
                }
            }
        }
    }
}
