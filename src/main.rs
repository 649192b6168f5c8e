//! wikilex CLI - dump the token stream of a wikitext document

use std::io::{self, Read, Write};

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    // Simple usage: read from stdin or file
    let input = if args.len() > 1 && args[1] != "-" {
        std::fs::read_to_string(&args[1])?
    } else {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for token in wikilex::tokenize(&input) {
        writeln!(
            out,
            "{:>5}  {:<14} {:?}",
            token.line(),
            token.kind(),
            token.value()
        )?;
    }

    Ok(())
}
