//! `lex`: print classified tokens for one or more files.

use donkey_lexer::{DonkeyLexer, Token};
use rayon::prelude::*;

use super::read_file;
use crate::options::CliOptions;

/// Tokenize every path in `options` and print the dumps in argument order.
///
/// Files are read and tokenized in parallel. Returns `false` if any file
/// could not be read; the others are still printed.
pub fn lex_files(options: &CliOptions) -> bool {
    let lexer = DonkeyLexer::with_corrections(options.corrections);

    let results: Vec<_> = options
        .paths
        .par_iter()
        .map(|path| -> Result<String, String> {
            let source = read_file(path)?;
            Ok(format_token_dump(path, &lexer.lex(&source)))
        })
        .collect();

    let mut ok = true;
    for result in results {
        match result {
            Ok(dump) => print!("{dump}"),
            Err(msg) => {
                eprintln!("{msg}");
                ok = false;
            }
        }
    }
    ok
}

/// Render a token dump:
///
/// ```text
/// Tokens for 'main.dk' (3 tokens):
///   ReservedKeyword "if" @ 0..2
///   Whitespace " " @ 2..3
///   Identifier "x" @ 3..4
/// ```
pub fn format_token_dump(path: &str, tokens: &[Token<'_>]) -> String {
    let mut out = format!("Tokens for '{path}' ({} tokens):\n", tokens.len());
    for token in tokens {
        out.push_str(&format!(
            "  {} {:?} @ {}\n",
            token.category, token.text, token.span
        ));
    }
    out
}
