//! `html`: print a file rendered as highlighted HTML.

use donkey_lexer::{DonkeyLexer, HtmlFormatter};

use super::read_file;
use crate::options::CliOptions;

/// Render `path` as HTML and print it.
///
/// Returns `false` if the file could not be read.
pub fn html_file(path: &str, options: &CliOptions) -> bool {
    let source = match read_file(path) {
        Ok(source) => source,
        Err(msg) => {
            eprintln!("{msg}");
            return false;
        }
    };
    let lexer = DonkeyLexer::with_corrections(options.corrections);
    let formatter = HtmlFormatter::new(options.html.clone());
    print!("{}", formatter.format(lexer.lex(&source)));
    true
}
