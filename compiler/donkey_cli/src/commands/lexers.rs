//! `lexers`: list registered lexers and available corrections.

use donkey_lexer::{Corrections, LexerRegistry};

/// Print the registry listing.
pub fn list_lexers(registry: &LexerRegistry) {
    print!("{}", format_lexer_list(registry));
}

pub fn format_lexer_list(registry: &LexerRegistry) -> String {
    let mut out = String::from("Lexers:\n");
    for lexer in registry.iter() {
        let aliases = lexer.aliases();
        if aliases.is_empty() {
            out.push_str(&format!("  {}\n", lexer.name()));
        } else {
            out.push_str(&format!(
                "  {} (aliases: {})\n",
                lexer.name(),
                aliases.join(", ")
            ));
        }
    }
    out.push_str("\nCorrections (--fix=<name>):\n");
    for name in Corrections::NAMES {
        out.push_str(&format!("  {name}\n"));
    }
    out
}
