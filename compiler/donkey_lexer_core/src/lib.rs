//! Standalone tokenizer for Donkey syntax highlighting.
//!
//! Splits Donkey source into classified spans ([`Token`]) by trying an
//! ordered list of rules at each position ([`RuleTable`]). The result
//! covers the whole input: token texts concatenate back to the source, and
//! characters no rule accepts come out as [`Category::Unknown`].
//!
//! This crate has no `donkey_*` dependencies. The host integration
//! (registry, HTML rendering, logging) lives in `donkey_lexer`.
//!
//! ```
//! use donkey_lexer_core::{tokenize, Category};
//!
//! let categories: Vec<_> = tokenize("if x").map(|t| t.category).collect();
//! assert_eq!(
//!     categories,
//!     [Category::ReservedKeyword, Category::Whitespace, Category::Identifier]
//! );
//! ```

mod category;
mod cursor;
pub mod keywords;
mod rules;
mod scanner;
mod span;
mod token;

pub use category::Category;
pub use cursor::Cursor;
pub use rules::{
    is_punctuation, is_space, is_word_char, Corrections, Matcher, Rule, RuleTable, RULE_COUNT,
};
pub use scanner::Tokens;
pub use span::Span;
pub use token::Token;

/// The historical Donkey rule table, shared by every [`tokenize`] call.
pub static DONKEY: RuleTable = RuleTable::donkey();

/// Tokenize `text` with the historical Donkey rules.
///
/// Returns a lazy iterator; empty input yields no tokens.
pub fn tokenize(text: &str) -> Tokens<'static, '_> {
    Tokens::new(&DONKEY, text)
}
