//! Donkey lexer as seen by a documentation host.
//!
//! Wraps the standalone tokenizer from `donkey_lexer_core` behind the
//! [`SyntaxLexer`] trait, registers it under the stable name `donkey` in an
//! explicit [`LexerRegistry`], and renders classified spans as HTML.
//!
//! The host builds one registry at startup and passes it to whatever renders:
//!
//! ```
//! use donkey_lexer::{render_html, HtmlOptions, LexerRegistry};
//!
//! let registry = LexerRegistry::with_builtin();
//! let html = render_html(&registry, "donkey", "end", &HtmlOptions::default()).unwrap();
//! assert_eq!(html, "<div class=\"highlight\"><pre><span class=\"kr\">end</span></pre></div>\n");
//! ```

mod error;
mod html;
mod registry;

pub use donkey_lexer_core::{tokenize, Category, Corrections, RuleTable, Span, Token, Tokens};
pub use error::RegistryError;
pub use html::{escape_html, render_html, HtmlFormatter, HtmlOptions};
pub use registry::LexerRegistry;

/// A named tokenizer a documentation host can look up.
///
/// Implementations are immutable once built and shared between threads.
pub trait SyntaxLexer: Send + Sync {
    /// Primary, stable lookup name.
    fn name(&self) -> &str;

    /// Extra lookup names.
    fn aliases(&self) -> &[&'static str] {
        &[]
    }

    /// Lazily tokenize `source`.
    fn tokens<'a>(&'a self, source: &'a str) -> Box<dyn Iterator<Item = Token<'a>> + 'a>;
}

/// The Donkey lexer.
#[derive(Clone, Debug, Default)]
pub struct DonkeyLexer {
    table: RuleTable,
}

impl DonkeyLexer {
    /// Stable registration name.
    pub const NAME: &'static str = "donkey";

    /// Lexer with the historical rule order.
    pub const fn new() -> Self {
        Self {
            table: RuleTable::donkey(),
        }
    }

    /// Lexer with the given ordering corrections applied.
    pub fn with_corrections(corrections: Corrections) -> Self {
        Self {
            table: RuleTable::with_corrections(corrections),
        }
    }

    pub fn corrections(&self) -> Corrections {
        self.table.corrections()
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    /// Lazily tokenize `source`.
    pub fn tokenize<'a>(&'a self, source: &'a str) -> Tokens<'a, 'a> {
        Tokens::new(&self.table, source)
    }

    /// Tokenize `source` eagerly, logging a summary.
    pub fn lex<'a>(&'a self, source: &'a str) -> Vec<Token<'a>> {
        let tokens: Vec<_> = self.tokenize(source).collect();
        let mut unknown = 0usize;
        for token in tokens.iter().filter(|t| t.category == Category::Unknown) {
            unknown += 1;
            tracing::trace!(span = %token.span, text = ?token.text, "unclassified character");
        }
        tracing::debug!(
            bytes = source.len(),
            tokens = tokens.len(),
            unknown,
            "tokenized donkey source"
        );
        tokens
    }
}

impl SyntaxLexer for DonkeyLexer {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn tokens<'a>(&'a self, source: &'a str) -> Box<dyn Iterator<Item = Token<'a>> + 'a> {
        Box::new(self.tokenize(source))
    }
}
