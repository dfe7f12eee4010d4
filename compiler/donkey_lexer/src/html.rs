//! HTML rendering of classified spans.
//!
//! Produces the markup documentation themes expect: a wrapper `<div>`
//! with a configurable class, an optional `<pre>`, and one
//! `<span class="..">` per run of same-category tokens. Categories without
//! a CSS class render as bare escaped text. The visual style for each class
//! comes from the host's stylesheet.

use crate::{Category, LexerRegistry, RegistryError, Token};

/// Rendering options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Class of the wrapper `<div>`.
    pub css_class: String,
    /// Wrap the spans in `<pre>`.
    pub wrap_pre: bool,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            css_class: "highlight".to_string(),
            wrap_pre: true,
        }
    }
}

/// Renders token streams as HTML.
#[derive(Clone, Debug, Default)]
pub struct HtmlFormatter {
    options: HtmlOptions,
}

impl HtmlFormatter {
    pub fn new(options: HtmlOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &HtmlOptions {
        &self.options
    }

    /// Render `tokens` to a new string.
    pub fn format<'a>(&self, tokens: impl IntoIterator<Item = Token<'a>>) -> String {
        let mut out = String::new();
        self.format_into(tokens, &mut out);
        out
    }

    /// Render `tokens`, appending to `out`.
    ///
    /// Adjacent tokens of the same category share one `<span>`.
    pub fn format_into<'a>(&self, tokens: impl IntoIterator<Item = Token<'a>>, out: &mut String) {
        out.push_str("<div class=\"");
        escape_into(&self.options.css_class, out);
        out.push_str("\">");
        if self.options.wrap_pre {
            out.push_str("<pre>");
        }

        let mut run: Option<(Category, String)> = None;
        for token in tokens {
            if let Some((category, text)) = &mut run {
                if *category == token.category {
                    text.push_str(token.text);
                    continue;
                }
            }
            if let Some((category, text)) = run.replace((token.category, token.text.to_string())) {
                write_run(category, &text, out);
            }
        }
        if let Some((category, text)) = run {
            write_run(category, &text, out);
        }

        if self.options.wrap_pre {
            out.push_str("</pre>");
        }
        out.push_str("</div>\n");
    }
}

fn write_run(category: Category, text: &str, out: &mut String) {
    match category.css_class() {
        Some(class) => {
            out.push_str("<span class=\"");
            out.push_str(class);
            out.push_str("\">");
            escape_into(text, out);
            out.push_str("</span>");
        }
        None => escape_into(text, out),
    }
}

/// Escape `&`, `<`, `>`, `"` and `'` for HTML text and attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_into(text, &mut out);
    out
}

fn escape_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

/// Look up `language` in `registry` and render `source` with it.
pub fn render_html(
    registry: &LexerRegistry,
    language: &str,
    source: &str,
    options: &HtmlOptions,
) -> Result<String, RegistryError> {
    let lexer = registry.lookup(language)?;
    tracing::debug!(language, bytes = source.len(), "rendering code block");
    Ok(HtmlFormatter::new(options.clone()).format(lexer.tokens(source)))
}
