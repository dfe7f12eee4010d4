//! Token categories assigned by the rule table.
//!
//! The set is fixed. Each category knows the dotted highlight type a
//! documentation host styles it with and the short CSS class emitted in
//! rendered HTML.

use std::fmt;

/// Classification of a single span.
///
/// `#[repr(u8)]` keeps tokens compact. `Unknown` is never produced by a
/// rule; it marks a character no rule accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Category {
    /// `// ...` through the end of the line, newline included.
    Comment = 0,
    /// Control-flow and operator words (`if`, `loop`, `div`, `func`, ...).
    ReservedKeyword = 1,
    /// I/O and jump statements (`input`, `output`, `break`, `continue`, `return`).
    NamespaceStatement = 2,
    /// Built-in type names (`int`, `str`, `real`, `stack`, `queue`, `collection`).
    TypeKeyword = 3,
    /// Single- or double-quoted text, quotes included.
    String = 4,
    /// A single whitespace character.
    Whitespace = 5,
    /// `[_A-Za-z][_A-Za-z0-9]*`.
    Identifier = 6,
    /// A single punctuation character.
    Punctuation = 7,
    /// `true`, `false`, `null`.
    Constant = 8,
    /// Optionally signed decimal number.
    Number = 9,
    /// A character no rule matched.
    Unknown = 255,
}

impl Category {
    /// Every category, in rule-table order, followed by `Unknown`.
    pub const ALL: [Category; 11] = [
        Category::Comment,
        Category::ReservedKeyword,
        Category::NamespaceStatement,
        Category::TypeKeyword,
        Category::String,
        Category::Whitespace,
        Category::Identifier,
        Category::Punctuation,
        Category::Constant,
        Category::Number,
        Category::Unknown,
    ];

    /// Stable human-readable name, used in token dumps.
    pub const fn name(self) -> &'static str {
        match self {
            Category::Comment => "Comment",
            Category::ReservedKeyword => "ReservedKeyword",
            Category::NamespaceStatement => "NamespaceStatement",
            Category::TypeKeyword => "TypeKeyword",
            Category::String => "String",
            Category::Whitespace => "Whitespace",
            Category::Identifier => "Identifier",
            Category::Punctuation => "Punctuation",
            Category::Constant => "Constant",
            Category::Number => "Number",
            Category::Unknown => "Unknown",
        }
    }

    /// Dotted highlight type understood by documentation hosts.
    pub const fn token_type(self) -> &'static str {
        match self {
            Category::Comment => "Comment",
            Category::ReservedKeyword => "Keyword.Reserved",
            Category::NamespaceStatement => "Keyword.Namespace",
            Category::TypeKeyword => "Keyword.Type",
            Category::String => "Literal.String",
            Category::Whitespace => "Text.Whitespace",
            Category::Identifier => "Name",
            Category::Punctuation => "Text",
            Category::Constant => "Keyword.Constant",
            Category::Number => "Literal.Number",
            Category::Unknown => "Error",
        }
    }

    /// Short CSS class for rendered HTML.
    ///
    /// Plain text (`Punctuation`) has no class and renders unwrapped.
    pub const fn css_class(self) -> Option<&'static str> {
        match self {
            Category::Comment => Some("c"),
            Category::ReservedKeyword => Some("kr"),
            Category::NamespaceStatement => Some("kn"),
            Category::TypeKeyword => Some("kt"),
            Category::String => Some("s"),
            Category::Whitespace => Some("w"),
            Category::Identifier => Some("n"),
            Category::Punctuation => None,
            Category::Constant => Some("kc"),
            Category::Number => Some("m"),
            Category::Unknown => Some("err"),
        }
    }

    /// Returns `true` for the three whole-word keyword categories.
    pub const fn is_keyword(self) -> bool {
        matches!(
            self,
            Category::ReservedKeyword | Category::NamespaceStatement | Category::TypeKeyword
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
