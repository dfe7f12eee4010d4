//! Ordered first-match-wins rule table.
//!
//! A [`Rule`] pairs a matcher with the [`Category`] it assigns. At each
//! position the table tries its rules in order and the first matcher that
//! accepts decides the span. The order is part of the contract:
//!
//! 1. line comment, 2. reserved word, 3. statement word, 4. type word,
//! 5. quoted string, 6. whitespace, 7. identifier, 8. punctuation,
//! 9. constant, 10. number.
//!
//! Two consequences of that order are kept on purpose in the default table
//! and can only be changed through [`Corrections`]:
//!
//! - rule 7 swallows `true`/`false`/`null` before rule 9 sees them;
//! - rule 8 swallows a leading `-` before rule 10 can read a signed number.
//!
//! When nothing matches, [`RuleTable::classify`] falls back to a one-character
//! [`Category::Unknown`] span, so scanning always makes progress.

use std::fmt;

use bitflags::bitflags;
use unicode_general_category::{get_general_category, GeneralCategory};

use crate::cursor::Cursor;
use crate::keywords;
use crate::Category;

bitflags! {
    /// Opt-in fixes for known ordering issues in the default table.
    ///
    /// The empty set reproduces the historical classification exactly.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct Corrections: u8 {
        /// Reserve `until` and `while` instead of the fused `untilwhile`.
        const SPLIT_UNTIL_WHILE = 1 << 0;
        /// Try whole-word constants before identifiers.
        const CONSTANTS_BEFORE_IDENTIFIERS = 1 << 1;
        /// Try numbers (with their optional `-`) before punctuation.
        const SIGNED_NUMBERS_BEFORE_PUNCTUATION = 1 << 2;
    }
}

impl Default for Corrections {
    fn default() -> Self {
        Corrections::empty()
    }
}

impl Corrections {
    /// Parse a correction by its kebab-case name.
    pub fn from_kebab_name(name: &str) -> Option<Self> {
        match name {
            "split-until-while" => Some(Corrections::SPLIT_UNTIL_WHILE),
            "constants-before-identifiers" => Some(Corrections::CONSTANTS_BEFORE_IDENTIFIERS),
            "signed-numbers-before-punctuation" => {
                Some(Corrections::SIGNED_NUMBERS_BEFORE_PUNCTUATION)
            }
            _ => None,
        }
    }

    /// Kebab-case names accepted by [`from_kebab_name`](Self::from_kebab_name).
    pub const NAMES: [&'static str; 3] = [
        "split-until-while",
        "constants-before-identifiers",
        "signed-numbers-before-punctuation",
    ];
}

/// Returns the length of the match at the cursor, or `None`.
///
/// Matchers take the cursor by value and never report a zero-length match.
pub type Matcher = fn(Cursor<'_>) -> Option<usize>;

/// A matcher plus the category it assigns.
#[derive(Clone, Copy)]
pub struct Rule {
    name: &'static str,
    category: Category,
    matcher: Matcher,
}

impl Rule {
    const fn new(name: &'static str, category: Category, matcher: Matcher) -> Self {
        Self {
            name,
            category,
            matcher,
        }
    }

    /// Short descriptive name (`"line-comment"`, `"identifier"`, ...).
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Category assigned when this rule matches.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Length of this rule's match at `cursor`, if any.
    #[inline]
    pub fn matches(&self, cursor: Cursor<'_>) -> Option<usize> {
        (self.matcher)(cursor).filter(|&len| len > 0)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("category", &self.category)
            .finish_non_exhaustive()
    }
}

/// Number of rules in every table.
pub const RULE_COUNT: usize = 10;

/// Historical rule order.
const FAITHFUL_RULES: [Rule; RULE_COUNT] = [
    Rule::new("line-comment", Category::Comment, line_comment),
    Rule::new("reserved-word", Category::ReservedKeyword, reserved_word),
    Rule::new("statement-word", Category::NamespaceStatement, statement_word),
    Rule::new("type-word", Category::TypeKeyword, type_word),
    Rule::new("quoted-string", Category::String, quoted_string),
    Rule::new("whitespace", Category::Whitespace, whitespace),
    Rule::new("identifier", Category::Identifier, identifier),
    Rule::new("punctuation", Category::Punctuation, punctuation),
    Rule::new("constant", Category::Constant, constant_prefix),
    Rule::new("number", Category::Number, number),
];

/// Immutable, ordered rule list.
///
/// Built once and shared: `RuleTable` is `Send + Sync` and holds no
/// per-call state.
#[derive(Clone, Debug)]
pub struct RuleTable {
    rules: [Rule; RULE_COUNT],
    corrections: Corrections,
}

impl RuleTable {
    /// The historical table, with no corrections applied.
    pub const fn donkey() -> Self {
        Self {
            rules: FAITHFUL_RULES,
            corrections: Corrections::empty(),
        }
    }

    /// Build a table with the given corrections applied on top of the
    /// historical order.
    pub fn with_corrections(corrections: Corrections) -> Self {
        let mut rules = FAITHFUL_RULES;

        if corrections.contains(Corrections::SPLIT_UNTIL_WHILE) {
            replace_matcher(&mut rules, Category::ReservedKeyword, reserved_word_split);
        }
        if corrections.contains(Corrections::CONSTANTS_BEFORE_IDENTIFIERS) {
            replace_matcher(&mut rules, Category::Constant, constant_word);
            move_before(&mut rules, Category::Constant, Category::Identifier);
        }
        if corrections.contains(Corrections::SIGNED_NUMBERS_BEFORE_PUNCTUATION) {
            move_before(&mut rules, Category::Number, Category::Punctuation);
        }

        Self { rules, corrections }
    }

    /// Rules in evaluation order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Corrections this table was built with.
    pub fn corrections(&self) -> Corrections {
        self.corrections
    }

    /// Classify the span starting at `cursor`.
    ///
    /// Returns the winning category and the span length in bytes. When no
    /// rule matches, returns [`Category::Unknown`] covering one character.
    /// At EOF returns a zero length.
    pub fn classify(&self, cursor: Cursor<'_>) -> (Category, usize) {
        for rule in &self.rules {
            if let Some(len) = rule.matches(cursor) {
                return (rule.category, len);
            }
        }
        let width = cursor.current_char().map_or(0, char::len_utf8);
        (Category::Unknown, width)
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::donkey()
    }
}

fn replace_matcher(rules: &mut [Rule], category: Category, matcher: Matcher) {
    if let Some(rule) = rules.iter_mut().find(|r| r.category == category) {
        rule.matcher = matcher;
    }
}

/// Move the rule for `moved` to sit directly before the rule for `anchor`,
/// keeping every other rule's relative order.
fn move_before(rules: &mut [Rule], moved: Category, anchor: Category) {
    let position = |category: Category| rules.iter().position(|r| r.category == category);
    if let (Some(from), Some(to)) = (position(moved), position(anchor)) {
        if from > to {
            rules[to..=from].rotate_right(1);
        }
    }
}

// ─── Character classes ───────────────────────────────────────────

/// Word characters for boundary checks: `_`, letters (`L*`) and numbers
/// (`N*`).
///
/// Combining and spacing marks (`M*`) are not word characters even where
/// Unicode counts them as alphabetic, so `for\u{903}` still ends on a
/// boundary.
#[inline]
pub fn is_word_char(c: char) -> bool {
    if c == '_' || c.is_ascii_alphanumeric() {
        return true;
    }
    if c.is_ascii() {
        return false;
    }
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::DecimalNumber
            | GeneralCategory::LetterNumber
            | GeneralCategory::OtherNumber
    )
}

/// Whitespace as the historical pattern saw it.
///
/// `char::is_whitespace` plus the information separators `\x1c`-`\x1f`.
#[inline]
pub fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

#[inline]
fn is_ident_start(b: u8) -> bool {
    b == b'_' || b.is_ascii_alphabetic()
}

#[inline]
fn is_ident_continue(b: u8) -> bool {
    b == b'_' || b.is_ascii_alphanumeric()
}

/// `- ! $ % ^ & * ( ) _ + | ~ = ` { } [ ] : ; < > ? , . /`
#[inline]
pub fn is_punctuation(b: u8) -> bool {
    matches!(
        b,
        b'-' | b'!'
            | b'$'
            | b'%'
            | b'^'
            | b'&'
            | b'*'
            | b'('
            | b')'
            | b'_'
            | b'+'
            | b'|'
            | b'~'
            | b'='
            | b'`'
            | b'{'
            | b'}'
            | b'['
            | b']'
            | b':'
            | b';'
            | b'<'
            | b'>'
            | b'?'
            | b','
            | b'.'
            | b'/'
    )
}

// ─── Matchers ────────────────────────────────────────────────────

/// `//` through the next `\n`, newline included. Requires the newline.
fn line_comment(mut cursor: Cursor<'_>) -> Option<usize> {
    if cursor.current() != b'/' || cursor.peek() != b'/' {
        return None;
    }
    let start = cursor.pos();
    cursor.advance_n(2);
    if !cursor.eat_until(b'\n') {
        return None;
    }
    cursor.advance();
    Some(cursor.pos() - start)
}

/// The word at the cursor, if it starts on a word boundary.
///
/// The boundary holds when the previous character is not a word
/// character. The word runs over every following word character, so a
/// trailing boundary is implied.
fn word_at<'a>(cursor: Cursor<'a>) -> Option<&'a str> {
    if cursor.prev_char().is_some_and(is_word_char) {
        return None;
    }
    let start = cursor.pos();
    let mut end = cursor;
    end.eat_while_char(is_word_char);
    let word = end.slice_from(start);
    (!word.is_empty()).then_some(word)
}

fn whole_word(cursor: Cursor<'_>, is_member: impl Fn(&str) -> bool) -> Option<usize> {
    word_at(cursor)
        .filter(|word| is_member(word))
        .map(str::len)
}

fn reserved_word(cursor: Cursor<'_>) -> Option<usize> {
    whole_word(cursor, |w| keywords::is_reserved(w, false))
}

fn reserved_word_split(cursor: Cursor<'_>) -> Option<usize> {
    whole_word(cursor, |w| keywords::is_reserved(w, true))
}

fn statement_word(cursor: Cursor<'_>) -> Option<usize> {
    whole_word(cursor, keywords::is_statement)
}

fn type_word(cursor: Cursor<'_>) -> Option<usize> {
    whole_word(cursor, keywords::is_type)
}

/// `"..."` or `'...'` with no inner quote of the same kind.
///
/// Newlines are allowed inside. An unterminated quote does not match.
fn quoted_string(mut cursor: Cursor<'_>) -> Option<usize> {
    let quote = cursor.current();
    if quote != b'"' && quote != b'\'' {
        return None;
    }
    let start = cursor.pos();
    cursor.advance();
    if !cursor.eat_until(quote) {
        return None;
    }
    cursor.advance();
    Some(cursor.pos() - start)
}

/// A single whitespace character.
fn whitespace(cursor: Cursor<'_>) -> Option<usize> {
    cursor
        .current_char()
        .filter(|&c| is_space(c))
        .map(char::len_utf8)
}

/// `[_A-Za-z][_A-Za-z0-9]*`
fn identifier(mut cursor: Cursor<'_>) -> Option<usize> {
    if !is_ident_start(cursor.current()) {
        return None;
    }
    let start = cursor.pos();
    cursor.advance();
    cursor.eat_while(is_ident_continue);
    Some(cursor.pos() - start)
}

/// A single punctuation character.
fn punctuation(cursor: Cursor<'_>) -> Option<usize> {
    is_punctuation(cursor.current()).then_some(1)
}

/// `true|false|null` as a plain prefix, no boundary check.
fn constant_prefix(cursor: Cursor<'_>) -> Option<usize> {
    let rest = cursor.rest();
    keywords::CONSTANTS
        .iter()
        .find(|word| rest.starts_with(**word))
        .map(|word| word.len())
}

/// `true|false|null` as whole words.
fn constant_word(cursor: Cursor<'_>) -> Option<usize> {
    whole_word(cursor, keywords::is_constant)
}

/// `-?[0-9]+(\.[0-9]+)?`
///
/// A `.` is only consumed when a digit follows it.
fn number(mut cursor: Cursor<'_>) -> Option<usize> {
    let start = cursor.pos();
    if cursor.current() == b'-' {
        cursor.advance();
    }
    if !cursor.current().is_ascii_digit() {
        return None;
    }
    cursor.eat_while(|b| b.is_ascii_digit());
    if cursor.current() == b'.' && cursor.peek().is_ascii_digit() {
        cursor.advance();
        cursor.eat_while(|b| b.is_ascii_digit());
    }
    Some(cursor.pos() - start)
}
