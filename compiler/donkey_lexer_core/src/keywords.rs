//! Fixed word sets for the whole-word rules.
//!
//! Lookups take an already-extracted word and answer membership with a
//! length-bucketed `match`, so no alternation pattern is rebuilt per rule.
//! Each set is also exposed as a slice for listings and tests.
//!
//! # `untilwhile`
//!
//! The reserved set historically contains the single word `untilwhile`
//! (two entries fused by a missing separator) instead of `until` and
//! `while`. [`is_reserved`] keeps that set unless `split_until_while` is
//! requested.

/// Reserved words, faithful set.
pub const RESERVED: &[&str] = &[
    "if",
    "else",
    "then",
    "do",
    "for",
    "untilwhile",
    "from",
    "to",
    "loop",
    "end",
    "div",
    "mod",
    "not",
    "and",
    "or",
    "func",
];

/// Words that replace `untilwhile` when the reserved set is split.
pub const SPLIT_UNTIL_WHILE: &[&str] = &["until", "while"];

/// Statement words.
pub const STATEMENTS: &[&str] = &["input", "output", "break", "continue", "return"];

/// Built-in type names.
pub const TYPES: &[&str] = &["int", "str", "real", "stack", "queue", "collection"];

/// Constant literals.
pub const CONSTANTS: &[&str] = &["true", "false", "null"];

/// Check whether `word` is a reserved word.
///
/// With `split_until_while`, `until` and `while` are reserved and
/// `untilwhile` is not.
#[inline]
pub fn is_reserved(word: &str, split_until_while: bool) -> bool {
    match word.len() {
        2 => matches!(word, "if" | "do" | "to" | "or"),
        3 => matches!(word, "for" | "end" | "div" | "mod" | "not" | "and"),
        4 => matches!(word, "else" | "then" | "from" | "loop" | "func"),
        5 => split_until_while && matches!(word, "until" | "while"),
        10 => !split_until_while && word == "untilwhile",
        _ => false,
    }
}

/// Check whether `word` is a statement word.
#[inline]
pub fn is_statement(word: &str) -> bool {
    match word.len() {
        5 => matches!(word, "input" | "break"),
        6 => matches!(word, "output" | "return"),
        8 => word == "continue",
        _ => false,
    }
}

/// Check whether `word` is a built-in type name.
#[inline]
pub fn is_type(word: &str) -> bool {
    match word.len() {
        3 => matches!(word, "int" | "str"),
        4 => word == "real",
        5 => matches!(word, "stack" | "queue"),
        10 => word == "collection",
        _ => false,
    }
}

/// Check whether `word` is a constant literal.
#[inline]
pub fn is_constant(word: &str) -> bool {
    matches!(word, "true" | "false" | "null")
}
