use pretty_assertions::assert_eq;

use super::*;
use crate::{Category, Corrections};

fn spans(tokens: Tokens<'_, '_>) -> Vec<(u32, u32)> {
    tokens.map(|t| (t.span.start, t.span.end)).collect()
}

#[test]
fn empty_input_yields_nothing() {
    let table = RuleTable::donkey();
    let mut tokens = Tokens::new(&table, "");
    assert_eq!(tokens.size_hint(), (0, Some(0)));
    assert_eq!(tokens.next(), None);
}

#[test]
fn spans_are_contiguous() {
    let table = RuleTable::donkey();
    let tokens = Tokens::new(&table, "x := 1");
    assert_eq!(
        spans(tokens),
        vec![(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 6)]
    );
}

#[test]
fn token_text_matches_span() {
    let source = "func add(a, b)\n  return a + b\nend";
    let table = RuleTable::donkey();
    for token in Tokens::new(&table, source) {
        let range = token.span.start as usize..token.span.end as usize;
        assert_eq!(&source[range], token.text);
        assert_eq!(token.len(), token.span.len() as usize);
        assert!(!token.is_empty());
    }
}

#[test]
fn multibyte_unknown_keeps_boundaries() {
    let table = RuleTable::donkey();
    let tokens: Vec<_> = Tokens::new(&table, "a→b").collect();
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[1].text, "→");
    assert_eq!(tokens[1].category, Category::Unknown);
    assert_eq!(tokens[1].span, Span::new(1, 4));
}

#[test]
fn iterator_is_fused() {
    let table = RuleTable::donkey();
    let mut tokens = Tokens::new(&table, "x");
    assert!(tokens.next().is_some());
    assert_eq!(tokens.next(), None);
    assert_eq!(tokens.next(), None);
}

#[test]
fn restart_rewinds() {
    let table = RuleTable::donkey();
    let mut tokens = Tokens::new(&table, "a b");
    let first: Vec<_> = tokens.by_ref().collect();
    assert_eq!(tokens.offset(), 3);
    tokens.restart();
    assert_eq!(tokens.offset(), 0);
    let second: Vec<_> = tokens.collect();
    assert_eq!(first, second);
}

#[test]
fn clone_snapshots_position() {
    let table = RuleTable::donkey();
    let mut tokens = Tokens::new(&table, "if x");
    tokens.next();
    let snapshot = tokens.clone();
    let rest: Vec<_> = tokens.collect();
    let replayed: Vec<_> = snapshot.collect();
    assert_eq!(rest, replayed);
    assert_eq!(rest.len(), 2);
}

#[test]
fn size_hint_bounds_remaining_tokens() {
    let table = RuleTable::donkey();
    let source = "loop\n  x = x - 1\nend";
    let tokens = Tokens::new(&table, source);
    let (lower, upper) = tokens.size_hint();
    let count = tokens.count();
    assert!(lower <= count);
    assert!(upper.is_some_and(|u| count <= u));
}

#[test]
fn accessors() {
    let table = RuleTable::with_corrections(Corrections::SPLIT_UNTIL_WHILE);
    let tokens = Tokens::new(&table, "while");
    assert_eq!(tokens.source(), "while");
    assert_eq!(tokens.table().corrections(), Corrections::SPLIT_UNTIL_WHILE);
}
