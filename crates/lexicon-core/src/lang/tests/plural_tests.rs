#![cfg(test)]

use crate::lang::plural::apply_plurals;

#[test]
fn test_article_clause() {
    let template = "There {PLURALA apple|apples} left";
    assert_eq!(apply_plurals(template, 1), "There is 1 apple left");
    assert_eq!(apply_plurals(template, 5), "There are 5 apples left");
    assert_eq!(apply_plurals(template, 0), "There are 0 apples left");
}

#[test]
fn test_plain_clause() {
    let template = "You own {PLURAL a house|houses}";
    assert_eq!(apply_plurals(template, 1), "You own a house");
    assert_eq!(apply_plurals(template, 2), "You own houses");
    assert_eq!(apply_plurals(template, 0), "You own houses");
}

#[test]
fn test_clause_branches_stop_at_closing_brace() {
    assert_eq!(apply_plurals("{PLURAL s} x {PLURAL a|b}", 2), "{PLURAL s} x b");
    assert_eq!(apply_plurals("{PLURALA s} x {PLURALA a|b}", 1), "{PLURALA s} x is 1 a");
    assert_eq!(apply_plurals("{PLURAL a|b} | {PLURAL c|d}", 1), "a | c");
}

#[test]
fn test_every_occurrence_is_rewritten() {
    let template = "{PLURAL x|xs} and {PLURAL y|ys}, {PLURALA z|zs}";
    assert_eq!(apply_plurals(template, 3), "xs and ys, are 3 zs");
    assert_eq!(apply_plurals(template, 1), "x and y, is 1 z");
}

#[test]
fn test_negative_amounts_are_plural() {
    assert_eq!(apply_plurals("{PLURALA point|points}", -1), "are -1 points");
}

#[test]
fn test_text_without_clauses_is_unchanged() {
    assert_eq!(apply_plurals("{PLURAL missing bar}", 2), "{PLURAL missing bar}");
    assert_eq!(apply_plurals("plain", 2), "plain");
}
