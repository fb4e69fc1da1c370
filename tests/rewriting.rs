// tests/rewriting.rs
use lsys_flora::{Grammar, RuleError, SymbolSequence};

fn grammar(rules: &[(char, &str)]) -> Grammar {
    let mut grammar = Grammar::new();
    for &(key, body) in rules {
        grammar.add_rule(key, body);
    }
    grammar
}

#[test]
fn zero_iterations_returns_axiom() {
    let g = grammar(&[('A', "AB"), ('F', "FF")]);
    let out = g.generate("F[+A]-F", 0);
    assert_eq!(out.to_string(), "F[+A]-F");
    assert_eq!(out.len(), 7);
}

#[test]
fn substitution_is_not_recursive_within_a_generation() {
    let g = grammar(&[('A', "AB")]);
    assert_eq!(g.generate("A", 1).to_string(), "AB");
    assert_eq!(g.generate("A", 2).to_string(), "ABB");
    assert_eq!(g.generate("A", 3).to_string(), "ABBB");
}

#[test]
fn doubling_rule_grows_exponentially() {
    let g = grammar(&[('A', "AA")]);
    for k in 0..=10u32 {
        let out = g.generate("A", k);
        assert_eq!(out.len(), 1 << k, "generation {k}");
        assert!(out.iter().all(|c| c == 'A'));
    }
}

#[test]
fn arena_is_reclaimed_between_generations() {
    let g = grammar(&[('A', "AA")]);
    let out = g.generate("A", 12);
    assert_eq!(out.len(), 4096);
    assert!(out.detached() <= out.len());
}

#[test]
fn rewriting_first_and_last_symbols_keeps_the_rest() {
    let g = grammar(&[('X', "xyz")]);
    assert_eq!(g.generate("XabX", 1).to_string(), "xyzabxyz");

    let out = g.generate("Xab", 1);
    let head = out.head().and_then(|id| out.symbol(id));
    let tail = out.tail().and_then(|id| out.symbol(id));
    assert_eq!(head, Some('x'));
    assert_eq!(tail, Some('b'));
    assert_eq!(out.tail().and_then(|id| out.next(id)), None);
}

#[test]
fn sole_symbol_becomes_exactly_its_replacement() {
    let g = grammar(&[('X', "F[-FXL][+FXL]X")]);
    let out = g.generate("X", 1);
    assert_eq!(out.to_string(), "F[-FXL][+FXL]X");
    assert_eq!(out.len(), 14);
}

#[test]
fn symbols_without_rules_pass_through() {
    let g = grammar(&[('X', "F[-FXL][+FXL]X")]);
    assert_eq!(g.generate("FFX", 1).to_string(), "FFF[-FXL][+FXL]X");
    assert_eq!(g.generate("F+F-", 5).to_string(), "F+F-");
}

#[test]
fn empty_replacement_deletes_symbol() {
    let g = grammar(&[('B', "")]);
    assert_eq!(g.generate("ABA", 1).to_string(), "AA");
    assert_eq!(g.generate("BAB", 1).to_string(), "A");

    let gone = g.generate("BBB", 1);
    assert!(gone.is_empty());
    assert_eq!(gone.head(), None);
    assert_eq!(gone.tail(), None);
}

#[test]
fn empty_axiom_is_empty_sequence() {
    let g = grammar(&[('A', "AB")]);
    let out = g.generate("", 4);
    assert!(out.is_empty());
    assert_eq!(out.to_string(), "");
}

#[test]
fn last_rule_wins() {
    let mut g = grammar(&[('A', "AB")]);
    g.add_rule('A', "C");
    assert_eq!(g.len(), 1);
    assert_eq!(g.rule('A'), Some("C"));
    assert_eq!(g.generate("AA", 1).to_string(), "CC");
}

#[test]
fn clear_rules_leaves_input_untouched() {
    let mut g = grammar(&[('A', "AB")]);
    g.clear_rules();
    assert!(g.is_empty());
    assert_eq!(g.generate("A", 3).to_string(), "A");
}

#[test]
fn expand_once_works_on_a_caller_owned_sequence() {
    let g = grammar(&[('B', "[-FB][+FB]")]);
    let mut seq = SymbolSequence::parse("FB");
    g.expand_once(&mut seq);
    assert_eq!(seq.to_string(), "F[-FB][+FB]");
    g.expand_once(&mut seq);
    assert_eq!(seq.to_string(), "F[-F[-FB][+FB]][+F[-FB][+FB]]");
}

#[test]
fn checked_rules_follow_editor_constraints() {
    let mut g = Grammar::new();
    g.add_checked_rule("X", "F+F-X").unwrap();
    assert_eq!(g.rule('X'), Some("F+F-X"));

    assert!(matches!(
        g.add_checked_rule("XY", "F"),
        Err(RuleError::InvalidKey(key)) if key == "XY"
    ));
    assert!(matches!(
        g.add_checked_rule("+", "F"),
        Err(RuleError::InvalidKey(_))
    ));
    assert!(matches!(
        g.add_checked_rule("", "F"),
        Err(RuleError::InvalidKey(_))
    ));
    assert!(matches!(
        g.add_checked_rule("Y", "F[+F]"),
        Err(RuleError::InvalidBody { key: 'Y', .. })
    ));
    assert!(matches!(
        g.add_checked_rule("Y", ""),
        Err(RuleError::InvalidBody { .. })
    ));
    assert_eq!(g.len(), 1);
}
