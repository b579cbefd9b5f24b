#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet};

use cfg_cnf::*;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Rules of a grammar, with every symbol replaced by its name.
pub fn named_rules(cfg: &Cfg) -> BTreeSet<(String, Vec<String>)> {
    cfg.rules()
        .map(|rule| {
            let rhs = rule.rhs.iter().map(|&sym| cfg.display_name(sym)).collect();
            (cfg.display_name(rule.lhs), rhs)
        })
        .collect()
}

pub fn assert_eq_rules(cfg: &Cfg, expected: &[(&str, &[&str])]) {
    let expected: BTreeSet<(String, Vec<String>)> = expected
        .iter()
        .map(|&(lhs, rhs)| (lhs.to_string(), rhs.iter().map(|s| s.to_string()).collect()))
        .collect();
    assert_eq!(named_rules(cfg), expected);
}

/// All strings of terminals of length at most `max_len` that the start symbol
/// derives, the empty string included.
pub fn language_up_to(cfg: &Cfg, max_len: usize) -> BTreeSet<Vec<Symbol>> {
    let mut derived: BTreeMap<Symbol, BTreeSet<Vec<Symbol>>> = BTreeMap::new();
    loop {
        let mut changed = false;
        for rule in cfg.rules() {
            let mut strings: BTreeSet<Vec<Symbol>> = BTreeSet::new();
            strings.insert(vec![]);
            for &sym in rule.rhs {
                let parts: Vec<Vec<Symbol>> = if cfg.is_terminal(sym) {
                    vec![vec![sym]]
                } else {
                    derived
                        .get(&sym)
                        .map_or(vec![], |set| set.iter().cloned().collect())
                };
                let mut next = BTreeSet::new();
                for prefix in &strings {
                    for part in &parts {
                        if prefix.len() + part.len() <= max_len {
                            let mut string = prefix.clone();
                            string.extend(part.iter().cloned());
                            next.insert(string);
                        }
                    }
                }
                strings = next;
                if strings.is_empty() {
                    break;
                }
            }
            let entry = derived.entry(rule.lhs).or_default();
            for string in strings {
                changed |= entry.insert(string);
            }
        }
        if !changed {
            break;
        }
    }
    cfg.start()
        .and_then(|start| derived.remove(&start))
        .unwrap_or_default()
}

/// Language up to `max_len`, without the empty string.
pub fn nonempty_language_up_to(cfg: &Cfg, max_len: usize) -> BTreeSet<Vec<Symbol>> {
    let mut language = language_up_to(cfg, max_len);
    language.remove(&vec![]);
    language
}

pub fn assert_cnf_shape(cfg: &Cfg) {
    for rule in cfg.rules() {
        match *rule.rhs {
            [sym] => assert!(
                cfg.is_terminal(sym),
                "{} ::= {} is a unit rule",
                cfg.display_name(rule.lhs),
                cfg.display_name(sym)
            ),
            [left, right] => assert!(
                cfg.is_non_terminal(left) && cfg.is_non_terminal(right),
                "{} ::= {} {} mentions a terminal",
                cfg.display_name(rule.lhs),
                cfg.display_name(left),
                cfg.display_name(right)
            ),
            _ => panic!(
                "{} has a body of length {}",
                cfg.display_name(rule.lhs),
                rule.rhs.len()
            ),
        }
    }
    assert!(cfg.is_chomsky_normal_form());
}

/// Non-terminals `{S,A,B,C,D}`, terminals `{a,b}`, start `S`.
pub fn textbook_grammar() -> Cfg {
    Cfg::builder()
        .non_terminals(["S", "A", "B", "C", "D"])
        .terminals(["a", "b"])
        .start("S")
        .production("S", ["b", "A"])
        .production("S", ["B", "C"])
        .production("A", ["a"])
        .production("A", ["a", "S"])
        .production("A", ["b", "A", "a", "A", "b"])
        .production("B", ["A"])
        .production("B", ["b", "S"])
        .production("B", ["a", "A", "a"])
        .production("C", Vec::<&str>::new())
        .production("C", ["A", "B"])
        .production("D", ["A", "B"])
        .build()
        .unwrap()
}
