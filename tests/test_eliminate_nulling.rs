mod support;

use cfg_cnf::*;

#[test]
fn test_textbook_nullable() {
    support::init_logger();
    let mut cfg = support::textbook_grammar();
    let nullable = cfg.nullable_symbols();
    let nullable: Vec<_> = nullable.iter().map(|sym| cfg.display_name(sym)).collect();
    assert_eq!(nullable, ["C"]);

    assert!(!cfg.eliminate_nulling_rules());
    support::assert_eq_rules(
        &cfg,
        &[
            ("S", &["b", "A"]),
            ("S", &["B", "C"]),
            ("S", &["B"]),
            ("A", &["a"]),
            ("A", &["a", "S"]),
            ("A", &["b", "A", "a", "A", "b"]),
            ("B", &["A"]),
            ("B", &["b", "S"]),
            ("B", &["a", "A", "a"]),
            ("C", &["A", "B"]),
            ("D", &["A", "B"]),
        ],
    );
}

#[test]
fn test_eliminate_nulling() {
    let mut cfg = Cfg::builder()
        .non_terminals(["start", "A", "B", "C"])
        .terminals(["x", "y"])
        .start("start")
        .production("start", ["A", "x", "B"])
        .production("start", ["C"])
        .production("B", ["A", "A"])
        .production("B", ["A", "C"])
        .production("C", ["x"])
        .production("C", ["y"])
        .production("A", Vec::<&str>::new())
        .build()
        .unwrap();

    let before = cfg.clone();
    assert!(!cfg.eliminate_nulling_rules());
    assert_ne!(before, cfg);
    support::assert_eq_rules(
        &cfg,
        &[
            ("start", &["A", "x", "B"]),
            ("start", &["x", "B"]),
            ("start", &["A", "x"]),
            ("start", &["x"]),
            ("start", &["C"]),
            ("B", &["A", "A"]),
            ("B", &["A"]),
            ("B", &["A", "C"]),
            ("B", &["C"]),
            ("C", &["x"]),
            ("C", &["y"]),
        ],
    );
    let a = cfg.lookup("A").unwrap();
    assert!(cfg.is_non_terminal(a));
    assert_eq!(cfg.rhs_of(a).count(), 0);
}

#[test]
fn test_nullable_closure() {
    let mut cfg = Cfg::new();
    let [start, a, b] = cfg.nonterminals_named(["S", "A", "B"]);
    cfg.rule(start).rhs([a]).rule(a).rhs([b, b]).rule(b).rhs([]);
    cfg.set_start(start);

    let nullable = cfg.nullable_symbols();
    assert!(nullable[start] && nullable[a] && nullable[b]);

    assert!(cfg.eliminate_nulling_rules());
    support::assert_eq_rules(&cfg, &[("S", &["A"]), ("A", &["B", "B"]), ("A", &["B"])]);
}

#[test]
fn test_occurrences_are_independent() {
    let mut cfg = Cfg::builder()
        .non_terminals(["S", "A"])
        .terminals(["a", "b"])
        .start("S")
        .production("S", ["A", "a", "A"])
        .production("A", Vec::<&str>::new())
        .production("A", ["b"])
        .build()
        .unwrap();

    cfg.eliminate_nulling_rules();
    support::assert_eq_rules(
        &cfg,
        &[
            ("S", &["A", "a", "A"]),
            ("S", &["a", "A"]),
            ("S", &["A", "a"]),
            ("S", &["a"]),
            ("A", &["b"]),
        ],
    );
}

#[test]
fn test_preserves_nonempty_language() {
    let cfg = support::textbook_grammar();
    let mut eliminated = cfg.clone();
    eliminated.eliminate_nulling_rules();
    assert!(eliminated.rules().all(|rule| !rule.is_nulling()));
    assert_eq!(
        support::nonempty_language_up_to(&cfg, 7),
        support::language_up_to(&eliminated, 7)
    );
}
