mod support;

use cfg_cnf::*;

fn base() -> GrammarBuilder {
    Cfg::builder()
        .non_terminals(["S", "A"])
        .terminals(["a"])
}

#[test]
fn test_build() {
    let cfg = base()
        .start("S")
        .production("S", ["A", "A"])
        .production("S", ["A", "A"])
        .production("A", ["a"])
        .production("A", Vec::<&str>::new())
        .build()
        .unwrap();

    assert_eq!(cfg.num_rules(), 3);
    assert_eq!(cfg.non_terminals().len(), 2);
    assert_eq!(cfg.terminals().len(), 1);
    assert_eq!(cfg.start(), cfg.lookup("S").ok());
    support::assert_eq_rules(&cfg, &[("S", &["A", "A"]), ("A", &["a"]), ("A", &[])]);
}

#[test]
fn test_missing_start() {
    let result = base().production("S", ["a"]).build();
    assert_eq!(result.unwrap_err(), GrammarError::MissingStart);
}

#[test]
fn test_start_not_non_terminal() {
    let result = base().start("a").build();
    assert_eq!(
        result.unwrap_err(),
        GrammarError::StartNotNonTerminal("a".to_string())
    );
    let result = base().start("Z").build();
    assert_eq!(
        result.unwrap_err(),
        GrammarError::StartNotNonTerminal("Z".to_string())
    );
}

#[test]
fn test_ambiguous_symbol() {
    let result = base().terminals(["A"]).start("S").build();
    assert_eq!(
        result.unwrap_err(),
        GrammarError::AmbiguousSymbol("A".to_string())
    );
}

#[test]
fn test_lhs_not_non_terminal() {
    let result = base().start("S").production("a", ["S"]).build();
    assert_eq!(
        result.unwrap_err(),
        GrammarError::LhsNotNonTerminal("a".to_string())
    );
}

#[test]
fn test_undeclared_symbol() {
    let result = base().start("S").production("S", ["a", "b"]).build();
    assert_eq!(
        result.unwrap_err(),
        GrammarError::UndeclaredSymbol {
            lhs: "S".to_string(),
            symbol: "b".to_string(),
        }
    );
}

#[test]
fn test_validate_hand_built() {
    let mut cfg = Cfg::new();
    let [start] = cfg.nonterminals_named(["S"]);
    let [x] = cfg.terminals_named(["x"]);
    cfg.rule(start).rhs([x]);
    assert_eq!(cfg.validate(), Err(GrammarError::MissingStart));

    cfg.set_start(x);
    assert_eq!(
        cfg.validate(),
        Err(GrammarError::StartNotNonTerminal("x".to_string()))
    );

    cfg.set_start(start);
    assert_eq!(cfg.validate(), Ok(()));

    cfg.declare_terminal(start);
    assert_eq!(
        cfg.validate(),
        Err(GrammarError::AmbiguousSymbol("S".to_string()))
    );
}

#[test]
fn test_unknown_name() {
    let cfg = base().start("S").build().unwrap();
    assert_eq!(
        cfg.lookup("B"),
        Err(GrammarError::UnknownSymbol("B".to_string()))
    );
}

#[test]
fn test_error_messages() {
    assert_eq!(
        GrammarError::MissingStart.to_string(),
        "The grammar does not have a start symbol"
    );
    let error = GrammarError::UndeclaredSymbol {
        lhs: "S".to_string(),
        symbol: "b".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "The symbol 'b' in a production of 'S' is never declared"
    );
}
