//! Builds grammars from symbol names.

use crate::error::GrammarError;
use crate::grammar::Cfg;

/// Builds a [`Cfg`] out of declared names, the way a grammar-text parser
/// hands over its result.
///
/// Use it like so:
/// ```
/// use cfg_cnf::Cfg;
///
/// let grammar = Cfg::builder()
///     .non_terminals(["Expr", "Term"])
///     .terminals(["+", "num"])
///     .start("Expr")
///     .production("Expr", ["Expr", "+", "Term"])
///     .production("Expr", ["Term"])
///     .production("Term", ["num"])
///     .build()
///     .unwrap();
/// assert_eq!(grammar.num_rules(), 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GrammarBuilder {
    non_terminals: Vec<String>,
    terminals: Vec<String>,
    start: Option<String>,
    productions: Vec<(String, Vec<String>)>,
}

impl GrammarBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares nonterminals.
    pub fn non_terminals<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.non_terminals.extend(names.into_iter().map(Into::into));
        self
    }

    /// Declares terminals.
    pub fn terminals<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.terminals.extend(names.into_iter().map(Into::into));
        self
    }

    /// Sets the start symbol.
    pub fn start<S: Into<String>>(mut self, name: S) -> Self {
        self.start = Some(name.into());
        self
    }

    /// Adds the rule `lhs ::= rhs`. An empty `rhs` adds `lhs ::= ε`.
    pub fn production<S, I, T>(mut self, lhs: S, rhs: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.productions
            .push((lhs.into(), rhs.into_iter().map(Into::into).collect()));
        self
    }

    /// Creates a [`Cfg`], rejecting malformed input.
    pub fn build(self) -> Result<Cfg, GrammarError> {
        let mut cfg = Cfg::new();

        for name in &self.non_terminals {
            if self.terminals.contains(name) {
                return Err(GrammarError::AmbiguousSymbol(name.clone()));
            }
            cfg.nonterminal(name);
        }
        for name in &self.terminals {
            cfg.terminal(name);
        }

        let start = self.start.ok_or(GrammarError::MissingStart)?;
        let start = match cfg.sym_source().lookup(&start) {
            Some(sym) if cfg.is_non_terminal(sym) => sym,
            _ => return Err(GrammarError::StartNotNonTerminal(start)),
        };
        cfg.set_start(start);

        for (lhs_name, rhs_names) in &self.productions {
            let lhs = match cfg.sym_source().lookup(lhs_name) {
                Some(sym) if cfg.is_non_terminal(sym) => sym,
                _ => return Err(GrammarError::LhsNotNonTerminal(lhs_name.clone())),
            };
            let mut rhs = Vec::with_capacity(rhs_names.len());
            for name in rhs_names {
                match cfg.sym_source().lookup(name) {
                    Some(sym) => rhs.push(sym),
                    None => {
                        return Err(GrammarError::UndeclaredSymbol {
                            lhs: lhs_name.clone(),
                            symbol: name.clone(),
                        })
                    }
                }
            }
            cfg.add_rule(lhs, &rhs);
        }

        cfg.validate()?;
        Ok(cfg)
    }
}
