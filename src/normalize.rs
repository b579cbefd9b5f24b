//! The normalization pipeline from an arbitrary grammar to Chomsky Normal
//! Form.
//!
//! ```
//! use cfg_cnf::{Cfg, Normalizer};
//!
//! let grammar = Cfg::builder()
//!     .non_terminals(["S", "A"])
//!     .terminals(["a", "b"])
//!     .start("S")
//!     .production("S", ["a", "A", "b"])
//!     .production("A", ["a"])
//!     .production("A", Vec::<&str>::new())
//!     .build()
//!     .unwrap();
//!
//! let normal_form = Normalizer::new().normalize(&grammar).unwrap();
//! assert!(normal_form.grammar.is_chomsky_normal_form());
//! assert!(!normal_form.derives_empty);
//! ```

use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::binarized::Collapse;
use crate::error::GrammarError;
use crate::grammar::Cfg;
use crate::symbol::FreshSymbols;

/// Settings of a normalization run.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NormalizeOptions {
    /// Prefix of the names of introduced nonterminals.
    pub fresh_prefix: String,
    /// Which end of a long RHS is paired first.
    pub collapse: Collapse,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        NormalizeOptions {
            fresh_prefix: "X".to_string(),
            collapse: Collapse::Right,
        }
    }
}

/// One step of the pipeline. Steps run in the order of [`Stage::ALL`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Stage {
    /// Removes rules deriving the empty string.
    EliminateNulling,
    /// Removes rules of the form `A ::= B`.
    EliminateUnitRules,
    /// Removes nonterminals unreachable from the start symbol.
    RemoveUnreachable,
    /// Removes nonterminals that derive no string of terminals.
    RemoveUnproductive,
    /// Isolates the start symbol and terminals, then splits long rules.
    Binarize,
}

impl Stage {
    /// All stages, in pipeline order.
    pub const ALL: [Stage; 5] = [
        Stage::EliminateNulling,
        Stage::EliminateUnitRules,
        Stage::RemoveUnreachable,
        Stage::RemoveUnproductive,
        Stage::Binarize,
    ];

    fn run(self, grammar: &mut Cfg, fresh: &mut FreshSymbols, options: &NormalizeOptions) {
        match self {
            Stage::EliminateNulling => {
                grammar.eliminate_nulling_rules();
            }
            Stage::EliminateUnitRules => grammar.eliminate_unit_rules(),
            Stage::RemoveUnreachable => grammar.remove_unreachable_symbols(),
            Stage::RemoveUnproductive => grammar.remove_unproductive_symbols(),
            Stage::Binarize => {
                grammar.isolate_start(fresh);
                grammar.isolate_terminals(fresh);
                grammar.binarize_rules(fresh, options.collapse);
            }
        }
    }

    /// Applies this stage to a copy of `grammar`. The input is left intact.
    pub fn apply(
        self,
        grammar: &Cfg,
        fresh: &mut FreshSymbols,
        options: &NormalizeOptions,
    ) -> Cfg {
        let mut result = grammar.clone();
        self.run(&mut result, fresh, options);
        result
    }
}

/// A grammar in Chomsky Normal Form.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ChomskyNormalForm {
    /// The normalized grammar. It never derives the empty string.
    pub grammar: Cfg,
    /// Whether the input grammar derives the empty string. Consumers that
    /// need to accept it must do so on their own.
    pub derives_empty: bool,
}

/// Converts grammars to Chomsky Normal Form.
#[derive(Clone, Debug, Default)]
pub struct Normalizer {
    options: NormalizeOptions,
}

impl Normalizer {
    /// Creates a normalizer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a normalizer with the given options.
    pub fn with_options(options: NormalizeOptions) -> Self {
        Normalizer { options }
    }

    /// Sets the prefix of the names of introduced nonterminals.
    pub fn fresh_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.options.fresh_prefix = prefix.into();
        self
    }

    /// Sets which end of a long RHS is paired first.
    pub fn collapse(mut self, collapse: Collapse) -> Self {
        self.options.collapse = collapse;
        self
    }

    /// Returns the options of this normalizer.
    pub fn options(&self) -> &NormalizeOptions {
        &self.options
    }

    /// Validates `grammar` and returns its Chomsky Normal Form. The input is
    /// left intact.
    pub fn normalize(&self, grammar: &Cfg) -> Result<ChomskyNormalForm, GrammarError> {
        grammar.validate()?;
        let derives_empty = derives_empty(grammar);
        let mut fresh = FreshSymbols::with_prefix(self.options.fresh_prefix.clone());
        let mut result = grammar.clone();
        for stage in Stage::ALL {
            stage.run(&mut result, &mut fresh, &self.options);
        }
        debug!(
            "normalized grammar: {} rules, {} nonterminals, {} fresh names tried",
            result.num_rules(),
            result.non_terminals().len(),
            fresh.counter()
        );
        Ok(ChomskyNormalForm {
            grammar: result,
            derives_empty,
        })
    }

    /// Validates `grammar` and returns the output of every stage, in order.
    /// Each snapshot is independent of the others and of the input.
    pub fn trace(&self, grammar: &Cfg) -> Result<Vec<(Stage, Cfg)>, GrammarError> {
        grammar.validate()?;
        let mut fresh = FreshSymbols::with_prefix(self.options.fresh_prefix.clone());
        let mut snapshots: Vec<(Stage, Cfg)> = Vec::with_capacity(Stage::ALL.len());
        for stage in Stage::ALL {
            let input = snapshots.last().map_or(grammar, |(_, snapshot)| snapshot);
            let output = stage.apply(input, &mut fresh, &self.options);
            snapshots.push((stage, output));
        }
        Ok(snapshots)
    }
}

fn derives_empty(grammar: &Cfg) -> bool {
    grammar
        .start()
        .map_or(false, |start| grammar.nullable_symbols()[start])
}
