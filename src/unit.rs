//! Elimination of unit rules of the form `A ::= B`.

use log::debug;

use crate::grammar::{Cfg, Productions};
use crate::symbol::{Symbol, SymbolBitMatrix};

impl Cfg {
    /// Checks whether the RHS is a single nonterminal.
    pub fn is_unit_rhs(&self, rhs: &[Symbol]) -> bool {
        matches!(*rhs, [sym] if self.is_non_terminal(sym))
    }

    /// Returns the unit derivation relation: `(A, B)` is in the relation iff
    /// `A` derives `B` through a chain of zero or more unit rules.
    ///
    /// The relation is reflexive over all nonterminals and transitively
    /// closed.
    pub fn unit_pairs(&self) -> SymbolBitMatrix {
        let mut unit_derivation = SymbolBitMatrix::new(self.num_syms());

        for &sym in self.non_terminals() {
            unit_derivation.set(sym, sym, true);
        }
        for rule in self.rules() {
            if self.is_unit_rhs(rule.rhs) {
                unit_derivation.set(rule.lhs, rule.rhs[0], true);
            }
        }

        unit_derivation.transitive_closure();
        unit_derivation
    }

    /// Eliminates all unit rules. Preserves the language represented by the
    /// grammar.
    ///
    /// Each nonterminal `A` receives the non-unit right-hand sides of every
    /// `B` with `(A, B)` among the unit pairs, its own included. Every
    /// nonterminal keeps an entry in the production mapping, possibly empty.
    pub fn eliminate_unit_rules(&mut self) {
        let unit_pairs = self.unit_pairs();

        let mut productions = Productions::new();
        for &lhs in self.non_terminals() {
            let rewritten = productions.entry(lhs).or_default();
            for derived in unit_pairs.iter_row_syms(lhs) {
                rewritten.extend(
                    self.rhs_of(derived)
                        .filter(|rhs| !self.is_unit_rhs(rhs))
                        .map(|rhs| rhs.to_vec()),
                );
            }
        }

        let before = self.num_rules();
        self.set_productions(productions);
        debug!(
            "eliminated unit rules: {} unit pairs, {} rules before, {} after",
            unit_pairs.iter_pairs().count(),
            before,
            self.num_rules()
        );
    }
}
