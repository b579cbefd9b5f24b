//! Elimination of rules that derive the empty string.

use log::{debug, trace};

use crate::grammar::{Cfg, Productions};
use crate::rhs_closure::RhsClosure;
use crate::symbol::{Symbol, SymbolBitSet};

impl Cfg {
    /// Returns the set of nullable symbols, i.e. nonterminals that derive the
    /// empty string.
    ///
    /// Symbols with a rule `A ::= ε` seed the set. Then a LHS becomes nullable
    /// once one of its right-hand sides consists of nullable symbols only.
    pub fn nullable_symbols(&self) -> SymbolBitSet {
        let mut nullable = SymbolBitSet::from_elem(self, false);
        RhsClosure::new(self).rhs_closure(&mut nullable);
        nullable
    }

    /// Eliminates all rules of the form `A ::= ε`.
    ///
    /// Every rule is kept together with each variant that omits some of its
    /// nullable occurrences. Occurrences are chosen by position, so a rule
    /// with `k` nullable occurrences gains up to `2^k - 1` variants. Variants
    /// with an empty RHS are dropped.
    ///
    /// The language represented by the grammar is preserved, except for the
    /// possible lack of the empty string. Returns whether the start symbol
    /// was nullable, meaning the empty string was lost.
    ///
    /// # Cost
    ///
    /// The number of variants is exponential in the number of nullable
    /// occurrences per RHS. No cap is imposed.
    pub fn eliminate_nulling_rules(&mut self) -> bool {
        let nullable = self.nullable_symbols();
        let start_nullable = self.start().map_or(false, |start| nullable[start]);

        let mut productions = Productions::new();
        for (&lhs, alternatives) in self.productions() {
            let rewritten = productions.entry(lhs).or_default();
            for rhs in alternatives {
                for variant in omit_nullable(rhs, &nullable) {
                    if !variant.is_empty() {
                        if &variant != rhs {
                            trace!("{:?} ::= {:?} gains variant {:?}", lhs, rhs, variant);
                        }
                        rewritten.insert(variant);
                    }
                }
            }
        }

        let before = self.num_rules();
        self.set_productions(productions);
        debug!(
            "eliminated nulling rules: {} nullable symbols, {} rules before, {} after",
            nullable.count(),
            before,
            self.num_rules()
        );
        start_nullable
    }
}

/// Returns every copy of `rhs` with some subset of its nullable positions
/// removed, including `rhs` itself.
fn omit_nullable(rhs: &[Symbol], nullable: &SymbolBitSet) -> Vec<Vec<Symbol>> {
    let mut variants = vec![Vec::with_capacity(rhs.len())];
    for &sym in rhs {
        if nullable[sym] {
            let without: Vec<_> = variants.clone();
            for variant in &mut variants {
                variant.push(sym);
            }
            variants.extend(without);
        } else {
            for variant in &mut variants {
                variant.push(sym);
            }
        }
    }
    variants
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_omit_by_position() {
        let mut cfg = Cfg::new();
        let [a, x] = cfg.nonterminals_named(["A", "x"]);
        let mut nullable = SymbolBitSet::from_elem(&cfg, false);
        nullable.set(a, true);

        let mut variants = omit_nullable(&[a, x, a], &nullable);
        variants.sort();
        let mut expected = vec![vec![a, x, a], vec![x, a], vec![a, x], vec![x]];
        expected.sort();
        assert_eq!(variants, expected);
    }
}
