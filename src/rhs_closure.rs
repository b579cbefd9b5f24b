//! Closure of a symbol property over right-hand sides.

use crate::grammar::Cfg;
use crate::rule::RuleRef;
use crate::symbol::{Symbol, SymbolBitSet};

/// Propagates a property from right-hand sides to their LHS, in the manner
/// of a reverse breadth-first search.
///
/// A LHS gains the property once **all** symbols of one of its right-hand
/// sides have it. An empty RHS satisfies this trivially, so the LHS of every
/// rule `A ::= ε` gains the property too.
pub struct RhsClosure<'a> {
    /// Each RHS occurrence, keyed by the occurring symbol and sorted.
    occurrences: Vec<(Symbol, RuleRef<'a>)>,
    /// Left-hand sides of rules with an empty RHS.
    nulling: Vec<Symbol>,
    work_stack: Vec<Symbol>,
}

impl<'a> RhsClosure<'a> {
    /// Indexes the grammar's rules by the symbols on their RHS.
    pub fn new(grammar: &'a Cfg) -> Self {
        let mut occurrences = Vec::with_capacity(2 * grammar.num_rules());
        let mut nulling = vec![];
        for rule in grammar.rules() {
            if rule.is_nulling() {
                nulling.push(rule.lhs);
            }
            occurrences.extend(rule.rhs.iter().map(|&sym| (sym, rule)));
        }
        occurrences.sort_by_key(|&(sym, _)| sym);

        RhsClosure {
            occurrences,
            nulling,
            work_stack: vec![],
        }
    }

    /// Extends `property` to its closure. Each popped symbol revisits only
    /// the rules it occurs in.
    pub fn rhs_closure(&mut self, property: &mut SymbolBitSet) {
        for &lhs in &self.nulling {
            property.set(lhs, true);
        }
        self.work_stack.extend(property.iter());

        while let Some(work_sym) = self.work_stack.pop() {
            for &(_, rule) in occurrences_of(&self.occurrences, work_sym) {
                if !property[rule.lhs] && rule.rhs.iter().all(|&sym| property[sym]) {
                    property.set(rule.lhs, true);
                    self.work_stack.push(rule.lhs);
                }
            }
        }
    }
}

fn occurrences_of<'a, 'b>(
    occurrences: &'b [(Symbol, RuleRef<'a>)],
    key_sym: Symbol,
) -> &'b [(Symbol, RuleRef<'a>)] {
    let start = occurrences.partition_point(|&(sym, _)| sym < key_sym);
    let len = occurrences[start..]
        .iter()
        .take_while(|&&(sym, _)| sym == key_sym)
        .count();
    &occurrences[start..start + len]
}
