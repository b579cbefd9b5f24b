//! Analysis of rule usefulness.
//!
//! Useful rules are both reachable from the start symbol and productive.
//! The two prunings run separately, reachability first.

use log::debug;

use crate::grammar::Cfg;
use crate::rhs_closure::RhsClosure;
use crate::symbol::SymbolBitSet;

impl Cfg {
    /// Returns the set of nonterminals reachable from the start symbol,
    /// including the start symbol itself.
    pub fn reachable_symbols(&self) -> SymbolBitSet {
        let mut reachable = SymbolBitSet::from_elem(self, false);
        let mut work_stack = vec![];
        if let Some(start) = self.start() {
            reachable.set(start, true);
            work_stack.push(start);
        }

        while let Some(work_sym) = work_stack.pop() {
            for rhs in self.rhs_of(work_sym) {
                for &sym in rhs {
                    if self.is_non_terminal(sym) && !reachable[sym] {
                        reachable.set(sym, true);
                        work_stack.push(sym);
                    }
                }
            }
        }
        reachable
    }

    /// Removes nonterminals that are unreachable from the start symbol,
    /// together with their rules. Terminals stay declared.
    pub fn remove_unreachable_symbols(&mut self) {
        let reachable = self.reachable_symbols();
        let before = self.non_terminals().len();
        self.retain_non_terminals(|sym| reachable[sym]);
        debug!(
            "removed unreachable symbols: {} nonterminals before, {} after",
            before,
            self.non_terminals().len()
        );
    }

    /// Returns the set of productive symbols: terminals, and nonterminals
    /// that derive some string of terminals, the empty string included.
    pub fn productive_symbols(&self) -> SymbolBitSet {
        let mut productive = SymbolBitSet::terminal(self);
        RhsClosure::new(self).rhs_closure(&mut productive);
        productive
    }

    /// Removes unproductive nonterminals, and every rule that mentions one.
    ///
    /// The start symbol stays declared even when unproductive. It is left
    /// without rules, representing the empty language.
    pub fn remove_unproductive_symbols(&mut self) {
        let productive = self.productive_symbols();
        let start = self.start();
        let before = (self.non_terminals().len(), self.num_rules());

        self.retain(|rule| rule.rhs.iter().all(|&sym| productive[sym]));
        self.retain_non_terminals(|sym| productive[sym] || Some(sym) == start);
        debug!(
            "removed unproductive symbols: {} nonterminals and {} rules before, {} and {} after",
            before.0,
            before.1,
            self.non_terminals().len(),
            self.num_rules()
        );
    }
}
