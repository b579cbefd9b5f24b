//! Conversion of a clean grammar to Chomsky Normal Form. Binarized rules are
//! rules that have at most two symbols on the right-hand side.

use std::collections::BTreeMap;

use log::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::grammar::{Cfg, Productions};
use crate::symbol::{FreshSymbols, Symbol};

/// The order in which long right-hand sides are split into pairs.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Collapse {
    /// From `A ::= B C D` to `A ::= B X1` and `X1 ::= C D`.
    #[default]
    Right,
    /// From `A ::= B C D` to `A ::= X1 D` and `X1 ::= B C`.
    Left,
}

impl Cfg {
    /// Introduces a new start symbol if the current one occurs on the RHS of
    /// any rule. Returns the new start symbol, if any.
    ///
    /// The new start symbol receives a copy of every right-hand side of the
    /// old one, so no unit rule is introduced.
    pub fn isolate_start(&mut self, fresh: &mut FreshSymbols) -> Option<Symbol> {
        let start = self.start()?;
        if !self.rules().any(|rule| rule.rhs.contains(&start)) {
            return None;
        }

        let new_start = fresh.next_nonterminal(self);
        let alternatives: Vec<Vec<Symbol>> = self.rhs_of(start).map(|rhs| rhs.to_vec()).collect();
        let mut builder = self.rule(new_start);
        for rhs in alternatives {
            builder = builder.rhs(rhs);
        }
        self.set_start(new_start);
        debug!(
            "isolated start symbol: {} replaced by {}",
            self.display_name(start),
            self.display_name(new_start)
        );
        Some(new_start)
    }

    /// Replaces terminals in right-hand sides of two or more symbols with
    /// nonterminals that derive nothing but that terminal.
    ///
    /// One nonterminal is introduced per distinct terminal, shared by all its
    /// occurrences.
    pub fn isolate_terminals(&mut self, fresh: &mut FreshSymbols) {
        let mut replacements: BTreeMap<Symbol, Symbol> = BTreeMap::new();
        let mut productions = Productions::new();
        let old_productions = self.productions().clone();

        for (lhs, alternatives) in old_productions {
            let rewritten = productions.entry(lhs).or_default();
            for rhs in alternatives {
                if rhs.len() < 2 || !rhs.iter().any(|&sym| self.is_terminal(sym)) {
                    rewritten.insert(rhs);
                    continue;
                }
                let mut isolated = Vec::with_capacity(rhs.len());
                for sym in rhs {
                    if !self.is_terminal(sym) {
                        isolated.push(sym);
                        continue;
                    }
                    let replacement = match replacements.get(&sym) {
                        Some(&replacement) => replacement,
                        None => {
                            let replacement = fresh.next_nonterminal(self);
                            trace!("{:?} stands for terminal {:?}", replacement, sym);
                            replacements.insert(sym, replacement);
                            replacement
                        }
                    };
                    isolated.push(replacement);
                }
                rewritten.insert(isolated);
            }
        }

        for (&terminal, &replacement) in &replacements {
            productions.entry(replacement).or_default().insert(vec![terminal]);
        }
        self.set_productions(productions);
        debug!("isolated terminals: {} new nonterminals", replacements.len());
    }

    /// Splits every RHS longer than two symbols into a chain of rules with
    /// exactly two symbols, each introducing a fresh nonterminal.
    ///
    /// From `A ::= B C D E` with [`Collapse::Right`] to:
    /// ____________________
    /// | A  ::= B  X2
    /// | X2 ::= C  X1
    /// | X1 ::= D  E
    pub fn binarize_rules(&mut self, fresh: &mut FreshSymbols, collapse: Collapse) {
        let mut productions = Productions::new();
        let old_productions = self.productions().clone();
        let mut introduced = 0;

        for (lhs, alternatives) in old_productions {
            productions.entry(lhs).or_default();
            for rhs in alternatives {
                let binarized = if rhs.len() > 2 {
                    let (first, last) = (rhs[0], rhs[rhs.len() - 1]);
                    let middle = &rhs[1..rhs.len() - 1];
                    introduced += middle.len();
                    match collapse {
                        Collapse::Right => {
                            let mut tail = last;
                            for &sym in middle.iter().rev() {
                                tail = self.bind_pair(fresh, &mut productions, sym, tail);
                            }
                            vec![first, tail]
                        }
                        Collapse::Left => {
                            let mut head = first;
                            for &sym in middle {
                                head = self.bind_pair(fresh, &mut productions, head, sym);
                            }
                            vec![head, last]
                        }
                    }
                } else {
                    rhs
                };
                productions.entry(lhs).or_default().insert(binarized);
            }
        }

        self.set_productions(productions);
        debug!("binarized rules: {} new nonterminals", introduced);
    }

    /// Declares a fresh nonterminal with the single rule `sym ::= left right`.
    fn bind_pair(
        &mut self,
        fresh: &mut FreshSymbols,
        productions: &mut Productions,
        left: Symbol,
        right: Symbol,
    ) -> Symbol {
        let sym = fresh.next_nonterminal(self);
        productions.entry(sym).or_default().insert(vec![left, right]);
        sym
    }
}
