//! Definitions of the context-free grammar type.

use std::collections::{BTreeMap, BTreeSet};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::builder::GrammarBuilder;
use crate::error::GrammarError;
use crate::rule::builder::RuleBuilder;
use crate::rule::container::RuleContainer;
use crate::rule::RuleRef;
use crate::symbol::{Symbol, SymbolSource};

/// Maps each nonterminal to its set of distinct right-hand sides.
pub type Productions = BTreeMap<Symbol, BTreeSet<Vec<Symbol>>>;

/// Context-free grammar type.
///
/// A grammar is the 4-tuple of its nonterminals, its terminals, its start
/// symbol and its production mapping. Rule alternatives have set semantics:
/// adding the same right-hand side twice keeps one copy.
///
/// Cloning a grammar yields a fully independent copy, so every rewrite can be
/// compared against its input.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cfg {
    /// The symbol source.
    sym_source: SymbolSource,
    /// Declared nonterminals.
    non_terminals: BTreeSet<Symbol>,
    /// Declared terminals.
    terminals: BTreeSet<Symbol>,
    /// The start symbol.
    start: Option<Symbol>,
    /// Rule alternatives, grouped by their LHS.
    productions: Productions,
}

impl Cfg {
    /// Creates an empty context-free grammar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts building a grammar from symbol names.
    pub fn builder() -> GrammarBuilder {
        GrammarBuilder::new()
    }

    /// Returns an immutable reference to the grammar's symbol source.
    pub fn sym_source(&self) -> &SymbolSource {
        &self.sym_source
    }

    /// Returns the number of symbols in use.
    pub fn num_syms(&self) -> usize {
        self.sym_source.num_syms()
    }

    /// Returns generated anonymous symbols. They are neither terminal nor
    /// nonterminal until declared as such.
    pub fn sym<const N: usize>(&mut self) -> [Symbol; N] {
        self.sym_source.sym()
    }

    /// Declares a nonterminal with the given name.
    ///
    /// An already known name resolves to its existing symbol.
    pub fn nonterminal(&mut self, name: &str) -> Symbol {
        let sym = self.sym_source.intern(name);
        self.non_terminals.insert(sym);
        sym
    }

    /// Declares a terminal with the given name.
    ///
    /// An already known name resolves to its existing symbol.
    pub fn terminal(&mut self, name: &str) -> Symbol {
        let sym = self.sym_source.intern(name);
        self.terminals.insert(sym);
        sym
    }

    /// Declares several nonterminals at once.
    pub fn nonterminals_named<const N: usize>(&mut self, names: [&str; N]) -> [Symbol; N] {
        names.map(|name| self.nonterminal(name))
    }

    /// Declares several terminals at once.
    pub fn terminals_named<const N: usize>(&mut self, names: [&str; N]) -> [Symbol; N] {
        names.map(|name| self.terminal(name))
    }

    /// Marks an existing symbol as a terminal.
    pub fn declare_terminal(&mut self, sym: Symbol) {
        self.terminals.insert(sym);
    }

    /// Assigns the start symbol.
    pub fn set_start(&mut self, start: Symbol) {
        self.start = Some(start);
    }

    /// Returns the start symbol, if one was assigned.
    pub fn start(&self) -> Option<Symbol> {
        self.start
    }

    /// Returns the set of nonterminals.
    pub fn non_terminals(&self) -> &BTreeSet<Symbol> {
        &self.non_terminals
    }

    /// Returns the set of terminals.
    pub fn terminals(&self) -> &BTreeSet<Symbol> {
        &self.terminals
    }

    /// Checks whether the symbol is a declared terminal.
    pub fn is_terminal(&self, sym: Symbol) -> bool {
        self.terminals.contains(&sym)
    }

    /// Checks whether the symbol is a declared nonterminal.
    pub fn is_non_terminal(&self, sym: Symbol) -> bool {
        self.non_terminals.contains(&sym)
    }

    /// Returns the production mapping.
    pub fn productions(&self) -> &Productions {
        &self.productions
    }

    /// Iterates over the right-hand sides of `lhs`.
    pub fn rhs_of(&self, lhs: Symbol) -> impl Iterator<Item = &[Symbol]> + '_ {
        self.productions
            .get(&lhs)
            .into_iter()
            .flat_map(|alternatives| alternatives.iter().map(|rhs| &rhs[..]))
    }

    /// Iterates over all rules, ordered by LHS.
    pub fn rules(&self) -> impl Iterator<Item = RuleRef<'_>> + '_ {
        self.productions.iter().flat_map(|(&lhs, alternatives)| {
            alternatives.iter().map(move |rhs| RuleRef { lhs, rhs: &rhs[..] })
        })
    }

    /// Returns the number of rules.
    pub fn num_rules(&self) -> usize {
        self.productions.values().map(|alternatives| alternatives.len()).sum()
    }

    /// Starts building a new rule.
    pub fn rule(&mut self, lhs: Symbol) -> RuleBuilder<&mut Self> {
        RuleBuilder::new(self, lhs)
    }

    /// Inserts the rule `lhs ::= rhs`. The LHS becomes a declared nonterminal.
    pub fn add_rule(&mut self, lhs: Symbol, rhs: &[Symbol]) {
        self.non_terminals.insert(lhs);
        self.productions.entry(lhs).or_default().insert(rhs.to_vec());
    }

    /// Retains only the rules specified by the predicate. The entries of
    /// nonterminals stay in the mapping, even when left without rules.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(RuleRef) -> bool,
    {
        for (&lhs, alternatives) in self.productions.iter_mut() {
            alternatives.retain(|rhs| f(RuleRef { lhs, rhs: &rhs[..] }));
        }
    }

    /// Replaces the whole production mapping.
    pub(crate) fn set_productions(&mut self, productions: Productions) {
        self.productions = productions;
    }

    /// Keeps only the mapping entries and nonterminals for which `keep` holds.
    pub(crate) fn retain_non_terminals<F>(&mut self, mut keep: F)
    where
        F: FnMut(Symbol) -> bool,
    {
        self.productions.retain(|&lhs, _| keep(lhs));
        self.non_terminals.retain(|&sym| keep(sym));
    }

    /// Returns the name of a symbol, if it has one.
    pub fn name_of(&self, sym: Symbol) -> Option<&str> {
        self.sym_source.name_of(sym)
    }

    /// Resolves a symbol name.
    pub fn lookup(&self, name: &str) -> Result<Symbol, GrammarError> {
        self.sym_source
            .lookup(name)
            .ok_or_else(|| GrammarError::UnknownSymbol(name.to_string()))
    }

    /// Returns a printable name for a symbol. Anonymous symbols are shown as
    /// `#<id>`.
    pub fn display_name(&self, sym: Symbol) -> String {
        match self.name_of(sym) {
            Some(name) => name.to_string(),
            None => format!("#{}", sym.usize()),
        }
    }

    /// Checks the structural preconditions of all grammar rewrites.
    ///
    /// The start symbol must be a declared nonterminal, no symbol may be both
    /// terminal and nonterminal, and every rule may only use declared symbols,
    /// with a nonterminal on its LHS.
    pub fn validate(&self) -> Result<(), GrammarError> {
        let start = self.start.ok_or(GrammarError::MissingStart)?;
        if let Some(&sym) = self.terminals.intersection(&self.non_terminals).next() {
            return Err(GrammarError::AmbiguousSymbol(self.display_name(sym)));
        }
        if !self.is_non_terminal(start) {
            return Err(GrammarError::StartNotNonTerminal(self.display_name(start)));
        }
        for rule in self.rules() {
            if !self.is_non_terminal(rule.lhs) {
                return Err(GrammarError::LhsNotNonTerminal(self.display_name(rule.lhs)));
            }
            for &sym in rule.rhs {
                if !self.is_non_terminal(sym) && !self.is_terminal(sym) {
                    return Err(GrammarError::UndeclaredSymbol {
                        lhs: self.display_name(rule.lhs),
                        symbol: self.display_name(sym),
                    });
                }
            }
        }
        Ok(())
    }

    /// Checks whether every rule is either `A ::= a` with a terminal `a`, or
    /// `A ::= B C` with nonterminals `B` and `C`.
    pub fn is_chomsky_normal_form(&self) -> bool {
        self.rules().all(|rule| match *rule.rhs {
            [sym] => self.is_terminal(sym),
            [left, right] => self.is_non_terminal(left) && self.is_non_terminal(right),
            _ => false,
        })
    }
}

impl PartialEq for Cfg {
    fn eq(&self, other: &Self) -> bool {
        self.non_terminals == other.non_terminals
            && self.terminals == other.terminals
            && self.start == other.start
            && self.productions == other.productions
    }
}

impl Eq for Cfg {}

impl RuleContainer for Cfg {
    fn add_rule(&mut self, lhs: Symbol, rhs: &[Symbol]) {
        Cfg::add_rule(self, lhs, rhs);
    }
}
