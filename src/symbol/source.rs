//! Source

use std::borrow::Cow;
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Symbol, SymbolRepr};

/// A source of numeric symbols.
///
/// Besides handing out IDs, the source records the name given to each
/// symbol, so that grammars built from text keep their vocabulary.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SymbolSource {
    next_id: SymbolRepr,
    names: Vec<Option<String>>,
    by_name: BTreeMap<String, Symbol>,
}

impl SymbolSource {
    /// Creates a source of numeric symbols with an empty symbol space.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns generated anonymous symbols.
    pub fn sym<const N: usize>(&mut self) -> [Symbol; N] {
        let mut result = [Symbol::from(0u32); N];
        for dest in &mut result {
            *dest = self.next_sym(None);
        }
        result
    }

    /// Generates a new unique symbol.
    ///
    /// If a name is given, it will be recorded within the symbol source. Names
    /// are not required to be unique; `lookup` resolves a name to the first
    /// symbol that carried it.
    pub fn next_sym(&mut self, name: Option<Cow<str>>) -> Symbol {
        let ret = Symbol::from(self.next_id);
        self.next_id = self
            .next_id
            .checked_add(1)
            .filter(|&id| id != SymbolRepr::MAX)
            .unwrap_or_else(|| panic!("ran out of symbol space"));
        let name = name.map(Cow::into_owned);
        if let Some(name) = &name {
            self.by_name.entry(name.clone()).or_insert(ret);
        }
        self.names.push(name);
        ret
    }

    /// Returns the symbol with the given name, generating it if the name is
    /// not known yet.
    pub fn intern(&mut self, name: &str) -> Symbol {
        match self.lookup(name) {
            Some(sym) => sym,
            None => self.next_sym(Some(name.into())),
        }
    }

    /// Finds the symbol carrying the given name.
    pub fn lookup(&self, name: &str) -> Option<Symbol> {
        self.by_name.get(name).copied()
    }

    /// Checks whether any symbol carries the given name.
    pub fn contains_name(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Returns the name of a symbol, if it has one.
    pub fn name_of(&self, sym: Symbol) -> Option<&str> {
        self.names.get(sym.usize()).and_then(|name| name.as_deref())
    }

    /// Returns the number of symbols in use.
    pub fn num_syms(&self) -> usize {
        self.next_id as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consecutive_ids() {
        let mut source = SymbolSource::new();
        let [a, b, c] = source.sym();
        assert_eq!((a.usize(), b.usize(), c.usize()), (0, 1, 2));
        assert_eq!(source.num_syms(), 3);
        assert_eq!(source.name_of(b), None);
    }

    #[test]
    fn test_intern_reuses_names() {
        let mut source = SymbolSource::new();
        let expr = source.intern("Expr");
        let term = source.intern("Term");
        assert_ne!(expr, term);
        assert_eq!(source.intern("Expr"), expr);
        assert_eq!(source.lookup("Term"), Some(term));
        assert_eq!(source.name_of(expr), Some("Expr"));
        assert_eq!(source.num_syms(), 2);
    }

    #[test]
    fn test_duplicate_name_keeps_first() {
        let mut source = SymbolSource::new();
        let first = source.next_sym(Some("A".into()));
        let second = source.next_sym(Some("A".into()));
        assert_ne!(first, second);
        assert_eq!(source.lookup("A"), Some(first));
    }
}
