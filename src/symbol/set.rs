//! Sets of symbols in the form of bit vectors.

use std::{iter, ops};

use bit_vec::BitVec;

use crate::grammar::Cfg;
use crate::symbol::Symbol;

/// A set of symbols in the form of a bit vector.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SymbolBitSet {
    bit_vec: BitVec,
}

/// An iterator over a symbol set.
pub struct Iter<'a> {
    iter: iter::Enumerate<bit_vec::Iter<'a>>,
}

impl SymbolBitSet {
    /// Constructs a `SymbolBitSet` covering every symbol of the grammar.
    pub fn from_elem(grammar: &Cfg, elem: bool) -> Self {
        SymbolBitSet {
            bit_vec: BitVec::from_elem(grammar.num_syms(), elem),
        }
    }

    /// Constructs the set of the grammar's terminals.
    pub fn terminal(grammar: &Cfg) -> Self {
        let mut set = Self::from_elem(grammar, false);
        for &sym in grammar.terminals() {
            set.set(sym, true);
        }
        set
    }

    /// Sets the entry for a symbol.
    pub fn set(&mut self, sym: Symbol, elem: bool) {
        if sym.usize() >= self.bit_vec.len() {
            let missing = sym.usize() + 1 - self.bit_vec.len();
            self.bit_vec.grow(missing, false);
        }
        self.bit_vec.set(sym.usize(), elem);
    }

    /// Checks whether a given symbol is in this set.
    pub fn has_sym(&self, sym: Symbol) -> bool {
        self.bit_vec.get(sym.usize()).unwrap_or(false)
    }

    /// Iterates over symbols in the set.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            iter: self.bit_vec.iter().enumerate(),
        }
    }

    /// Returns the number of symbols in the set.
    pub fn count(&self) -> usize {
        self.iter().count()
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = Symbol;

    fn next(&mut self) -> Option<Self::Item> {
        for (id, is_present) in &mut self.iter {
            if is_present {
                return Some(Symbol::from(id));
            }
        }
        None
    }
}

static TRUE: bool = true;
static FALSE: bool = false;

impl ops::Index<Symbol> for SymbolBitSet {
    type Output = bool;

    fn index(&self, index: Symbol) -> &Self::Output {
        if self.has_sym(index) {
            &TRUE
        } else {
            &FALSE
        }
    }
}
