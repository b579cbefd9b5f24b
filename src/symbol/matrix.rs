use std::ops::{self, Deref, DerefMut};

use bit_matrix::BitMatrix;

use crate::symbol::Symbol;

/// A binary relation over symbols, stored as a square bit matrix.
#[derive(Clone, Debug)]
pub struct SymbolBitMatrix {
    bit_matrix: BitMatrix,
    num_syms: usize,
}

impl SymbolBitMatrix {
    /// Creates an empty relation over `num_syms` symbols.
    pub fn new(num_syms: usize) -> Self {
        SymbolBitMatrix {
            bit_matrix: BitMatrix::new(num_syms, num_syms),
            num_syms,
        }
    }

    /// Sets whether the pair `(row, col)` belongs to the relation.
    pub fn set(&mut self, row: Symbol, col: Symbol, included: bool) {
        self.bit_matrix.set(row.usize(), col.usize(), included);
    }

    /// Checks whether the pair `(row, col)` belongs to the relation.
    pub fn contains(&self, row: Symbol, col: Symbol) -> bool {
        row.usize() < self.num_syms
            && col.usize() < self.num_syms
            && self.bit_matrix[(row.usize(), col.usize())]
    }

    /// Iterates over the symbols related to `row`.
    pub fn iter_row_syms(&self, row: Symbol) -> impl Iterator<Item = Symbol> + '_ {
        (0..self.num_syms)
            .map(Symbol::from)
            .filter(move |&col| self.contains(row, col))
    }

    /// Iterates over all pairs in the relation.
    pub fn iter_pairs(&self) -> impl Iterator<Item = (Symbol, Symbol)> + '_ {
        (0..self.num_syms).map(Symbol::from).flat_map(move |row| {
            self.iter_row_syms(row).map(move |col| (row, col))
        })
    }
}

impl Deref for SymbolBitMatrix {
    type Target = BitMatrix;
    fn deref(&self) -> &Self::Target {
        &self.bit_matrix
    }
}

impl DerefMut for SymbolBitMatrix {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.bit_matrix
    }
}

static TRUE: bool = true;
static FALSE: bool = false;

impl ops::Index<(Symbol, Symbol)> for SymbolBitMatrix {
    type Output = bool;
    fn index(&self, index: (Symbol, Symbol)) -> &Self::Output {
        if self.contains(index.0, index.1) {
            &TRUE
        } else {
            &FALSE
        }
    }
}
