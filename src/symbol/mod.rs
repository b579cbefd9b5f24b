//! A type that can represent symbols in a context-free grammar. Symbols are distinguished by their
//! IDs.

mod fresh;
mod matrix;
mod set;
mod source;

use std::num::NonZeroU32;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use self::fresh::FreshSymbols;
pub use self::matrix::SymbolBitMatrix;
pub use self::set::SymbolBitSet;
pub use self::source::SymbolSource;

/// Numeric representation of a symbol ID.
pub type SymbolRepr = u32;

/// A common grammar symbol type.
///
/// Whether a symbol is terminal or nonterminal is decided by the grammar
/// that declares it, not by the symbol itself.
#[derive(Clone, Copy, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Symbol(NonZeroU32);

impl Symbol {
    /// Cast the symbol's ID to `usize`.
    #[inline]
    pub fn usize(self) -> usize {
        self.into()
    }
}

impl From<SymbolRepr> for Symbol {
    #[inline]
    fn from(id: SymbolRepr) -> Self {
        match NonZeroU32::new(id.wrapping_add(1)) {
            Some(n) => Symbol(n),
            None => panic!("symbol id {} is out of range", id),
        }
    }
}

impl From<Symbol> for SymbolRepr {
    #[inline]
    fn from(sym: Symbol) -> Self {
        sym.0.get() - 1
    }
}

impl From<usize> for Symbol {
    #[inline]
    fn from(id: usize) -> Self {
        Symbol::from(id as SymbolRepr)
    }
}

impl From<Symbol> for usize {
    #[inline]
    fn from(sym: Symbol) -> Self {
        let id: SymbolRepr = sym.into();
        id as usize
    }
}
