//! This module defines grammar rules. Each rule in a context-free grammar
//! consists of a single symbol on its left-hand side and an array of symbols
//! on its right-hand side.

pub mod builder;
pub mod container;

use crate::symbol::Symbol;

/// References rule's components.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct RuleRef<'a> {
    /// Left-hand side.
    pub lhs: Symbol,
    /// Right-hand side.
    pub rhs: &'a [Symbol],
}

impl<'a> RuleRef<'a> {
    /// Checks whether the right-hand side is empty.
    pub fn is_nulling(&self) -> bool {
        self.rhs.is_empty()
    }
}
