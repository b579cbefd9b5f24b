//! Library for conversion of context-free grammars to Chomsky Normal Form.
//!
//! Every rewrite is a method of [`Cfg`], and the [`Normalizer`] runs them in
//! order: elimination of nulling rules, elimination of unit rules, removal of
//! unreachable and unproductive symbols, and binarization.

#![deny(
    unsafe_code,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]

pub mod binarized;
pub mod builder;
pub mod error;
mod grammar;
pub mod normalize;
mod nulling;
pub mod rhs_closure;
pub mod rule;
pub mod symbol;
mod unit;
mod usefulness;

pub use crate::binarized::Collapse;
pub use crate::builder::GrammarBuilder;
pub use crate::error::GrammarError;
pub use crate::grammar::{Cfg, Productions};
pub use crate::normalize::{ChomskyNormalForm, NormalizeOptions, Normalizer, Stage};
pub use crate::rule::builder::RuleBuilder;
pub use crate::rule::container::RuleContainer;
pub use crate::rule::RuleRef;
pub use crate::symbol::{FreshSymbols, Symbol, SymbolBitMatrix, SymbolBitSet, SymbolSource};
