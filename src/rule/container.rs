//! Abstraction for collections of rules.

use crate::symbol::Symbol;

/// Anything a [`RuleBuilder`](crate::rule::builder::RuleBuilder) can insert
/// rules into.
pub trait RuleContainer {
    /// Inserts the rule `lhs ::= rhs`. Inserting an existing rule again has
    /// no effect.
    fn add_rule(&mut self, lhs: Symbol, rhs: &[Symbol]);
}

impl<'a, D> RuleContainer for &'a mut D
where
    D: RuleContainer,
{
    fn add_rule(&mut self, lhs: Symbol, rhs: &[Symbol]) {
        (**self).add_rule(lhs, rhs);
    }
}
