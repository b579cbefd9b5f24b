//! Errors reported for malformed grammars.

use thiserror::Error;

/// A grammar that violates the structural preconditions of normalization.
///
/// Symbols are reported by name. Anonymous symbols are shown as `#<id>`.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum GrammarError {
    /// No start symbol was assigned.
    #[error("The grammar does not have a start symbol")]
    MissingStart,

    /// The start symbol is not among the declared non-terminals.
    #[error("The start symbol '{0}' is not a declared non-terminal")]
    StartNotNonTerminal(String),

    /// A symbol is declared both terminal and non-terminal.
    #[error("The symbol '{0}' is declared both as a terminal and a non-terminal")]
    AmbiguousSymbol(String),

    /// A rule's left-hand side is not a declared non-terminal.
    #[error("The left-hand side '{0}' is not a declared non-terminal")]
    LhsNotNonTerminal(String),

    /// A rule's right-hand side uses a symbol from neither declared set.
    #[error("The symbol '{symbol}' in a production of '{lhs}' is never declared")]
    UndeclaredSymbol {
        /// The rule's left-hand side.
        lhs: String,
        /// The undeclared symbol.
        symbol: String,
    },

    /// A name was referenced that no declaration introduced.
    #[error("The name '{0}' does not refer to any declared symbol")]
    UnknownSymbol(String),
}
