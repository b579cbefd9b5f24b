//! Fresh nonterminals introduced by grammar rewrites.

use log::trace;

use crate::grammar::Cfg;
use crate::symbol::Symbol;

/// Allocates fresh nonterminals named `<prefix><n>`, counting `n` from 1.
///
/// One allocator is owned by one normalization run. Generated names skip
/// every name already present in the grammar, so a generated nonterminal
/// never collides with a pre-existing or previously generated one.
#[derive(Clone, Debug)]
pub struct FreshSymbols {
    prefix: String,
    counter: u64,
}

impl Default for FreshSymbols {
    fn default() -> Self {
        Self::with_prefix("X")
    }
}

impl FreshSymbols {
    /// Creates an allocator with the default `X` prefix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an allocator with the given name prefix.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        FreshSymbols {
            prefix: prefix.into(),
            counter: 0,
        }
    }

    /// Returns how many names were tried so far.
    pub fn counter(&self) -> u64 {
        self.counter
    }

    /// Declares a new nonterminal in `grammar` under a name not used by any
    /// of its symbols.
    pub fn next_nonterminal(&mut self, grammar: &mut Cfg) -> Symbol {
        let name = loop {
            self.counter += 1;
            let name = format!("{}{}", self.prefix, self.counter);
            if !grammar.sym_source().contains_name(&name) {
                break name;
            }
        };
        trace!("fresh nonterminal {}", name);
        grammar.nonterminal(&name)
    }
}
