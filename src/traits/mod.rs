//! Trait seams between the pool and its collaborators.
//!
//! The pool's only external dependency is the fungible-token capability
//! defined by [`TokenLedger`]; everything else in the crate is owned
//! state behind validated constructors.

mod token_ledger;

pub use token_ledger::TokenLedger;
