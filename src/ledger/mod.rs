//! Ledger module containing the trial balance entry store

pub mod store;

pub use store::*;
