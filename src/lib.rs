//! # Final Accounts Core
//!
//! A bookkeeping library that classifies trial balance entries and derives
//! the two closing statements of a trading period: the Trading Account and
//! the Profit & Loss Account.
//!
//! ## Features
//!
//! - **Keyword classification**: an ordered, data-driven rule table maps
//!   ledger names to accounting buckets, first match wins
//! - **Entry store**: a mutable trial balance with stable ids,
//!   re-classification on rename, and explicit manual overrides
//! - **Statement derivation**: Trading and Profit & Loss accounts that
//!   balance by construction, with the gross profit/loss carried down
//! - **Trial balance check**: tolerance-based balanced/not-balanced status
//!   over the raw entry sums
//! - **CSV import/export**: `Ledger,Debit,Credit` rows with graceful
//!   handling of malformed input
//!
//! ## Quick Start
//!
//! ```rust
//! use final_accounts_core::{statements, EntryStore};
//! use bigdecimal::BigDecimal;
//!
//! let mut store = EntryStore::new();
//! store.add_entry("Opening Stock", BigDecimal::from(50000), BigDecimal::from(0));
//! store.add_entry("Purchases", BigDecimal::from(150000), BigDecimal::from(0));
//! store.add_entry("Sales", BigDecimal::from(0), BigDecimal::from(250000));
//!
//! let report = statements::generate(store.entries(), None);
//! assert_eq!(report.gross_result, BigDecimal::from(50000));
//! assert!(report.trading.is_balanced());
//! ```

pub mod classify;
pub mod io;
pub mod ledger;
pub mod statements;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use classify::*;
pub use ledger::*;
pub use statements::*;
pub use types::*;
