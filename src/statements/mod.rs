//! Statement derivation pipeline
//!
//! Entries flow one way: classify -> aggregate -> build. [`aggregate`]
//! groups a snapshot of classified entries into trading and P&L buckets,
//! [`build`] turns the buckets into the two balanced statements.

pub mod aggregate;
pub mod builder;

pub use aggregate::*;
pub use builder::*;

use bigdecimal::BigDecimal;

use crate::types::LedgerEntry;

/// Derive both statements from an entry snapshot in one call
///
/// A missing closing stock figure is treated as zero.
pub fn generate(
    entries: &[LedgerEntry],
    closing_stock: Option<&BigDecimal>,
) -> FinancialStatements {
    builder::build(&aggregate::aggregate(entries, closing_stock))
}
