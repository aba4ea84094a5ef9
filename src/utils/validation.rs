//! Advisory anomaly scanning over trial balance entries
//!
//! Findings here never block statement generation and never reclassify an
//! entry; the grouping rules already exclude the anomalous amounts, and
//! these warnings just make that visible.

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{Classification, EntryType, LedgerEntry};

/// A data-entry anomaly worth surfacing to the bookkeeper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ValidationWarning {
    /// An opening stock line carrying a credit balance; its amount is
    /// excluded from the trading debit total
    CreditValuedOpeningStock { entry_id: u64, name: String },
    /// A closing stock line carrying an amount; the separately supplied
    /// closing stock figure is authoritative and the entry contributes
    /// nothing
    ClosingStockEntryIgnored { entry_id: u64, name: String },
    /// Both debit and credit nonzero on one line; the debit figure wins
    DebitAndCreditBothSet { entry_id: u64, name: String },
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationWarning::CreditValuedOpeningStock { entry_id, name } => write!(
                f,
                "Entry {entry_id} ({name}): opening stock carries a credit balance; excluded from the trading total"
            ),
            ValidationWarning::ClosingStockEntryIgnored { entry_id, name } => write!(
                f,
                "Entry {entry_id} ({name}): closing stock amounts come from the closing stock input, not the trial balance"
            ),
            ValidationWarning::DebitAndCreditBothSet { entry_id, name } => write!(
                f,
                "Entry {entry_id} ({name}): both debit and credit are set; the debit amount is used"
            ),
        }
    }
}

/// Scan entries for the known anomaly shapes
pub fn scan_entries(entries: &[LedgerEntry]) -> Vec<ValidationWarning> {
    let zero = BigDecimal::from(0);
    let mut warnings = Vec::new();
    for entry in entries {
        if entry.debit > zero && entry.credit > zero {
            warnings.push(ValidationWarning::DebitAndCreditBothSet {
                entry_id: entry.id,
                name: entry.name.clone(),
            });
        }
        match entry.classification {
            Classification::TradingOpeningStock => {
                if entry.entry_type() == EntryType::Credit && entry.credit > zero {
                    warnings.push(ValidationWarning::CreditValuedOpeningStock {
                        entry_id: entry.id,
                        name: entry.name.clone(),
                    });
                }
            }
            Classification::TradingClosingStock => {
                if entry.amount() > &zero {
                    warnings.push(ValidationWarning::ClosingStockEntryIgnored {
                        entry_id: entry.id,
                        name: entry.name.clone(),
                    });
                }
            }
            _ => {}
        }
    }
    warnings
}
