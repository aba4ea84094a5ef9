//! Core types and data structures for the final accounts system

use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Side of a trial balance line in double-entry bookkeeping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryType {
    /// Debit balance - normal side for stock, purchases, and expenses
    Debit,
    /// Credit balance - normal side for sales, incomes, and returns outward
    Credit,
}

/// Accounting buckets a trial balance line can be classified into
///
/// The five trading classes feed the Trading Account, the two P&L classes
/// feed the Profit & Loss Account, and `Ignore` keeps a line in the trial
/// balance without contributing to either statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    /// Sales and sales returns (contra)
    TradingSales,
    /// Purchases and purchase returns (contra)
    TradingPurchases,
    /// Opening stock brought into the period
    TradingOpeningStock,
    /// Closing stock; display-only because the authoritative figure is the
    /// separately supplied scalar
    TradingClosingStock,
    /// Expenses incurred directly in trading (wages, carriage inwards, ...)
    TradingDirectExpense,
    /// Operating expenses charged against gross profit
    PnlIndirectExpense,
    /// Non-trading incomes credited to the P&L account
    PnlIncome,
    /// Balance-sheet and unrecognized items; excluded from both statements
    Ignore,
}

impl Classification {
    /// All classes in display order
    pub const ALL: [Classification; 8] = [
        Classification::TradingSales,
        Classification::TradingPurchases,
        Classification::TradingOpeningStock,
        Classification::TradingClosingStock,
        Classification::TradingDirectExpense,
        Classification::PnlIndirectExpense,
        Classification::PnlIncome,
        Classification::Ignore,
    ];

    /// Human-readable label for this class
    pub fn display_name(&self) -> &'static str {
        match self {
            Classification::TradingSales => "Trading - Sales",
            Classification::TradingPurchases => "Trading - Purchases",
            Classification::TradingOpeningStock => "Trading - Opening Stock",
            Classification::TradingClosingStock => "Trading - Closing Stock",
            Classification::TradingDirectExpense => "Trading - Direct Expense",
            Classification::PnlIndirectExpense => "P&L - Indirect Expense",
            Classification::PnlIncome => "P&L - Income",
            Classification::Ignore => "Ignore",
        }
    }

    /// The fixed subtype labels owned by this class
    ///
    /// Subtypes are display-only, except for the contra subtypes of the
    /// sales and purchases classes which net against their gross figures.
    pub fn subtypes(&self) -> &'static [&'static str] {
        match self {
            Classification::TradingSales => &["Sales", "Sales Returns (contra)"],
            Classification::TradingPurchases => &["Purchases", "Purchase Returns (contra)"],
            Classification::TradingOpeningStock => &["Opening Stock"],
            Classification::TradingClosingStock => &["Closing Stock"],
            Classification::TradingDirectExpense => &[
                "Wages",
                "Carriage Inwards",
                "Power & Fuel",
                "Royalties",
                "Factory Rent",
                "Other Direct",
            ],
            Classification::PnlIndirectExpense => &[
                "Salaries",
                "Rent",
                "Carriage Outwards",
                "Office & Admin",
                "Selling & Dist.",
                "Bad Debts",
                "Discount Allowed",
                "Depreciation",
                "Other Indirect",
            ],
            Classification::PnlIncome => &[
                "Commission Received",
                "Interest Received",
                "Discount Received",
                "Other Income",
            ],
            Classification::Ignore => &["Ignore"],
        }
    }

    /// Subtype used when a class is assigned without an explicit subtype
    pub fn default_subtype(&self) -> &'static str {
        self.subtypes()[0]
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A single trial balance line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Stable identity assigned from a monotonic counter
    pub id: u64,
    /// Free-text ledger label (e.g. "Sales", "Carriage Inwards")
    pub name: String,
    /// Debit balance amount; zero when the line carries a credit balance
    pub debit: BigDecimal,
    /// Credit balance amount; zero when the line carries a debit balance
    pub credit: BigDecimal,
    /// Accounting bucket, auto-derived from `name` unless overridden
    pub classification: Classification,
    /// Display subtype within the classification
    pub subtype: String,
    /// Set once the user assigns the class directly; renames then stop
    /// re-deriving the classification
    pub user_overridden: bool,
    /// When the entry was created
    pub created_at: NaiveDateTime,
    /// When the entry was last updated
    pub updated_at: NaiveDateTime,
}

impl LedgerEntry {
    /// Create a new entry with an already-decided classification
    pub fn new(
        id: u64,
        name: String,
        debit: BigDecimal,
        credit: BigDecimal,
        classification: Classification,
        subtype: String,
    ) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id,
            name,
            debit,
            credit,
            classification,
            subtype,
            user_overridden: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// The side this line sits on. A well-formed line has at most one
    /// nonzero amount; if both are set, the debit figure wins.
    pub fn entry_type(&self) -> EntryType {
        if self.debit > BigDecimal::from(0) {
            EntryType::Debit
        } else {
            EntryType::Credit
        }
    }

    /// The effective amount on the side reported by [`entry_type`](Self::entry_type)
    pub fn amount(&self) -> &BigDecimal {
        match self.entry_type() {
            EntryType::Debit => &self.debit,
            EntryType::Credit => &self.credit,
        }
    }
}

/// External row format for import/export: one record per ledger line
///
/// Carries only the name and the two amounts. Classification and manual
/// overrides are not part of the row format, so they are re-derived on
/// import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialBalanceRow {
    pub name: String,
    pub debit: BigDecimal,
    pub credit: BigDecimal,
}

/// One particulars line of a rendered statement
///
/// Amounts are signed internally; display formatting renders the magnitude
/// and lets the label carry the sign cue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementLine {
    pub label: String,
    pub amount: BigDecimal,
}

impl StatementLine {
    pub fn new(label: impl Into<String>, amount: BigDecimal) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }
}

/// A two-sided statement (Trading Account or Profit & Loss Account)
///
/// Totals are the sums of the rendered lines after the balancing line has
/// been appended, so `total_debit == total_credit` holds by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    pub title: String,
    pub debit_lines: Vec<StatementLine>,
    pub credit_lines: Vec<StatementLine>,
    pub total_debit: BigDecimal,
    pub total_credit: BigDecimal,
}

impl Statement {
    /// Exact equality of the two sides; no tolerance
    pub fn is_balanced(&self) -> bool {
        self.total_debit == self.total_credit
    }
}

/// User-facing trial balance status over the raw entry sums
///
/// Unlike the exact statement invariant, this check absorbs display
/// rounding noise with a small tolerance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialBalanceCheck {
    /// Sum of all debit amounts, including ignored entries
    pub total_debits: BigDecimal,
    /// Sum of all credit amounts, including ignored entries
    pub total_credits: BigDecimal,
    /// Absolute difference between the two sums
    pub difference: BigDecimal,
    /// Whether the difference is below [`TrialBalanceCheck::tolerance`]
    pub is_balanced: bool,
}

impl TrialBalanceCheck {
    /// The 0.01 threshold below which the trial balance reads as balanced
    pub fn tolerance() -> BigDecimal {
        BigDecimal::from(1) / BigDecimal::from(100)
    }

    /// Compute the check over a snapshot of entries
    ///
    /// Every entry counts, ignored ones included; this is the raw trial
    /// balance, not a statement figure.
    pub fn over(entries: &[LedgerEntry]) -> Self {
        let total_debits: BigDecimal = entries.iter().map(|entry| &entry.debit).sum();
        let total_credits: BigDecimal = entries.iter().map(|entry| &entry.credit).sum();
        let difference = (&total_debits - &total_credits).abs();
        let is_balanced = difference < Self::tolerance();
        Self {
            total_debits,
            total_credits,
            difference,
            is_balanced,
        }
    }
}

/// Errors that can occur in the final accounts system
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("Entry not found: {0}")]
    EntryNotFound(u64),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debit_wins_when_both_sides_are_set() {
        let entry = LedgerEntry::new(
            1,
            "Suspense".to_string(),
            BigDecimal::from(100),
            BigDecimal::from(40),
            Classification::Ignore,
            "Ignore".to_string(),
        );
        assert_eq!(entry.entry_type(), EntryType::Debit);
        assert_eq!(entry.amount(), &BigDecimal::from(100));
    }

    #[test]
    fn credit_side_entry_reports_credit_amount() {
        let entry = LedgerEntry::new(
            2,
            "Sales".to_string(),
            BigDecimal::from(0),
            BigDecimal::from(500),
            Classification::TradingSales,
            "Sales".to_string(),
        );
        assert_eq!(entry.entry_type(), EntryType::Credit);
        assert_eq!(entry.amount(), &BigDecimal::from(500));
    }

    #[test]
    fn default_subtype_is_the_first_listed() {
        assert_eq!(Classification::TradingSales.default_subtype(), "Sales");
        assert_eq!(
            Classification::PnlIndirectExpense.default_subtype(),
            "Salaries"
        );
    }

    #[test]
    fn display_names_match_class_labels() {
        assert_eq!(
            Classification::PnlIndirectExpense.to_string(),
            "P&L - Indirect Expense"
        );
        assert_eq!(
            Classification::TradingOpeningStock.to_string(),
            "Trading - Opening Stock"
        );
    }

    #[test]
    fn tolerance_is_two_decimal_places() {
        assert_eq!(TrialBalanceCheck::tolerance().to_string(), "0.01");
    }
}
