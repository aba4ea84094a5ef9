//! Grouping of classified trial balance entries into statement buckets

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::classify::{PURCHASE_RETURNS, SALES_RETURNS};
use crate::types::{Classification, EntryType, LedgerEntry, TrialBalanceCheck};
use crate::utils::validation::{scan_entries, ValidationWarning};

/// A named amount retained as an individual statement line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub amount: BigDecimal,
}

impl LineItem {
    pub fn new(name: impl Into<String>, amount: BigDecimal) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }
}

/// Bucketed totals and line lists produced by [`aggregate`]
///
/// All figures are pre-balancing: the gross profit/loss carry-forward line
/// is the statement builder's business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateResult {
    /// Debit-valued opening stock total
    pub opening_stock: BigDecimal,
    /// The externally supplied closing stock figure
    pub closing_stock: BigDecimal,
    /// Gross purchases before returns
    pub purchases: BigDecimal,
    /// Purchase returns accumulated separately, netted on demand
    pub purchase_returns: BigDecimal,
    /// Gross sales before returns
    pub sales: BigDecimal,
    /// Sales returns accumulated separately, netted on demand
    pub sales_returns: BigDecimal,
    /// Direct expenses, one item per entry so the statement can list each
    /// by name
    pub direct_expenses: Vec<LineItem>,
    /// Indirect expenses, retained individually
    pub indirect_expenses: Vec<LineItem>,
    /// Incomes, retained individually
    pub incomes: Vec<LineItem>,
    /// Raw trial balance status over the same snapshot, for the
    /// presentation layer
    pub trial_balance: TrialBalanceCheck,
    /// Advisory anomalies spotted while grouping
    pub warnings: Vec<ValidationWarning>,
}

impl AggregateResult {
    /// Purchases net of purchase returns
    pub fn net_purchases(&self) -> BigDecimal {
        &self.purchases - &self.purchase_returns
    }

    /// Sales net of sales returns
    pub fn net_sales(&self) -> BigDecimal {
        &self.sales - &self.sales_returns
    }

    pub fn direct_expense_total(&self) -> BigDecimal {
        self.direct_expenses.iter().map(|item| &item.amount).sum()
    }

    pub fn indirect_expense_total(&self) -> BigDecimal {
        self.indirect_expenses.iter().map(|item| &item.amount).sum()
    }

    pub fn income_total(&self) -> BigDecimal {
        self.incomes.iter().map(|item| &item.amount).sum()
    }

    /// Trading account debit total before the carry-forward line
    pub fn trading_debit_total(&self) -> BigDecimal {
        &self.opening_stock + self.net_purchases() + self.direct_expense_total()
    }

    /// Trading account credit total before the carry-forward line
    pub fn trading_credit_total(&self) -> BigDecimal {
        self.net_sales() + &self.closing_stock
    }

    /// Positive for a gross profit, negative for a gross loss
    pub fn gross_result(&self) -> BigDecimal {
        self.trading_credit_total() - self.trading_debit_total()
    }
}

/// Group a snapshot of classified entries into statement buckets
///
/// Bucket assignment depends on both the class and the side of the nonzero
/// amount. Anomalous lines (a credit-valued opening stock, an
/// amount-carrying closing stock entry) contribute nothing and are surfaced
/// on [`AggregateResult::warnings`].
pub fn aggregate(
    entries: &[LedgerEntry],
    closing_stock: Option<&BigDecimal>,
) -> AggregateResult {
    let zero = BigDecimal::from(0);
    let mut result = AggregateResult {
        opening_stock: zero.clone(),
        closing_stock: closing_stock.cloned().unwrap_or_else(|| zero.clone()),
        purchases: zero.clone(),
        purchase_returns: zero.clone(),
        sales: zero.clone(),
        sales_returns: zero.clone(),
        direct_expenses: Vec::new(),
        indirect_expenses: Vec::new(),
        incomes: Vec::new(),
        trial_balance: TrialBalanceCheck::over(entries),
        warnings: scan_entries(entries),
    };

    for entry in entries {
        let amount = entry.amount().clone();
        let is_debit = entry.entry_type() == EntryType::Debit;
        match entry.classification {
            Classification::TradingOpeningStock => {
                // A credit-valued opening stock is a data-entry anomaly;
                // it stays out of the total (warned above).
                if is_debit {
                    result.opening_stock += amount;
                }
            }
            Classification::TradingClosingStock => {
                // The separately supplied scalar is authoritative; entries
                // of this class are display-only.
            }
            Classification::TradingPurchases => {
                if entry.subtype == PURCHASE_RETURNS {
                    result.purchase_returns += amount;
                } else {
                    result.purchases += amount;
                }
            }
            Classification::TradingSales => {
                if entry.subtype == SALES_RETURNS {
                    result.sales_returns += amount;
                } else {
                    result.sales += amount;
                }
            }
            Classification::TradingDirectExpense => {
                if is_debit {
                    result
                        .direct_expenses
                        .push(LineItem::new(entry.name.clone(), amount));
                }
            }
            Classification::PnlIndirectExpense => {
                if is_debit {
                    result
                        .indirect_expenses
                        .push(LineItem::new(entry.name.clone(), amount));
                }
            }
            Classification::PnlIncome => {
                if !is_debit && amount > zero {
                    result
                        .incomes
                        .push(LineItem::new(entry.name.clone(), amount));
                }
            }
            Classification::Ignore => {}
        }
    }

    result
}
