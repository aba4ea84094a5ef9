//! Construction of the Trading and Profit & Loss accounts
//!
//! The builder appends the balancing figure (gross profit/loss carried
//! down, net profit/loss) to the short side of each statement, so both
//! sides total identically by construction. A zero result counts as the
//! profit branch.

use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::statements::aggregate::AggregateResult;
use crate::types::{Statement, StatementLine, TrialBalanceCheck};

/// The derived report: both statements plus the headline figures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialStatements {
    pub trading: Statement,
    pub profit_and_loss: Statement,
    /// Positive (or zero) for a gross profit, negative for a gross loss
    pub gross_result: BigDecimal,
    /// Positive (or zero) for a net profit, negative for a net loss
    pub net_result: BigDecimal,
    /// Raw trial balance status; informational only, generation never
    /// blocks on it
    pub trial_balance: TrialBalanceCheck,
    /// When the report was generated
    pub generated_at: NaiveDateTime,
}

impl FinancialStatements {
    pub fn is_gross_profit(&self) -> bool {
        self.gross_result >= BigDecimal::from(0)
    }

    pub fn is_net_profit(&self) -> bool {
        self.net_result >= BigDecimal::from(0)
    }
}

fn sum_lines(lines: &[StatementLine]) -> BigDecimal {
    lines.iter().map(|line| &line.amount).sum()
}

/// Build both statements from aggregated buckets
pub fn build(aggregate: &AggregateResult) -> FinancialStatements {
    let zero = BigDecimal::from(0);

    // Trading account, debit side: opening stock, net purchases, then each
    // direct expense in entry order.
    let mut trading_debit = Vec::new();
    if aggregate.opening_stock > zero {
        trading_debit.push(StatementLine::new(
            "To Opening Stock",
            aggregate.opening_stock.clone(),
        ));
    }
    let net_purchases = aggregate.net_purchases();
    if net_purchases > zero {
        trading_debit.push(StatementLine::new("To Purchases", net_purchases));
    }
    for item in &aggregate.direct_expenses {
        trading_debit.push(StatementLine::new(
            format!("To {}", item.name),
            item.amount.clone(),
        ));
    }

    // Credit side: net sales, then closing stock.
    let mut trading_credit = Vec::new();
    let net_sales = aggregate.net_sales();
    if net_sales > zero {
        trading_credit.push(StatementLine::new("By Sales", net_sales));
    }
    if aggregate.closing_stock > zero {
        trading_credit.push(StatementLine::new(
            "By Closing Stock",
            aggregate.closing_stock.clone(),
        ));
    }

    // Carry the gross result down on the short side so both totals agree.
    let gross_result = sum_lines(&trading_credit) - sum_lines(&trading_debit);
    if gross_result >= zero {
        trading_debit.push(StatementLine::new(
            "To Gross Profit c/d",
            gross_result.clone(),
        ));
    } else {
        trading_credit.push(StatementLine::new(
            "By Gross Loss c/d",
            gross_result.abs(),
        ));
    }
    let trading = Statement {
        title: "Trading Account".to_string(),
        total_debit: sum_lines(&trading_debit),
        total_credit: sum_lines(&trading_credit),
        debit_lines: trading_debit,
        credit_lines: trading_credit,
    };

    // Profit & Loss account: the gross result brought down opens whichever
    // side it belongs to, expenses and incomes follow in entry order.
    let mut pl_debit = Vec::new();
    let mut pl_credit = Vec::new();
    if gross_result >= zero {
        pl_credit.push(StatementLine::new(
            "By Gross Profit b/d",
            gross_result.clone(),
        ));
    } else {
        pl_debit.push(StatementLine::new("To Gross Loss b/d", gross_result.abs()));
    }
    for item in &aggregate.indirect_expenses {
        pl_debit.push(StatementLine::new(
            format!("To {}", item.name),
            item.amount.clone(),
        ));
    }
    for item in &aggregate.incomes {
        pl_credit.push(StatementLine::new(
            format!("By {}", item.name),
            item.amount.clone(),
        ));
    }

    let net_result = sum_lines(&pl_credit) - sum_lines(&pl_debit);
    if net_result >= zero {
        pl_debit.push(StatementLine::new("To Net Profit", net_result.clone()));
    } else {
        pl_credit.push(StatementLine::new("By Net Loss", net_result.abs()));
    }
    let profit_and_loss = Statement {
        title: "Profit & Loss Account".to_string(),
        total_debit: sum_lines(&pl_debit),
        total_credit: sum_lines(&pl_credit),
        debit_lines: pl_debit,
        credit_lines: pl_credit,
    };

    FinancialStatements {
        trading,
        profit_and_loss,
        gross_result,
        net_result,
        trial_balance: aggregate.trial_balance.clone(),
        generated_at: chrono::Utc::now().naive_utc(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::EntryStore;
    use crate::statements::aggregate::aggregate;

    fn dec(value: i64) -> BigDecimal {
        BigDecimal::from(value)
    }

    fn has_line(lines: &[StatementLine], label: &str, amount: i64) -> bool {
        lines
            .iter()
            .any(|line| line.label == label && line.amount == dec(amount))
    }

    #[test]
    fn gross_profit_is_carried_down_on_the_debit_side() {
        let mut store = EntryStore::new();
        store.add_entry("Opening Stock", dec(50000), dec(0));
        store.add_entry("Purchases", dec(150000), dec(0));
        store.add_entry("Sales", dec(0), dec(250000));
        let report = build(&aggregate(store.entries(), None));

        assert_eq!(report.gross_result, dec(50000));
        assert!(has_line(
            &report.trading.debit_lines,
            "To Gross Profit c/d",
            50000
        ));
        assert_eq!(report.trading.total_debit, dec(250000));
        assert_eq!(report.trading.total_credit, dec(250000));
    }

    #[test]
    fn gross_loss_is_carried_down_on_the_credit_side() {
        let mut store = EntryStore::new();
        store.add_entry("Opening Stock", dec(50000), dec(0));
        store.add_entry("Purchases", dec(150000), dec(0));
        store.add_entry("Sales", dec(0), dec(150000));
        let report = build(&aggregate(store.entries(), None));

        assert_eq!(report.gross_result, dec(-50000));
        assert!(has_line(
            &report.trading.credit_lines,
            "By Gross Loss c/d",
            50000
        ));
        assert_eq!(report.trading.total_debit, dec(200000));
        assert_eq!(report.trading.total_credit, dec(200000));
        assert!(has_line(
            &report.profit_and_loss.debit_lines,
            "To Gross Loss b/d",
            50000
        ));
    }

    #[test]
    fn profit_and_loss_account_nets_expenses_against_gross_profit() {
        let mut store = EntryStore::new();
        store.add_entry("Opening Stock", dec(50000), dec(0));
        store.add_entry("Purchases", dec(150000), dec(0));
        store.add_entry("Sales", dec(0), dec(250000));
        store.add_entry("Rent", dec(12000), dec(0));
        let closing = dec(30000);
        let report = build(&aggregate(store.entries(), Some(&closing)));

        assert_eq!(report.gross_result, dec(80000));
        assert!(has_line(
            &report.profit_and_loss.credit_lines,
            "By Gross Profit b/d",
            80000
        ));
        assert!(has_line(&report.profit_and_loss.debit_lines, "To Rent", 12000));
        assert!(has_line(
            &report.profit_and_loss.debit_lines,
            "To Net Profit",
            68000
        ));
        assert_eq!(report.net_result, dec(68000));
        assert_eq!(report.profit_and_loss.total_debit, dec(80000));
        assert_eq!(report.profit_and_loss.total_credit, dec(80000));
    }

    #[test]
    fn net_loss_lands_on_the_credit_side() {
        let mut store = EntryStore::new();
        store.add_entry("Sales", dec(0), dec(100000));
        store.add_entry("Purchases", dec(90000), dec(0));
        store.add_entry("Salaries", dec(25000), dec(0));
        let report = build(&aggregate(store.entries(), None));

        assert_eq!(report.gross_result, dec(10000));
        assert_eq!(report.net_result, dec(-15000));
        assert!(!report.is_net_profit());
        assert!(has_line(
            &report.profit_and_loss.credit_lines,
            "By Net Loss",
            15000
        ));
        assert!(report.profit_and_loss.is_balanced());
    }

    #[test]
    fn zero_results_take_the_profit_branch() {
        let mut store = EntryStore::new();
        store.add_entry("Purchases", dec(1000), dec(0));
        store.add_entry("Sales", dec(0), dec(1000));
        let report = build(&aggregate(store.entries(), None));

        assert_eq!(report.gross_result, dec(0));
        assert!(report.is_gross_profit());
        assert!(has_line(
            &report.trading.debit_lines,
            "To Gross Profit c/d",
            0
        ));
        assert!(has_line(
            &report.profit_and_loss.debit_lines,
            "To Net Profit",
            0
        ));
        assert!(report.trading.is_balanced());
        assert!(report.profit_and_loss.is_balanced());
    }

    #[test]
    fn empty_input_still_balances() {
        let report = build(&aggregate(&[], None));
        assert!(report.trading.is_balanced());
        assert!(report.profit_and_loss.is_balanced());
        assert_eq!(report.trading.total_debit, dec(0));
    }

    #[test]
    fn direct_expenses_keep_entry_order_after_purchases() {
        let mut store = EntryStore::new();
        store.add_entry("Purchases", dec(300000), dec(0));
        store.add_entry("Wages", dec(20000), dec(0));
        store.add_entry("Carriage Inwards", dec(6000), dec(0));
        store.add_entry("Sales", dec(0), dec(500000));
        let report = build(&aggregate(store.entries(), None));

        let labels: Vec<&str> = report
            .trading
            .debit_lines
            .iter()
            .map(|line| line.label.as_str())
            .collect();
        assert_eq!(
            labels,
            vec![
                "To Purchases",
                "To Wages",
                "To Carriage Inwards",
                "To Gross Profit c/d"
            ]
        );
    }

    #[test]
    fn zero_figures_are_suppressed_from_the_line_lists() {
        let mut store = EntryStore::new();
        store.add_entry("Sales", dec(0), dec(500));
        let report = build(&aggregate(store.entries(), None));
        assert!(!report
            .trading
            .debit_lines
            .iter()
            .any(|line| line.label == "To Opening Stock" || line.label == "To Purchases"));
        assert!(!report
            .trading
            .credit_lines
            .iter()
            .any(|line| line.label == "By Closing Stock"));
    }
}
