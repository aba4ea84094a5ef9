//! Keyword-based classification of ledger names
//!
//! Rules are ordered data, evaluated top to bottom with first match winning.
//! Ordering is a correctness requirement, not a presentation choice: the
//! specific patterns ("sales return", "factory rent") must sit above the
//! general ones ("sales", "rent") or lines get misfiled.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::types::Classification;

/// Subtype label marking a sales return contra line
pub const SALES_RETURNS: &str = "Sales Returns (contra)";

/// Subtype label marking a purchase return contra line
pub const PURCHASE_RETURNS: &str = "Purchase Returns (contra)";

/// One `(pattern, class, subtype)` row of the rule table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationRule {
    /// Keyword to look for. Plain patterns match as a case-insensitive
    /// substring; a leading `*` anchors the remainder to the end of the
    /// name ("*interest" matches "Bank Interest" but not "Interest Paid").
    pub pattern: String,
    /// Class assigned when the pattern matches
    pub classification: Classification,
    /// Display subtype assigned alongside the class
    pub subtype: String,
}

impl ClassificationRule {
    pub fn new(
        pattern: impl Into<String>,
        classification: Classification,
        subtype: impl Into<String>,
    ) -> Self {
        Self {
            pattern: pattern.into(),
            classification,
            subtype: subtype.into(),
        }
    }

    /// Case-insensitive match of this rule's pattern against a ledger name
    pub fn matches(&self, name: &str) -> bool {
        let pattern = self.pattern.to_lowercase();
        let name = name.to_lowercase();
        match pattern.strip_prefix('*') {
            Some(suffix) => name.ends_with(suffix),
            None => name.contains(&pattern),
        }
    }
}

/// An ordered rule table
///
/// The table is plain data so callers can supply their own rules or extend
/// the standard set; evaluation order is the vector order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    rules: Vec<ClassificationRule>,
}

impl RuleSet {
    /// Build a rule set from an explicit ordered list
    pub fn new(rules: Vec<ClassificationRule>) -> Self {
        Self { rules }
    }

    /// The built-in keyword table covering the common trading and P&L
    /// ledger names
    pub fn standard() -> Self {
        use Classification::*;
        let rule = ClassificationRule::new;
        Self {
            rules: vec![
                rule("sales return", TradingSales, SALES_RETURNS),
                rule("sales", TradingSales, "Sales"),
                rule("purchase return", TradingPurchases, PURCHASE_RETURNS),
                rule("purchase", TradingPurchases, "Purchases"),
                rule("opening stock", TradingOpeningStock, "Opening Stock"),
                rule("opening inventory", TradingOpeningStock, "Opening Stock"),
                rule("closing stock", TradingClosingStock, "Closing Stock"),
                rule("closing inventory", TradingClosingStock, "Closing Stock"),
                rule("wage", TradingDirectExpense, "Wages"),
                rule("direct labor", TradingDirectExpense, "Wages"),
                rule("labour", TradingDirectExpense, "Wages"),
                rule("carriage in", TradingDirectExpense, "Carriage Inwards"),
                rule("freight in", TradingDirectExpense, "Carriage Inwards"),
                rule("cartage in", TradingDirectExpense, "Carriage Inwards"),
                rule("power", TradingDirectExpense, "Power & Fuel"),
                rule("fuel", TradingDirectExpense, "Power & Fuel"),
                rule("electric", TradingDirectExpense, "Power & Fuel"),
                rule("royalt", TradingDirectExpense, "Royalties"),
                rule("factory rent", TradingDirectExpense, "Factory Rent"),
                rule("factory", TradingDirectExpense, "Factory Rent"),
                rule("salar", PnlIndirectExpense, "Salaries"),
                rule("rent", PnlIndirectExpense, "Rent"),
                rule("carriage out", PnlIndirectExpense, "Carriage Outwards"),
                rule("freight out", PnlIndirectExpense, "Carriage Outwards"),
                rule("cartage out", PnlIndirectExpense, "Carriage Outwards"),
                rule("delivery", PnlIndirectExpense, "Carriage Outwards"),
                rule("admin", PnlIndirectExpense, "Office & Admin"),
                rule("office", PnlIndirectExpense, "Office & Admin"),
                rule("printing", PnlIndirectExpense, "Office & Admin"),
                rule("stationery", PnlIndirectExpense, "Office & Admin"),
                rule("telephone", PnlIndirectExpense, "Office & Admin"),
                rule("internet", PnlIndirectExpense, "Office & Admin"),
                rule("advert", PnlIndirectExpense, "Selling & Dist."),
                rule("marketing", PnlIndirectExpense, "Selling & Dist."),
                rule("promo", PnlIndirectExpense, "Selling & Dist."),
                rule("selling", PnlIndirectExpense, "Selling & Dist."),
                rule("bad debt", PnlIndirectExpense, "Bad Debts"),
                rule("discount allowed", PnlIndirectExpense, "Discount Allowed"),
                rule("depreciation", PnlIndirectExpense, "Depreciation"),
                rule("commission rec", PnlIncome, "Commission Received"),
                rule("*commission", PnlIncome, "Commission Received"),
                rule("interest rec", PnlIncome, "Interest Received"),
                rule("*interest", PnlIncome, "Interest Received"),
                rule("discount received", PnlIncome, "Discount Received"),
            ],
        }
    }

    /// The rules in evaluation order
    pub fn rules(&self) -> &[ClassificationRule] {
        &self.rules
    }

    /// Append a rule at the end of the table (lowest precedence)
    pub fn push(&mut self, rule: ClassificationRule) {
        self.rules.push(rule);
    }

    /// Classify a ledger name; no match falls back to `Ignore`
    pub fn classify(&self, name: &str) -> (Classification, String) {
        for rule in &self.rules {
            if rule.matches(name) {
                return (rule.classification, rule.subtype.clone());
            }
        }
        (
            Classification::Ignore,
            Classification::Ignore.default_subtype().to_string(),
        )
    }
}

/// Classify a ledger name against the standard rule table
pub fn classify(name: &str) -> (Classification, String) {
    static STANDARD: OnceLock<RuleSet> = OnceLock::new();
    STANDARD.get_or_init(RuleSet::standard).classify(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_match_before_their_gross_counterparts() {
        assert_eq!(
            classify("Sales Returns"),
            (Classification::TradingSales, SALES_RETURNS.to_string())
        );
        assert_eq!(
            classify("Purchase Returns"),
            (Classification::TradingPurchases, PURCHASE_RETURNS.to_string())
        );
    }

    #[test]
    fn gross_sales_and_purchases_classify_plainly() {
        assert_eq!(
            classify("Sales"),
            (Classification::TradingSales, "Sales".to_string())
        );
        assert_eq!(
            classify("Purchases"),
            (Classification::TradingPurchases, "Purchases".to_string())
        );
    }

    #[test]
    fn factory_rent_is_direct_but_rent_is_indirect() {
        assert_eq!(
            classify("Factory Rent"),
            (
                Classification::TradingDirectExpense,
                "Factory Rent".to_string()
            )
        );
        assert_eq!(
            classify("Rent"),
            (Classification::PnlIndirectExpense, "Rent".to_string())
        );
    }

    #[test]
    fn salary_stem_catches_both_spellings() {
        assert_eq!(classify("Salaries").0, Classification::PnlIndirectExpense);
        assert_eq!(classify("Salary").0, Classification::PnlIndirectExpense);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(classify("CARRIAGE INWARDS").0, Classification::TradingDirectExpense);
        assert_eq!(classify("opening STOCK").0, Classification::TradingOpeningStock);
    }

    #[test]
    fn end_anchored_income_patterns() {
        assert_eq!(
            classify("Bank Interest"),
            (Classification::PnlIncome, "Interest Received".to_string())
        );
        assert_eq!(
            classify("Interest Received"),
            (Classification::PnlIncome, "Interest Received".to_string())
        );
        assert_eq!(
            classify("Commission"),
            (Classification::PnlIncome, "Commission Received".to_string())
        );
        // Not end-anchored, not a receipt keyword: falls through
        assert_eq!(classify("Interest Paid").0, Classification::Ignore);
    }

    #[test]
    fn discount_allowed_and_received_split_sides() {
        assert_eq!(
            classify("Discount Allowed").0,
            Classification::PnlIndirectExpense
        );
        assert_eq!(classify("Discount Received").0, Classification::PnlIncome);
    }

    #[test]
    fn unknown_names_fall_back_to_ignore() {
        assert_eq!(
            classify("Capital"),
            (Classification::Ignore, "Ignore".to_string())
        );
        assert_eq!(classify("").0, Classification::Ignore);
    }

    #[test]
    fn classification_is_deterministic() {
        let first = classify("Carriage Outwards");
        let second = classify("Carriage Outwards");
        assert_eq!(first, second);
    }

    #[test]
    fn custom_rules_take_vector_order() {
        let mut rules = RuleSet::new(vec![ClassificationRule::new(
            "stock",
            Classification::TradingOpeningStock,
            "Opening Stock",
        )]);
        rules.push(ClassificationRule::new(
            "closing stock",
            Classification::TradingClosingStock,
            "Closing Stock",
        ));
        // The broad rule was installed first, so it shadows the specific one
        assert_eq!(
            rules.classify("Closing Stock").0,
            Classification::TradingOpeningStock
        );
    }
}
