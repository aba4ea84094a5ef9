//! Basic final accounts example: key in a trial balance, derive statements

use bigdecimal::BigDecimal;
use final_accounts_core::utils::amount::format_amount;
use final_accounts_core::{statements, EntryStore, Statement};

fn print_statement(statement: &Statement, symbol: &str) {
    println!("\n📒 {}", statement.title);
    println!("  Debit:");
    for line in &statement.debit_lines {
        println!("    {:<28} {}", line.label, format_amount(&line.amount, symbol));
    }
    println!("    {:<28} {}", "Total", format_amount(&statement.total_debit, symbol));
    println!("  Credit:");
    for line in &statement.credit_lines {
        println!("    {:<28} {}", line.label, format_amount(&line.amount, symbol));
    }
    println!("    {:<28} {}", "Total", format_amount(&statement.total_credit, symbol));
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🧾 Final Accounts Core - Basic Statements Example");

    let symbol = "₹";
    let mut store = EntryStore::new();

    // Key in a small trial balance; classification is derived from the
    // ledger names as rows are added.
    store.add_entry("Opening Stock", BigDecimal::from(50000), BigDecimal::from(0));
    store.add_entry("Purchases", BigDecimal::from(150000), BigDecimal::from(0));
    store.add_entry("Wages", BigDecimal::from(20000), BigDecimal::from(0));
    store.add_entry("Sales", BigDecimal::from(0), BigDecimal::from(250000));
    store.add_entry("Rent", BigDecimal::from(12000), BigDecimal::from(0));
    store.add_entry("Commission Received", BigDecimal::from(0), BigDecimal::from(8000));
    store.add_entry("Capital", BigDecimal::from(0), BigDecimal::from(100000));
    store.add_entry("Cash", BigDecimal::from(126000), BigDecimal::from(0));

    println!("\n📋 Trial Balance ({} entries):", store.len());
    for entry in store.entries() {
        println!(
            "  {:<22} Dr {:<12} Cr {:<12} [{}]",
            entry.name,
            format_amount(&entry.debit, symbol),
            format_amount(&entry.credit, symbol),
            entry.classification
        );
    }

    let check = store.trial_balance();
    if check.is_balanced {
        println!("  Status: Balanced ✅");
    } else {
        println!(
            "  Status: Not Balanced ❌ (Δ {})",
            format_amount(&check.difference, symbol)
        );
    }

    // Derive the statements with a closing stock of 30,000.
    let closing_stock = BigDecimal::from(30000);
    let report = statements::generate(store.entries(), Some(&closing_stock));

    print_statement(&report.trading, symbol);
    print_statement(&report.profit_and_loss, symbol);

    println!("\n📈 Summary:");
    let gross_label = if report.is_gross_profit() {
        "Gross Profit"
    } else {
        "Gross Loss"
    };
    let net_label = if report.is_net_profit() {
        "Net Profit"
    } else {
        "Net Loss"
    };
    println!("  {}: {}", gross_label, format_amount(&report.gross_result, symbol));
    println!("  {}: {}", net_label, format_amount(&report.net_result, symbol));

    Ok(())
}
