//! CSV import example: load the bundled sample trial balance and report

use bigdecimal::BigDecimal;
use final_accounts_core::utils::amount::format_amount;
use final_accounts_core::{io, statements, EntryStore};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🧾 Final Accounts Core - CSV Import Example");

    let symbol = "₹";
    let rows = io::read_rows(io::SAMPLE_CSV.as_bytes())?;
    println!("\n📥 Imported {} rows from the sample trial balance", rows.len());

    let mut store = EntryStore::new();
    store.replace_all(rows);

    for entry in store.entries() {
        println!(
            "  {:<22} {} / {}",
            entry.name, entry.classification, entry.subtype
        );
    }

    let check = store.trial_balance();
    println!(
        "\n🔍 Trial balance: Dr {} / Cr {}: {}",
        format_amount(&check.total_debits, symbol),
        format_amount(&check.total_credits, symbol),
        if check.is_balanced {
            "Balanced".to_string()
        } else {
            format!("Not Balanced (Δ {})", format_amount(&check.difference, symbol))
        }
    );

    let closing_stock = BigDecimal::from(40000);
    let buckets = statements::aggregate(store.entries(), Some(&closing_stock));
    for warning in &buckets.warnings {
        println!("  ⚠️  {}", warning);
    }
    let report = statements::build(&buckets);

    println!("\n📈 Results with closing stock {}:", format_amount(&closing_stock, symbol));
    println!(
        "  {}: {}",
        if report.is_gross_profit() { "Gross Profit" } else { "Gross Loss" },
        format_amount(&report.gross_result, symbol)
    );
    println!(
        "  {}: {}",
        if report.is_net_profit() { "Net Profit" } else { "Net Loss" },
        format_amount(&report.net_result, symbol)
    );

    // Export the working trial balance back out in the row format.
    let mut buffer = Vec::new();
    io::write_rows(&mut buffer, store.entries())?;
    println!(
        "\n📤 Exported {} bytes of CSV ready for download",
        buffer.len()
    );

    Ok(())
}
