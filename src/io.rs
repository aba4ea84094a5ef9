//! CSV import and export of trial balance rows
//!
//! The row format is `Ledger,Debit,Credit`. Import is forgiving: a leading
//! header row is skipped, blank lines and short records are ignored, and
//! unparseable amounts degrade to zero rather than failing the load.

use std::io::{Read, Write};

use bigdecimal::BigDecimal;
use csv::{ReaderBuilder, Trim, WriterBuilder};

use crate::types::{LedgerEntry, LedgerResult, TrialBalanceRow};
use crate::utils::amount::parse_amount;

/// A small sample trial balance, handy for demos and smoke tests
pub const SAMPLE_CSV: &str = "\
Ledger,Debit,Credit
Opening Stock,150000,
Purchases,300000,
Purchase Returns,,10000
Wages,20000,
Sales,,500000
Sales Returns,5000,
Carriage Inwards,6000,
Rent,12000,
Salaries,25000,
Discount Received,,3000
Commission Received,,8000
Depreciation,7000,
";

/// Read `Ledger,Debit,Credit` rows from a CSV source
///
/// Only transport-level failures error; malformed field content never does.
pub fn read_rows<R: Read>(reader: R) -> LedgerResult<Vec<TrialBalanceRow>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (index, record) in csv_reader.records().enumerate() {
        let record = record?;
        let first = record.get(0).unwrap_or("");
        if index == 0 && first.to_lowercase().contains("ledger") {
            continue;
        }
        if record.len() < 3 {
            continue;
        }
        rows.push(TrialBalanceRow {
            name: first.to_string(),
            debit: parse_amount(record.get(1).unwrap_or("")),
            credit: parse_amount(record.get(2).unwrap_or("")),
        });
    }
    Ok(rows)
}

/// Write entries back out in the row format
///
/// Zero amounts are written as empty fields, mirroring how trial balances
/// are usually keyed in. Classification and manual overrides are not part
/// of the row format and are lost on round-trip.
pub fn write_rows<W: Write>(writer: W, entries: &[LedgerEntry]) -> LedgerResult<()> {
    let mut csv_writer = WriterBuilder::new().from_writer(writer);
    csv_writer.write_record(["Ledger", "Debit", "Credit"])?;

    let zero = BigDecimal::from(0);
    for entry in entries {
        let debit = if entry.debit > zero {
            entry.debit.to_string()
        } else {
            String::new()
        };
        let credit = if entry.credit > zero {
            entry.credit.to_string()
        } else {
            String::new()
        };
        csv_writer.write_record([entry.name.as_str(), debit.as_str(), credit.as_str()])?;
    }
    csv_writer.flush()?;
    Ok(())
}
