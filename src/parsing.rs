//! Text parsing for scraped tables.
//!
//! Account listings and statement exports are read in two stages:
//! 1. Each CSV record is filtered on its shape (cell count, non-empty first cell)
//!    and the relevant cells are deserialized by serde into a flat record.
//! 2. `From` converts the flat record into the domain type.
//!
//! Malformed records are logged and skipped. Amount and date text never fail:
//! a bad amount reads as zero and a bad date yields an unrecognized month code.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::{AccountDescriptor, DateRange, RawRow};

/// Account listing rows need serial, name and account number.
const ACCOUNT_MIN_CELLS: usize = 3;
/// Statement rows need at least date .. amount.
const STATEMENT_MIN_CELLS: usize = 5;
const DATE_COLUMN: usize = 0;
const AMOUNT_COLUMN: usize = 4;

/// Parses amount text such as `1,234.50`. Thousands separators are dropped;
/// empty or malformed text is zero. Well-formed numbers beyond the decimal
/// range are clamped to `Decimal::MAX` / `Decimal::MIN`.
pub fn parse_amount(text: &str) -> Decimal {
    let cleaned = text.replace(',', "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return Decimal::ZERO;
    }
    if let Ok(amount) = Decimal::from_str(cleaned).or_else(|_| Decimal::from_scientific(cleaned)) {
        return amount;
    }
    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => Decimal::try_from(value).unwrap_or_else(|_| {
            let clamped = if value.is_sign_negative() {
                Decimal::MIN
            } else {
                Decimal::MAX
            };
            warn!("Amount {text:?} is out of range, clamping to {clamped}");
            clamped
        }),
        _ => {
            warn!("Amount {text:?} is not a number, reading it as zero");
            Decimal::ZERO
        }
    }
}

/// Extracts the month code of a `YYYY-MM-DD` date: the text between the first
/// and second `-`. A date without a `-` yields an empty code.
pub fn month_code(date: &str) -> &str {
    date.trim().split('-').nth(1).unwrap_or("")
}

/// Flat representation of an account listing record.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CsvAccount {
    serial: String,
    name: String,
    number: String,
}

impl From<CsvAccount> for AccountDescriptor {
    fn from(value: CsvAccount) -> Self {
        AccountDescriptor::new(value.serial, value.name, value.number)
    }
}

/// Flat representation of the two statement cells the pipeline uses.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CsvStatementRow {
    date: String,
    amount: String,
}

impl From<CsvStatementRow> for RawRow {
    fn from(value: CsvStatementRow) -> Self {
        RawRow::new(value.date, value.amount)
    }
}

/// Keeps records with at least `min_cells` cells and a non-empty first cell,
/// then deserializes the cells at `columns` into `T`.
fn shaped_records<'r, D, T>(
    reader: &'r mut csv::Reader<D>,
    min_cells: usize,
    columns: &'r [usize],
) -> impl Iterator<Item = T>
where
    D: std::io::Read,
    T: for<'de> Deserialize<'de>,
{
    reader
        .records()
        .filter_map(|result| match result {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Failed to read record: {e}");
                None
            }
        })
        .filter(move |record| {
            record.len() >= min_cells && record.get(0).is_some_and(|cell| !cell.trim().is_empty())
        })
        .filter_map(move |record| {
            let cells: Vec<&str> = columns.iter().filter_map(|&i| record.get(i)).collect();
            match csv::StringRecord::from(cells).deserialize::<T>(None) {
                Ok(row) => Some(row),
                Err(e) => {
                    warn!("Failed to deserialize record {record:?}: {e}");
                    None
                }
            }
        })
}

/// Lazily reads account descriptors from a listing export, in listing order.
pub fn deserialize_accounts<D: std::io::Read>(
    reader: &mut csv::Reader<D>,
) -> impl Iterator<Item = AccountDescriptor> {
    const COLUMNS: [usize; 3] = [0, 1, 2];
    shaped_records(reader, ACCOUNT_MIN_CELLS, &COLUMNS).map(|account: CsvAccount| account.into())
}

/// Lazily reads raw transaction rows from a statement export, keeping those
/// dated inside `range`. Rows whose date cannot be read are passed through.
pub fn deserialize_statement<D: std::io::Read>(
    reader: &mut csv::Reader<D>,
    range: DateRange,
) -> impl Iterator<Item = RawRow> {
    const COLUMNS: [usize; 2] = [DATE_COLUMN, AMOUNT_COLUMN];
    shaped_records(reader, STATEMENT_MIN_CELLS, &COLUMNS)
        .map(|row: CsvStatementRow| RawRow::from(row))
        .filter(move |row| match NaiveDate::parse_from_str(row.date.trim(), "%Y-%m-%d") {
            Ok(date) => range.contains(date),
            Err(_) => {
                debug!("Row dated {:?} has no readable date, keeping it", row.date);
                true
            }
        })
}

/// Reader settings shared by listing and statement exports: a header line,
/// ragged rows, trimmed cells.
pub fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(true).flexible(true).trim(csv::Trim::All);
    builder
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    #[test]
    fn amount_drops_thousands_separators() {
        assert_eq!(parse_amount("1,234.50"), dec!(1234.5));
        assert_eq!(parse_amount("1,000,000"), dec!(1000000));
    }

    #[test]
    fn empty_or_malformed_amount_is_zero() {
        assert_eq!(parse_amount(""), Decimal::ZERO);
        assert_eq!(parse_amount("   "), Decimal::ZERO);
        assert_eq!(parse_amount("n/a"), Decimal::ZERO);
    }

    #[test]
    fn out_of_range_amounts_clamp() {
        assert_eq!(parse_amount("1e30"), Decimal::MAX);
        assert_eq!(parse_amount("-1e30"), Decimal::MIN);
        assert_eq!(
            parse_amount("100,000,000,000,000,000,000,000,000,000"),
            Decimal::MAX
        );
    }

    #[test]
    fn negative_amounts_parse() {
        assert_eq!(parse_amount("-2,500.25"), dec!(-2500.25));
    }

    #[test]
    fn month_code_is_second_dash_segment() {
        assert_eq!(month_code("2023-01-05"), "01");
        assert_eq!(month_code(" 2023-11-30 "), "11");
        assert_eq!(month_code("05/01/2023"), "");
        assert_eq!(month_code(""), "");
    }
}
