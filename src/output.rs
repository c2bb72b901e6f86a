//! The ledger file: a header line followed by one comma-separated line per
//! account.
//!
//! Every append reads the whole file, adds a line, and rewrites it, so no file
//! handle is held between calls. Fields are not quoted; a comma inside an
//! account name shifts the columns of that line.

use std::path::{Path, PathBuf};

use rust_decimal::Decimal;

use crate::{domain::LedgerRow, engine::errors::StorageError};

/// Column names, in field order.
pub const HEADER: [&str; 17] = [
    "S/N",
    "Account Number",
    "Account Name",
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
    "Total",
    "Average",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerFile {
    path: PathBuf,
}

impl LedgerFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// (Re)creates the file holding only the header line.
    pub fn initialize(&self) -> Result<(), StorageError> {
        let header = render_line(HEADER)?;
        self.write(&header)
    }

    /// Appends one line for `row`, rewriting the file.
    pub fn append_row(&self, row: &LedgerRow) -> Result<(), StorageError> {
        let contents = self.read()?;
        let mut lines: Vec<&str> = contents.split('\n').collect();
        let line = render_line(record(row))?;
        lines.push(&line);
        self.write(&lines.join("\n"))
    }

    /// Current lines, header first.
    pub fn lines(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.read()?.split('\n').map(str::to_owned).collect())
    }

    fn read(&self) -> Result<String, StorageError> {
        std::fs::read_to_string(&self.path).map_err(|source| StorageError::Read {
            path: self.path.clone(),
            source,
        })
    }

    fn write(&self, contents: &str) -> Result<(), StorageError> {
        std::fs::write(&self.path, contents).map_err(|source| StorageError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

/// The row's fields in header order, amounts without trailing zeros.
pub fn record(row: &LedgerRow) -> Vec<String> {
    let mut fields = vec![
        row.serial.to_string(),
        row.account_number.to_string(),
        row.name.clone(),
    ];
    fields.extend(row.months.iter().map(render_amount));
    fields.push(render_amount(&row.total));
    fields.push(render_amount(&row.average));
    fields
}

fn render_amount(amount: &Decimal) -> String {
    amount.normalize().to_string()
}

/// Joins fields with commas, without quoting or a line terminator.
pub fn render_line<I, T>(fields: I) -> Result<String, StorageError>
where
    I: IntoIterator<Item = T>,
    T: AsRef<[u8]>,
{
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Never)
        .from_writer(Vec::new());
    wtr.write_record(fields)?;
    let bytes = wtr
        .into_inner()
        .map_err(|e| StorageError::Encode(e.into_error().into()))?;
    let line = String::from_utf8_lossy(&bytes);
    Ok(line.trim_end_matches(['\r', '\n']).to_owned())
}
