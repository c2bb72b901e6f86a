//! Where accounts and their raw transaction rows come from.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{
    domain::{AccountDescriptor, DateRange, RawRow},
    engine::errors::RetrievalError,
    parsing,
};

/// The external collaborator that yields accounts and, per account, the raw
/// rows of its transaction table.
///
/// Rows for one month must be contiguous; the aggregator does not re-merge
/// months that come back out of order.
pub trait DataSource {
    /// Accounts in ledger order.
    fn accounts(&mut self) -> Result<Vec<AccountDescriptor>, RetrievalError>;

    /// Raw rows for `account` dated within `range`, already filtered to
    /// records with a non-empty first cell and at least five cells.
    fn raw_rows(
        &mut self,
        account: &AccountDescriptor,
        range: &DateRange,
    ) -> Result<Vec<RawRow>, RetrievalError>;
}

/// Reads back-office exports from disk: an account listing CSV and one
/// `<account number>.csv` statement per account in `statements_dir`.
#[derive(Debug, Clone)]
pub struct CsvExportSource {
    accounts_file: PathBuf,
    statements_dir: PathBuf,
}

impl CsvExportSource {
    pub fn new(accounts_file: impl Into<PathBuf>, statements_dir: impl Into<PathBuf>) -> Self {
        Self {
            accounts_file: accounts_file.into(),
            statements_dir: statements_dir.into(),
        }
    }

    pub fn statement_path(&self, account: &AccountDescriptor) -> PathBuf {
        self.statements_dir
            .join(format!("{}.csv", account.account_number.as_str().trim()))
    }
}

fn open_reader(path: &Path) -> Result<csv::Reader<std::fs::File>, RetrievalError> {
    parsing::reader_builder()
        .from_path(path)
        .map_err(|source| RetrievalError::Open {
            path: path.to_path_buf(),
            source,
        })
}

impl DataSource for CsvExportSource {
    fn accounts(&mut self) -> Result<Vec<AccountDescriptor>, RetrievalError> {
        let mut rdr = open_reader(&self.accounts_file)?;
        let accounts: Vec<_> = parsing::deserialize_accounts(&mut rdr).collect();
        debug!(
            "Read {} accounts from {}",
            accounts.len(),
            self.accounts_file.display()
        );
        Ok(accounts)
    }

    fn raw_rows(
        &mut self,
        account: &AccountDescriptor,
        range: &DateRange,
    ) -> Result<Vec<RawRow>, RetrievalError> {
        let path = self.statement_path(account);
        if !path.is_file() {
            return Err(RetrievalError::NoStatement(account.account_number.clone()));
        }
        let mut rdr = open_reader(&path)?;
        Ok(parsing::deserialize_statement(&mut rdr, *range).collect())
    }
}
