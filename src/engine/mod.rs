//! Sequential ledger run.
//!
//! Each account is fully processed (row retrieval, aggregation, row build,
//! ledger append) before the next one starts. The ledger file is the only
//! shared state and has exactly one writer.

use tracing::{info, warn};

use crate::{
    domain::{AccountDescriptor, DateRange, LedgerRow, RawRow},
    engine::errors::{RunError, StorageError},
    output::LedgerFile,
    source::DataSource,
};
pub use aggregate::aggregate;
pub use builder::build_row;

mod aggregate;
mod builder;
pub mod errors;

/// Counts reported at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Accounts written to the ledger.
    pub accounts: usize,
    /// Accounts whose retrieval failed and were written as all-zero rows.
    pub failed_retrievals: usize,
}

pub struct LedgerEngine<S> {
    source: S,
    ledger: LedgerFile,
    range: DateRange,
    summary: RunSummary,
}

impl<S: DataSource> LedgerEngine<S> {
    pub fn new(source: S, ledger: LedgerFile, range: DateRange) -> Self {
        Self {
            source,
            ledger,
            range,
            summary: RunSummary::default(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn ledger(&self) -> &LedgerFile {
        &self.ledger
    }

    /// Truncates the ledger to its header, then appends one row per account
    /// in source order.
    pub fn run(&mut self) -> Result<RunSummary, RunError> {
        info!("Initializing...");
        self.summary = RunSummary::default();
        self.ledger.initialize()?;

        info!(
            "Getting accounts for transactions from {} to {}...",
            self.range.start(),
            self.range.end()
        );
        let accounts = self.source.accounts().map_err(RunError::AccountListing)?;

        for account in &accounts {
            self.process_account(account)?;
        }

        info!(
            "Wrote {} accounts to {} ({} without transactions due to retrieval failures)",
            self.summary.accounts,
            self.ledger.path().display(),
            self.summary.failed_retrievals
        );
        Ok(self.summary)
    }

    /// Retrieves, aggregates, and appends one account's row.
    pub fn process_account(
        &mut self,
        account: &AccountDescriptor,
    ) -> Result<LedgerRow, StorageError> {
        info!("Parsing transactions for {} ...", account.name);
        let rows = self.fetch_rows(account);
        let row = build_row(account, &aggregate(rows));
        self.ledger.append_row(&row)?;
        self.summary.accounts += 1;
        Ok(row)
    }

    /// Retrieval failures stop here: the account is treated as having no
    /// transactions.
    fn fetch_rows(&mut self, account: &AccountDescriptor) -> Vec<RawRow> {
        match self.source.raw_rows(account, &self.range) {
            Ok(rows) => rows,
            Err(e) => {
                warn!(
                    "Failed to retrieve transactions for account {}: {e}",
                    account.account_number
                );
                self.summary.failed_retrievals += 1;
                Vec::new()
            }
        }
    }
}
