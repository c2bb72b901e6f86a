use std::path::PathBuf;

use crate::domain::AccountNumber;

/// Failure to obtain an account listing or an account's raw rows.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("Failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("No statement available for account {0}")]
    NoStatement(AccountNumber),
    #[error("Data source failed: {0}")]
    Source(String),
}

/// Failure to read or write the ledger file. Fatal for the run.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to read ledger file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write ledger file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to encode ledger line: {0}")]
    Encode(#[from] csv::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("Failed to list accounts: {0}")]
    AccountListing(#[source] RetrievalError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
