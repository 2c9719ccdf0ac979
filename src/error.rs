use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AtmError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
    #[error("Prompt error: {0}")]
    PromptError(#[from] dialoguer::Error),
    #[error("Account ledger {} is corrupt: {source}", path.display())]
    PersistenceCorrupt {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Account ledger {} is corrupt: key {key:?} holds account {account_number:?}", path.display())]
    LedgerKeyMismatch {
        path: PathBuf,
        key: String,
        account_number: String,
    },
    #[error("Failed to write account ledger {}: {source}", path.display())]
    PersistenceWriteFailure {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Account {0} already exists")]
    AccountAlreadyExists(String),
    #[error("No account is logged in")]
    NotLoggedIn,
}

/// Rejection reasons for a requested withdrawal amount.
///
/// These are user-facing outcomes, not faults: they never escape a session as
/// an `AtmError`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    #[error("{0:?} is not a whole number")]
    NotANumber(String),
    #[error("{0} is not a positive amount")]
    NotPositive(String),
}

pub type Result<T> = std::result::Result<T, AtmError>;
