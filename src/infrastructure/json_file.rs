use crate::domain::account::Accounts;
use crate::domain::ports::AccountStore;
use crate::error::{AtmError, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// The account ledger kept as a single JSON document on disk.
///
/// The file holds one object mapping account numbers to account records.
/// Every `save` rewrites the whole file; nothing is appended and there is no
/// protection against a crash halfway through a write.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store backed by the file at `path`. The file does not need to
    /// exist yet.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn corrupt(&self, source: serde_json::Error) -> AtmError {
        AtmError::PersistenceCorrupt {
            path: self.path.clone(),
            source,
        }
    }
}

impl AccountStore for JsonFileStore {
    fn load(&self) -> Result<Accounts> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Accounts::new()),
            Err(e) => return Err(e.into()),
        };

        let accounts: Accounts = serde_json::from_str(&content).map_err(|e| self.corrupt(e))?;

        if let Some((key, account)) = accounts
            .iter()
            .find(|(key, account)| **key != account.account_number)
        {
            return Err(AtmError::LedgerKeyMismatch {
                path: self.path.clone(),
                key: key.clone(),
                account_number: account.account_number.clone(),
            });
        }

        Ok(accounts)
    }

    fn save(&self, accounts: &Accounts) -> Result<()> {
        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        accounts.serialize(&mut serializer)?;

        fs::write(&self.path, buf).map_err(|source| AtmError::PersistenceWriteFailure {
            path: self.path.clone(),
            source,
        })
    }
}
