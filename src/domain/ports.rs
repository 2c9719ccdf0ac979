use super::account::Accounts;
use crate::error::Result;

/// Persistence port for the account ledger.
///
/// Stores work on whole snapshots: `load` returns every account and `save`
/// replaces everything previously saved.
pub trait AccountStore {
    /// Reads the current snapshot. A store that has never been saved to
    /// yields an empty ledger.
    fn load(&self) -> Result<Accounts>;
    /// Overwrites the snapshot with `accounts`.
    fn save(&self, accounts: &Accounts) -> Result<()>;
}

pub type AccountStoreBox = Box<dyn AccountStore>;
