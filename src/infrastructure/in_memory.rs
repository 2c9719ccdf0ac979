use crate::domain::account::Accounts;
use crate::domain::ports::AccountStore;
use crate::error::Result;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// An account store that keeps its snapshot in memory.
///
/// Clones share the same snapshot, so a test can hand one handle to a
/// session and inspect what was saved through another. Used for `--in-memory`
/// runs, where nothing should touch the disk.
#[derive(Debug, Default, Clone)]
pub struct InMemoryAccountStore {
    snapshot: Rc<RefCell<Option<Accounts>>>,
    saves: Rc<Cell<usize>>,
}

impl InMemoryAccountStore {
    /// Creates a store that has never been saved to.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store whose snapshot already holds `accounts`.
    pub fn with_accounts(accounts: Accounts) -> Self {
        Self {
            snapshot: Rc::new(RefCell::new(Some(accounts))),
            saves: Rc::default(),
        }
    }

    /// The last saved snapshot, if any.
    pub fn snapshot(&self) -> Option<Accounts> {
        self.snapshot.borrow().clone()
    }

    /// Number of `save` calls seen so far.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl AccountStore for InMemoryAccountStore {
    fn load(&self) -> Result<Accounts> {
        Ok(self.snapshot.borrow().clone().unwrap_or_default())
    }

    fn save(&self, accounts: &Accounts) -> Result<()> {
        *self.snapshot.borrow_mut() = Some(accounts.clone());
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
