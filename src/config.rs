//! Runtime configuration.
//!
//! The defaults describe a single demo ATM: one machine holding 5000 in cash,
//! a ledger in `accounts.json`, and new accounts opened with 1,000,000.

use crate::domain::account::Balance;
use std::path::PathBuf;

pub const DEFAULT_ACCOUNTS_FILE: &str = "accounts.json";
pub const DEFAULT_ATM_ID: &str = "ATM-001";
pub const DEFAULT_DISPENSER_CASH: u64 = 5000;
pub const DEFAULT_STARTING_BALANCE: u64 = 1_000_000;
pub const DEFAULT_BANK_NAME: &str = "InfoSuper Bank";
pub const DEFAULT_CURRENCY: &str = "TL";
pub const DEFAULT_PRESET_AMOUNTS: [i64; 4] = [50, 100, 200, 1000];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtmConfig {
    /// Ledger file. `None` keeps the ledger in memory for the run only.
    pub accounts_file: Option<PathBuf>,
    pub atm_id: String,
    /// Cash loaded in the dispenser at startup.
    pub dispenser_cash: Balance,
    /// Balance given to provisioned accounts.
    pub starting_balance: Balance,
    pub bank_name: String,
    pub currency: String,
    /// Quick-pick amounts offered on the withdrawal menu.
    pub preset_amounts: Vec<i64>,
}

impl Default for AtmConfig {
    fn default() -> Self {
        Self {
            accounts_file: Some(PathBuf::from(DEFAULT_ACCOUNTS_FILE)),
            atm_id: DEFAULT_ATM_ID.to_string(),
            dispenser_cash: Balance::new(DEFAULT_DISPENSER_CASH),
            starting_balance: Balance::new(DEFAULT_STARTING_BALANCE),
            bank_name: DEFAULT_BANK_NAME.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            preset_amounts: DEFAULT_PRESET_AMOUNTS.to_vec(),
        }
    }
}
