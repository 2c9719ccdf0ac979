use super::account::Balance;

/// The cash pool of a single ATM.
///
/// Every successful withdrawal draws it down. There is no restock operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispenser {
    pub atm_id: String,
    pub available: Balance,
}

impl Dispenser {
    pub fn new(atm_id: impl Into<String>, available: Balance) -> Self {
        Self {
            atm_id: atm_id.into(),
            available,
        }
    }
}
