//! Domain layer: accounts, the cash dispenser, receipts and the storage port.

pub mod account;
pub mod dispenser;
pub mod ports;
pub mod receipt;
