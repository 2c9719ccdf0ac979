//! Application layer containing the ATM business rules.
//!
//! `authorizer` decides individual withdrawals. `session` owns the mutable
//! state of a running ATM (ledger, dispenser, logged-in account) and writes
//! the ledger back after every change.

pub mod authorizer;
pub mod session;
