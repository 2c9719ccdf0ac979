use super::account::{Amount, Balance};
use chrono::{Local, NaiveDateTime};
use rand::Rng;
use std::ops::RangeInclusive;

/// Range of the random six-digit transaction identifiers.
pub const TRANSACTION_ID_RANGE: RangeInclusive<u32> = 100_000..=999_999;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Informational record of a successful withdrawal.
///
/// Receipts are never persisted and the transaction identifier carries no
/// uniqueness guarantee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub transaction_id: u32,
    pub issued_at: NaiveDateTime,
    pub account_number: String,
    pub amount: Amount,
    pub remaining_balance: Balance,
}

impl Receipt {
    /// Issues a receipt stamped with the local time and a random identifier
    /// drawn from `rng`.
    pub fn issue<R: Rng>(
        rng: &mut R,
        account_number: &str,
        amount: Amount,
        remaining_balance: Balance,
    ) -> Self {
        Self {
            transaction_id: rng.gen_range(TRANSACTION_ID_RANGE),
            issued_at: Local::now().naive_local(),
            account_number: account_number.to_string(),
            amount,
            remaining_balance,
        }
    }

    /// Renders the receipt as the multi-line text shown to the customer.
    pub fn render(&self, bank_name: &str, currency: &str) -> String {
        format!(
            "Transaction ID: {}\n\
             Date: {}\n\
             Account Number: {}\n\
             Amount Withdrawn: {} {currency}\n\
             Remaining Balance: {} {currency}\n\
             Thank you for choosing {bank_name}!",
            self.transaction_id,
            self.issued_at.format(TIMESTAMP_FORMAT),
            self.account_number,
            self.amount,
            self.remaining_balance,
        )
    }
}
