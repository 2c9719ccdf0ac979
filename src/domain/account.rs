use crate::error::AmountError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

/// Represents a non-negative amount of money held in whole currency units.
///
/// Serialized as a bare integer so the ledger file keeps its plain
/// `"balance": 1000000` shape. A negative value in the ledger fails to
/// deserialize.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Balance(pub u64);

/// Represents a positive withdrawal amount.
///
/// Ensures that requested amounts are always strictly positive. Wider than
/// [`Balance`] so a typed request larger than any balance is still an amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(u128);

impl Amount {
    /// The largest representable request. No balance can cover it.
    pub const MAX: Self = Self(u128::MAX);

    pub fn new(value: i64) -> Result<Self, AmountError> {
        if value > 0 {
            Ok(Self(u128::from(value.unsigned_abs())))
        } else {
            Err(AmountError::NotPositive(value.to_string()))
        }
    }

    pub fn value(&self) -> u128 {
        self.0
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    /// Parses free-form user input such as `" 250 "` or `"+40"`.
    ///
    /// Any run of digits is a number, however long. Values too large to
    /// represent saturate to [`Amount::MAX`] and are refused by the balance
    /// check rather than as text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AmountError::NotANumber(s.to_string()));
        }
        if text.starts_with('-') || digits.bytes().all(|b| b == b'0') {
            return Err(AmountError::NotPositive(text.to_string()));
        }

        match digits.parse::<u128>() {
            Ok(value) => Ok(Self(value)),
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(Self::MAX),
            Err(_) => Err(AmountError::NotANumber(s.to_string())),
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Balance {
    pub const ZERO: Self = Self(0);

    pub fn new(amount: u64) -> Self {
        Self(amount)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// Returns the balance left after taking `amount` out, or `None` if the
    /// balance does not cover it.
    pub fn checked_sub(self, amount: Amount) -> Option<Self> {
        u64::try_from(amount.0)
            .ok()
            .and_then(|amount| self.0.checked_sub(amount))
            .map(Self)
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A customer account as stored in the ledger.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// The unique identifier, also used as the ledger key.
    pub account_number: String,
    /// Plain-text PIN, compared for exact equality.
    pub pin: String,
    pub balance: Balance,
}

/// The whole ledger, keyed by account number.
pub type Accounts = BTreeMap<String, Account>;

impl Account {
    pub fn new(account_number: impl Into<String>, pin: impl Into<String>, balance: Balance) -> Self {
        Self {
            account_number: account_number.into(),
            pin: pin.into(),
            balance,
        }
    }

    pub fn verify_pin(&self, pin: &str) -> bool {
        self.pin == pin
    }
}
