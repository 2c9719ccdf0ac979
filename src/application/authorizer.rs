use crate::domain::account::{Account, Amount, Balance};
use crate::domain::dispenser::Dispenser;
use crate::error::AmountError;

/// Result of a withdrawal request.
///
/// Every variant is a normal business outcome. Only `Success` implies that
/// the account and the dispenser were mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WithdrawalOutcome {
    Success { amount: Amount, new_balance: Balance },
    InvalidAmount(AmountError),
    InsufficientAccountFunds,
    InsufficientDispenserFunds { maximum: Balance },
}

impl WithdrawalOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The message shown to the customer, with amounts labelled in `currency`.
    pub fn message(&self, currency: &str) -> String {
        match self {
            Self::Success {
                amount,
                new_balance,
            } => format!(
                "Success! You have withdrawn {amount} {currency}. New balance: {new_balance} {currency}."
            ),
            Self::InvalidAmount(AmountError::NotPositive(_)) => {
                "Amount must be positive.".to_string()
            }
            Self::InvalidAmount(AmountError::NotANumber(_)) => {
                "Please enter a valid number.".to_string()
            }
            Self::InsufficientAccountFunds => "Insufficient funds in your account.".to_string(),
            Self::InsufficientDispenserFunds { maximum } => format!(
                "ATM doesn't have enough funds. Maximum withdrawable: {maximum} {currency}."
            ),
        }
    }
}

impl From<AmountError> for WithdrawalOutcome {
    fn from(e: AmountError) -> Self {
        Self::InvalidAmount(e)
    }
}

/// Decides a withdrawal of `amount` from `account` through `dispenser`.
///
/// The account balance is checked before the dispenser, so a request that
/// neither can cover reports `InsufficientAccountFunds`. Both balances are
/// decremented together or not at all.
pub fn authorize(
    account: &mut Account,
    amount: Amount,
    dispenser: &mut Dispenser,
) -> WithdrawalOutcome {
    let Some(new_balance) = account.balance.checked_sub(amount) else {
        return WithdrawalOutcome::InsufficientAccountFunds;
    };
    let Some(remaining_cash) = dispenser.available.checked_sub(amount) else {
        return WithdrawalOutcome::InsufficientDispenserFunds {
            maximum: dispenser.available,
        };
    };

    account.balance = new_balance;
    dispenser.available = remaining_cash;
    WithdrawalOutcome::Success {
        amount,
        new_balance,
    }
}

/// Like [`authorize`], for an unvalidated integer request such as a menu
/// preset. A non-positive request is refused without touching either side.
pub fn authorize_requested(
    account: &mut Account,
    requested: i64,
    dispenser: &mut Dispenser,
) -> WithdrawalOutcome {
    match Amount::new(requested) {
        Ok(amount) => authorize(account, amount, dispenser),
        Err(e) => e.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(balance: u64) -> Account {
        Account::new("A1", "1234", Balance::new(balance))
    }

    fn dispenser(cash: u64) -> Dispenser {
        Dispenser::new("ATM-001", Balance::new(cash))
    }

    #[test]
    fn test_successful_withdrawal() {
        let mut account = account(1_000_000);
        let mut dispenser = dispenser(5000);

        let outcome = authorize_requested(&mut account, 100, &mut dispenser);

        assert_eq!(
            outcome,
            WithdrawalOutcome::Success {
                amount: Amount::new(100).unwrap(),
                new_balance: Balance::new(999_900),
            }
        );
        assert_eq!(account.balance, Balance::new(999_900));
        assert_eq!(dispenser.available, Balance::new(4900));
    }

    #[test]
    fn test_dispenser_short_of_cash() {
        let mut account = account(1_000_000);
        let mut dispenser = dispenser(30);

        let outcome = authorize_requested(&mut account, 50, &mut dispenser);

        assert_eq!(
            outcome,
            WithdrawalOutcome::InsufficientDispenserFunds {
                maximum: Balance::new(30)
            }
        );
        assert_eq!(account.balance, Balance::new(1_000_000));
        assert_eq!(dispenser.available, Balance::new(30));
    }

    #[test]
    fn test_account_short_of_funds() {
        let mut account = account(40);
        let mut dispenser = dispenser(5000);

        let outcome = authorize_requested(&mut account, 50, &mut dispenser);

        assert_eq!(outcome, WithdrawalOutcome::InsufficientAccountFunds);
        assert_eq!(account.balance, Balance::new(40));
        assert_eq!(dispenser.available, Balance::new(5000));
    }

    #[test]
    fn test_account_check_precedes_dispenser_check() {
        let mut account = account(10);
        let mut dispenser = dispenser(10);

        let outcome = authorize_requested(&mut account, 50, &mut dispenser);

        assert_eq!(outcome, WithdrawalOutcome::InsufficientAccountFunds);
    }

    #[test]
    fn test_non_positive_amounts_rejected() {
        for requested in [0, -1, -100, i64::MIN] {
            let mut account = account(500);
            let mut dispenser = dispenser(500);

            let outcome = authorize_requested(&mut account, requested, &mut dispenser);

            assert_eq!(
                outcome,
                WithdrawalOutcome::InvalidAmount(AmountError::NotPositive(requested.to_string()))
            );
            assert_eq!(account.balance, Balance::new(500));
            assert_eq!(dispenser.available, Balance::new(500));
        }
    }

    #[test]
    fn test_exact_balances_drain_to_zero() {
        let mut account = account(200);
        let mut dispenser = dispenser(200);

        let outcome = authorize_requested(&mut account, 200, &mut dispenser);

        assert!(outcome.is_success());
        assert_eq!(account.balance, Balance::ZERO);
        assert_eq!(dispenser.available, Balance::ZERO);
    }

    #[test]
    fn test_outcome_grid() {
        // (account balance, dispenser cash, requested)
        let cases = [(100, 100, 1), (100, 100, 100), (99, 100, 100), (100, 99, 100), (1, 1, 2)];
        for (balance, cash, requested) in cases {
            let mut account = account(balance);
            let mut dispenser = dispenser(cash);
            let outcome = authorize_requested(&mut account, requested as i64, &mut dispenser);

            if requested > balance {
                assert_eq!(outcome, WithdrawalOutcome::InsufficientAccountFunds);
                assert_eq!(account.balance.value(), balance);
                assert_eq!(dispenser.available.value(), cash);
            } else if requested > cash {
                assert!(matches!(
                    outcome,
                    WithdrawalOutcome::InsufficientDispenserFunds { .. }
                ));
                assert_eq!(account.balance.value(), balance);
                assert_eq!(dispenser.available.value(), cash);
            } else {
                assert!(outcome.is_success());
                assert_eq!(account.balance.value(), balance - requested);
                assert_eq!(dispenser.available.value(), cash - requested);
            }
        }
    }

    #[test]
    fn test_messages() {
        let success = WithdrawalOutcome::Success {
            amount: Amount::new(100).unwrap(),
            new_balance: Balance::new(999_900),
        };
        assert_eq!(
            success.message("TL"),
            "Success! You have withdrawn 100 TL. New balance: 999900 TL."
        );
        assert_eq!(
            WithdrawalOutcome::InsufficientDispenserFunds {
                maximum: Balance::new(30)
            }
            .message("TL"),
            "ATM doesn't have enough funds. Maximum withdrawable: 30 TL."
        );
        assert_eq!(
            WithdrawalOutcome::InsufficientAccountFunds.message("TL"),
            "Insufficient funds in your account."
        );
        assert_eq!(
            WithdrawalOutcome::InvalidAmount(AmountError::NotPositive("0".into())).message("TL"),
            "Amount must be positive."
        );
        assert_eq!(
            WithdrawalOutcome::InvalidAmount(AmountError::NotANumber("x".into())).message("TL"),
            "Please enter a valid number."
        );
    }
}
