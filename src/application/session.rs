use super::authorizer::{WithdrawalOutcome, authorize, authorize_requested};
use crate::config::AtmConfig;
use crate::domain::account::{Account, Accounts, Amount, Balance};
use crate::domain::dispenser::Dispenser;
use crate::domain::ports::AccountStoreBox;
use crate::domain::receipt::Receipt;
use crate::error::{AtmError, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// How a login attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Known account, matching PIN.
    Authenticated,
    /// Unknown account number; a new account was opened with the entered PIN.
    Provisioned,
    /// Known account, wrong PIN. Nothing changed.
    IncorrectPin,
}

/// A withdrawal outcome together with the receipt issued for it.
///
/// `receipt` is present exactly when the outcome is a success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithdrawalReport {
    pub outcome: WithdrawalOutcome,
    pub receipt: Option<Receipt>,
}

/// State of one running ATM.
///
/// `AtmSession` owns the in-memory ledger, the dispenser and the store the
/// ledger is written back to. Every mutation goes through it, and every
/// mutation that succeeds is followed by a full `save`.
pub struct AtmSession {
    store: AccountStoreBox,
    accounts: Accounts,
    dispenser: Dispenser,
    starting_balance: Balance,
    current: Option<String>,
    rng: StdRng,
}

impl AtmSession {
    /// Loads the ledger from `store` and loads the dispenser as configured.
    ///
    /// Fails if the stored snapshot cannot be read back.
    pub fn open(store: AccountStoreBox, config: &AtmConfig) -> Result<Self> {
        Self::with_rng(store, config, StdRng::from_entropy())
    }

    /// Same as [`AtmSession::open`] with a caller-supplied random source for
    /// receipt identifiers.
    pub fn with_rng(store: AccountStoreBox, config: &AtmConfig, rng: StdRng) -> Result<Self> {
        let accounts = store.load()?;
        Ok(Self {
            store,
            accounts,
            dispenser: Dispenser::new(config.atm_id.clone(), config.dispenser_cash),
            starting_balance: config.starting_balance,
            current: None,
            rng,
        })
    }

    /// Checks `pin` against the account `account_number`, opening the account
    /// first if it does not exist yet.
    ///
    /// On `Authenticated` and `Provisioned` the account becomes the current
    /// one. A wrong PIN leaves the session as it was.
    pub fn login(&mut self, account_number: &str, pin: &str) -> Result<LoginOutcome> {
        match self.accounts.get(account_number) {
            Some(account) if account.verify_pin(pin) => {
                self.current = Some(account_number.to_string());
                Ok(LoginOutcome::Authenticated)
            }
            Some(_) => Ok(LoginOutcome::IncorrectPin),
            None => {
                self.provision(account_number, pin)?;
                self.current = Some(account_number.to_string());
                Ok(LoginOutcome::Provisioned)
            }
        }
    }

    /// Opens a new account with the configured starting balance and saves the
    /// ledger.
    ///
    /// An existing account is never replaced: provisioning an account number
    /// that is already in the ledger fails with `AccountAlreadyExists`.
    pub fn provision(&mut self, account_number: &str, pin: &str) -> Result<Account> {
        if self.accounts.contains_key(account_number) {
            return Err(AtmError::AccountAlreadyExists(account_number.to_string()));
        }

        let account = Account::new(account_number, pin, self.starting_balance);
        self.accounts
            .insert(account_number.to_string(), account.clone());
        self.store.save(&self.accounts)?;
        Ok(account)
    }

    /// Withdraws a preset amount from the current account.
    pub fn withdraw(&mut self, requested: i64) -> Result<WithdrawalReport> {
        self.settle(|account, dispenser| authorize_requested(account, requested, dispenser))
    }

    /// Withdraws an amount typed in by the customer.
    pub fn withdraw_input(&mut self, input: &str) -> Result<WithdrawalReport> {
        match input.parse::<Amount>() {
            Ok(amount) => self.withdraw_amount(amount),
            Err(e) => self.settle(|_, _| e.into()),
        }
    }

    pub fn withdraw_amount(&mut self, amount: Amount) -> Result<WithdrawalReport> {
        self.settle(|account, dispenser| authorize(account, amount, dispenser))
    }

    /// Applies `decide` to the current account and the dispenser. A success
    /// issues a receipt and saves the ledger; any other outcome leaves
    /// everything untouched.
    fn settle(
        &mut self,
        decide: impl FnOnce(&mut Account, &mut Dispenser) -> WithdrawalOutcome,
    ) -> Result<WithdrawalReport> {
        let account_number = self.current.as_deref().ok_or(AtmError::NotLoggedIn)?;
        let account = self
            .accounts
            .get_mut(account_number)
            .ok_or(AtmError::NotLoggedIn)?;

        let outcome = decide(account, &mut self.dispenser);
        let receipt = match &outcome {
            WithdrawalOutcome::Success {
                amount,
                new_balance,
            } => Some(Receipt::issue(
                &mut self.rng,
                account_number,
                *amount,
                *new_balance,
            )),
            _ => None,
        };

        if receipt.is_some() {
            self.store.save(&self.accounts)?;
        }

        Ok(WithdrawalReport { outcome, receipt })
    }

    /// Ends the current customer's session. The ledger and dispenser carry
    /// over to the next login.
    pub fn logout(&mut self) {
        self.current = None;
    }

    pub fn current_account(&self) -> Option<&Account> {
        self.current
            .as_deref()
            .and_then(|number| self.accounts.get(number))
    }

    pub fn dispenser(&self) -> &Dispenser {
        &self.dispenser
    }

    pub fn accounts(&self) -> &Accounts {
        &self.accounts
    }
}
