//! Terminal front-end for the ATM.
//!
//! Walks the customer through the same screens the desktop version had:
//! welcome, login, the amount menu, the result of each withdrawal and the
//! receipt that follows a successful one.

pub mod terminal;

use crate::application::authorizer::WithdrawalOutcome;
use crate::application::session::{AtmSession, LoginOutcome};
use crate::config::AtmConfig;
use crate::error::{AmountError, Result};
use terminal::Terminal;

/// Runs one customer visit: login, then withdrawals until the customer is
/// done or input runs out.
pub fn run<T: Terminal + ?Sized>(
    session: &mut AtmSession,
    terminal: &mut T,
    config: &AtmConfig,
) -> Result<()> {
    terminal.show(
        "Welcome",
        &format!(
            "WELCOME TO {} [{}]",
            config.bank_name,
            session.dispenser().atm_id
        ),
    )?;

    if login_screen(session, terminal)? {
        withdrawal_screen(session, terminal, config)?;
    }
    session.logout();
    Ok(())
}

/// Returns `false` if the customer left before logging in.
fn login_screen<T: Terminal + ?Sized>(session: &mut AtmSession, terminal: &mut T) -> Result<bool> {
    loop {
        let Some(account_number) = terminal.input("Enter Account Number")? else {
            return Ok(false);
        };
        // Stray whitespace around a typed account number is never part of it.
        let account_number = account_number.trim();
        if account_number.is_empty() {
            terminal.show("Login Failed", "Please enter an account number.")?;
            continue;
        }
        let Some(pin) = terminal.secret("Enter PIN")? else {
            return Ok(false);
        };

        match session.login(account_number, &pin)? {
            LoginOutcome::Authenticated => {
                terminal.show("Login Successful", "PIN verified successfully.")?;
                return Ok(true);
            }
            LoginOutcome::Provisioned => {
                terminal.show(
                    "Account Not Found",
                    "Account number not found. You can set a new PIN.",
                )?;
                terminal.show(
                    "Account Created",
                    "Account created successfully with a new PIN.",
                )?;
                return Ok(true);
            }
            LoginOutcome::IncorrectPin => {
                terminal.show("Login Failed", "Incorrect PIN. Please try again.")?;
            }
        }
    }
}

fn withdrawal_screen<T: Terminal + ?Sized>(
    session: &mut AtmSession,
    terminal: &mut T,
    config: &AtmConfig,
) -> Result<()> {
    let mut items: Vec<String> = config
        .preset_amounts
        .iter()
        .map(|amount| format!("{amount} {}", config.currency))
        .collect();
    items.push("Custom Amount".to_string());

    loop {
        let Some(choice) = terminal.select("Select amount to withdraw", &items)? else {
            return Ok(());
        };

        let report = match config.preset_amounts.get(choice) {
            Some(&preset) => session.withdraw(preset)?,
            None => {
                let Some(input) = terminal.input("Enter the amount to withdraw")? else {
                    return Ok(());
                };
                session.withdraw_input(&input)?
            }
        };

        let title = match &report.outcome {
            WithdrawalOutcome::InvalidAmount(AmountError::NotPositive(_)) => "Invalid Amount",
            WithdrawalOutcome::InvalidAmount(AmountError::NotANumber(_)) => "Invalid Input",
            _ => "Transaction Result",
        };
        terminal.show(title, &report.outcome.message(&config.currency))?;

        if let Some(receipt) = report.receipt {
            terminal.show(
                "Receipt",
                &receipt.render(&config.bank_name, &config.currency),
            )?;
            let another =
                terminal.confirm("Would you like to perform another transaction?")?;
            if another != Some(true) {
                return Ok(());
            }
        }
    }
}
