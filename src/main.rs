use atmsim::application::session::AtmSession;
use atmsim::config::{
    AtmConfig, DEFAULT_ACCOUNTS_FILE, DEFAULT_ATM_ID, DEFAULT_BANK_NAME, DEFAULT_CURRENCY,
    DEFAULT_DISPENSER_CASH, DEFAULT_PRESET_AMOUNTS, DEFAULT_STARTING_BALANCE,
};
use atmsim::domain::account::Balance;
use atmsim::domain::ports::AccountStoreBox;
use atmsim::infrastructure::in_memory::InMemoryAccountStore;
use atmsim::infrastructure::json_file::JsonFileStore;
use atmsim::interfaces::console;
use atmsim::interfaces::console::terminal::{DialoguerTerminal, LineTerminal, Terminal};
use clap::Parser;
use miette::{IntoDiagnostic, Result, WrapErr};
use std::io::{self, IsTerminal};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Account ledger (JSON). Created on first save if missing.
    #[arg(long, default_value = DEFAULT_ACCOUNTS_FILE)]
    accounts_file: PathBuf,

    /// Keep the ledger in memory only; nothing is read from or written to disk.
    #[arg(long, conflicts_with = "accounts_file")]
    in_memory: bool,

    /// Identifier of this ATM.
    #[arg(long, default_value = DEFAULT_ATM_ID)]
    atm_id: String,

    /// Cash loaded in the dispenser at startup.
    #[arg(long, default_value_t = DEFAULT_DISPENSER_CASH)]
    dispenser_cash: u64,

    /// Balance given to newly opened accounts.
    #[arg(long, default_value_t = DEFAULT_STARTING_BALANCE)]
    default_balance: u64,

    /// Bank name shown on the welcome screen and receipts.
    #[arg(long, default_value = DEFAULT_BANK_NAME)]
    bank_name: String,

    /// Currency label printed after amounts.
    #[arg(long, default_value = DEFAULT_CURRENCY)]
    currency: String,

    /// Quick-pick withdrawal amounts, comma separated.
    #[arg(
        long = "preset",
        value_delimiter = ',',
        default_values_t = DEFAULT_PRESET_AMOUNTS,
        value_parser = clap::value_parser!(i64).range(1..)
    )]
    presets: Vec<i64>,
}

impl From<Cli> for AtmConfig {
    fn from(cli: Cli) -> Self {
        Self {
            accounts_file: (!cli.in_memory).then_some(cli.accounts_file),
            atm_id: cli.atm_id,
            dispenser_cash: Balance::new(cli.dispenser_cash),
            starting_balance: Balance::new(cli.default_balance),
            bank_name: cli.bank_name,
            currency: cli.currency,
            preset_amounts: cli.presets,
        }
    }
}

fn main() -> Result<()> {
    let config = AtmConfig::from(Cli::parse());

    let store: AccountStoreBox = if let Some(path) = &config.accounts_file {
        if !path.exists() {
            eprintln!(
                "WARNING: No account ledger at {}. Starting with an empty ledger.",
                path.display()
            );
        }
        Box::new(JsonFileStore::new(path))
    } else {
        eprintln!("WARNING: Running with an in-memory ledger. Accounts will not be saved.");
        Box::new(InMemoryAccountStore::new())
    };

    let mut session = AtmSession::open(store, &config)
        .into_diagnostic()
        .wrap_err("Failed to load the account ledger")?;

    let mut terminal: Box<dyn Terminal> = if io::stdin().is_terminal() {
        Box::new(DialoguerTerminal::new())
    } else {
        Box::new(LineTerminal::new(io::stdin().lock(), io::stdout()))
    };

    console::run(&mut session, terminal.as_mut(), &config).into_diagnostic()?;

    Ok(())
}
