use assert_cmd::Command;
use assert_cmd::cargo_bin;
use serde_json::{Map, Value, json};
use std::io::Error;
use std::path::Path;

/// The ATM binary pointed at the ledger file `ledger`.
pub fn atm(ledger: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin!("atmsim"));
    cmd.arg("--accounts-file").arg(ledger);
    cmd
}

pub fn write_ledger(path: &Path, accounts: &[(&str, &str, u64)]) -> Result<(), Error> {
    let mut ledger = Map::new();
    for (number, pin, balance) in accounts {
        ledger.insert(
            number.to_string(),
            json!({"accountNumber": number, "pin": pin, "balance": balance}),
        );
    }
    std::fs::write(path, serde_json::to_vec_pretty(&Value::Object(ledger))?)
}

pub fn read_ledger(path: &Path) -> Value {
    let content = std::fs::read_to_string(path).expect("Failed to read ledger");
    serde_json::from_str(&content).expect("Ledger is not valid JSON")
}
