//! CLI command implementations

pub mod account;
pub mod client;
pub mod deposit;
pub mod statement;
pub mod withdraw;

use std::path::PathBuf;

use anyhow::{Context, Result};
use dialoguer::{Input, Select};
use ledger_core::{Client, LedgerContext};
use rust_decimal::Decimal;
use tracing::debug;

use crate::output;

/// Get the ledger directory from the flag/environment or default
pub fn get_ledger_dir(config_dir: Option<PathBuf>) -> PathBuf {
    config_dir.unwrap_or_else(|| {
        dirs::home_dir()
            .map(|home| home.join(".ledger"))
            .unwrap_or_else(|| PathBuf::from(".ledger"))
    })
}

/// Create the ledger context
pub fn get_context(config_dir: Option<PathBuf>) -> Result<LedgerContext> {
    let ledger_dir = get_ledger_dir(config_dir);
    debug!(dir = ?ledger_dir, "loading settings");

    LedgerContext::new(&ledger_dir)
        .with_context(|| format!("Failed to initialize ledger from {:?}", ledger_dir))
}

/// Ask for a client's tax id
pub fn prompt_tax_id() -> Result<String> {
    let tax_id: String = Input::new()
        .with_prompt("Client tax id (numbers only)")
        .interact_text()?;
    Ok(tax_id.trim().to_string())
}

/// Ask for a tax id and resolve the client
pub fn prompt_client(ctx: &LedgerContext) -> Result<Client> {
    let tax_id = prompt_tax_id()?;
    Ok(ctx.client_service.find_client(&tax_id)?)
}

/// Let the user pick one of the client's accounts
///
/// Returns `None` when the client holds no accounts.
pub fn select_account(ctx: &LedgerContext, client: &Client) -> Result<Option<u64>> {
    let accounts = ctx.account_service.client_accounts(client.tax_id())?;
    if accounts.is_empty() {
        output::warning("Client has no accounts.");
        return Ok(None);
    }
    if accounts.len() == 1 {
        return Ok(Some(accounts[0].number));
    }

    let items: Vec<String> = accounts
        .iter()
        .map(|a| format!("Branch: {} Number: {}", a.branch, a.number))
        .collect();
    let index = Select::new()
        .with_prompt("Select account")
        .items(&items)
        .default(0)
        .interact()?;
    Ok(Some(accounts[index].number))
}

/// Ask for a positive amount, re-prompting on malformed or non-positive input
pub fn prompt_amount(prompt: &str) -> Result<Decimal> {
    let amount: Decimal = Input::new()
        .with_prompt(prompt)
        .validate_with(|value: &Decimal| -> Result<(), &'static str> {
            if *value <= Decimal::ZERO {
                Err("Amount must be positive")
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    Ok(amount)
}
