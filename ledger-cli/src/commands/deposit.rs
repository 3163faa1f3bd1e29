//! Deposit command

use anyhow::Result;
use ledger_core::LedgerContext;

use super::{prompt_amount, prompt_client, select_account};
use crate::output;

pub fn run(ctx: &LedgerContext) -> Result<()> {
    let client = prompt_client(ctx)?;
    let Some(number) = select_account(ctx, &client)? else {
        return Ok(());
    };

    let amount = prompt_amount("Deposit amount")?;
    if ctx.transaction_service.deposit(client.tax_id(), number, amount)? {
        output::success(&format!("Deposited {}.", output::format_amount(amount)));
    } else {
        output::warning("Deposit was not accepted.");
    }
    Ok(())
}
