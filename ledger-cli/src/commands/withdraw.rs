//! Withdraw command

use anyhow::Result;
use ledger_core::{Error, LedgerContext};

use super::{prompt_amount, prompt_client, select_account};
use crate::output;

pub fn run(ctx: &LedgerContext) -> Result<()> {
    let client = prompt_client(ctx)?;
    let Some(number) = select_account(ctx, &client)? else {
        return Ok(());
    };

    // Refuse before asking for an amount when today's withdrawals are used up
    if ctx.transaction_service.remaining_withdrawals(client.tax_id(), number)? == Some(0) {
        output::warning("Daily withdrawal limit reached.");
        return Ok(());
    }

    loop {
        let amount = prompt_amount("Withdrawal amount")?;
        match ctx.transaction_service.withdraw(client.tax_id(), number, amount) {
            Ok(true) => {
                output::success(&format!("Withdrew {}.", output::format_amount(amount)));
                return Ok(());
            }
            Ok(false) => {
                output::warning("Insufficient funds.");
                return Ok(());
            }
            // Over the per-withdrawal ceiling: ask again
            Err(e @ Error::LimitExceeded { .. }) => output::warning(&e.to_string()),
            Err(e) => return Err(e.into()),
        }
    }
}
