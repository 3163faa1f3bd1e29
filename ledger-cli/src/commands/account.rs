//! Account commands - open accounts and list them

use anyhow::Result;
use ledger_core::LedgerContext;

use super::prompt_tax_id;
use crate::output;

/// Open a current account for an existing client
pub fn run_new(ctx: &LedgerContext, json: bool) -> Result<()> {
    let tax_id = prompt_tax_id()?;
    let account = ctx.account_service.create_account(&tax_id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&account)?);
        return Ok(());
    }

    output::success("Account created.");
    println!("  Branch: {}", account.branch);
    println!("  Number: {}", account.number);
    if let Some(limits) = account.limits {
        output::info(&format!(
            "  Limits: {} per withdrawal, {} withdrawals per day",
            output::format_amount(limits.per_withdrawal),
            limits.daily_withdrawals
        ));
    }
    Ok(())
}

/// List every account in opening order
pub fn run_list(ctx: &LedgerContext, json: bool) -> Result<()> {
    let accounts = ctx.account_service.list_accounts()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&accounts)?);
        return Ok(());
    }

    if accounts.is_empty() {
        output::warning("No accounts registered.");
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["Branch", "Number", "Holder", "Balance"]);
    for account in &accounts {
        table.add_row(vec![
            account.branch.clone(),
            account.number.to_string(),
            account.owner_name.clone(),
            output::format_amount(account.balance),
        ]);
    }
    println!("{}", table);
    Ok(())
}
