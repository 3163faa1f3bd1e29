//! Statement command - account history and balance

use anyhow::Result;
use ledger_core::LedgerContext;

use super::{prompt_client, select_account};
use crate::output;

pub fn run(ctx: &LedgerContext, json: bool) -> Result<()> {
    let client = prompt_client(ctx)?;
    let Some(number) = select_account(ctx, &client)? else {
        return Ok(());
    };

    let statement = ctx.transaction_service.statement(client.tax_id(), number)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&statement)?);
        return Ok(());
    }

    output::info(&format!(
        "Statement - branch {} account {}",
        statement.branch, statement.number
    ));

    if statement.transactions.is_empty() {
        println!("No transactions recorded.");
    } else {
        let mut table = output::create_table();
        table.set_header(vec!["Date", "Type", "Amount"]);
        for line in &statement.transactions {
            table.add_row(vec![
                line.timestamp.format("%d-%m-%Y %H:%M").to_string(),
                line.kind.to_string(),
                output::format_amount(line.amount),
            ]);
        }
        println!("{}", table);
    }

    println!();
    println!("Balance: {}", output::format_amount(statement.balance));
    Ok(())
}
