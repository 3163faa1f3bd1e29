//! New client command - register a physical-person client

use anyhow::Result;
use chrono::NaiveDate;
use dialoguer::Input;
use ledger_core::LedgerContext;

use super::prompt_tax_id;
use crate::output;

/// Birth dates are typed as day-month-year
const DATE_FORMAT: &str = "%d-%m-%Y";

pub fn run(ctx: &LedgerContext) -> Result<()> {
    let tax_id = prompt_tax_id()?;
    // Stop before asking for the rest if the identity is taken
    ctx.client_service.ensure_available(&tax_id)?;

    let name: String = Input::new()
        .with_prompt("Full name")
        .interact_text()?;

    let birth_date = prompt_birth_date()?;

    let address: String = Input::new()
        .with_prompt("Address (street, number - district - city/state)")
        .allow_empty(true)
        .interact_text()?;

    let client = ctx
        .client_service
        .create_client(&tax_id, &name, birth_date, &address)?;

    output::success(&format!("Client {} created.", client.name()));
    Ok(())
}

fn prompt_birth_date() -> Result<NaiveDate> {
    let raw: String = Input::new()
        .with_prompt("Birth date (dd-mm-yyyy)")
        .validate_with(|value: &String| -> Result<(), &'static str> {
            parse_date(value).map(|_| ()).ok_or("Invalid date, use dd-mm-yyyy")
        })
        .interact_text()?;

    parse_date(&raw).ok_or_else(|| anyhow::anyhow!("Invalid birth date"))
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("01-01-1990"), NaiveDate::from_ymd_opt(1990, 1, 1));
        assert_eq!(parse_date(" 31-12-1970 "), NaiveDate::from_ymd_opt(1970, 12, 31));
        assert_eq!(parse_date("1990-01-01"), None);
        assert_eq!(parse_date("31-02-2000"), None);
    }
}
