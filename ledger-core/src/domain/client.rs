//! Client domain model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::result::{Error, Result};
use super::{Account, Transaction};

/// Identity attributes of a natural person
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhysicalPerson {
    pub name: String,
    pub birth_date: NaiveDate,
}

/// A bank client
///
/// Clients are looked up by `tax_id`. Accounts are owned by the registry;
/// the client keeps the numbers of the accounts it holds, in opening order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    tax_id: String,
    address: String,
    person: PhysicalPerson,
    accounts: Vec<u64>,
}

impl Client {
    /// Create a physical-person client, validating its identity
    ///
    /// `today` bounds the birth date.
    pub fn physical_person(
        tax_id: impl Into<String>,
        name: impl Into<String>,
        birth_date: NaiveDate,
        address: impl Into<String>,
        today: NaiveDate,
    ) -> Result<Self> {
        let tax_id = tax_id.into().trim().to_string();
        let name = name.into().trim().to_string();

        Self::validate_tax_id(&tax_id)?;
        if name.is_empty() {
            return Err(Error::validation("name cannot be empty"));
        }
        if birth_date > today {
            return Err(Error::validation(format!(
                "birth date {} is in the future",
                birth_date
            )));
        }

        Ok(Self {
            tax_id,
            address: address.into().trim().to_string(),
            person: PhysicalPerson { name, birth_date },
            accounts: Vec::new(),
        })
    }

    /// Tax ids are non-empty and made of digits only
    pub fn validate_tax_id(tax_id: &str) -> Result<()> {
        if tax_id.is_empty() {
            return Err(Error::validation("tax id cannot be empty"));
        }
        if !tax_id.chars().all(|c| c.is_ascii_digit()) {
            return Err(Error::validation("tax id must contain digits only"));
        }
        Ok(())
    }

    pub fn tax_id(&self) -> &str {
        &self.tax_id
    }

    pub fn name(&self) -> &str {
        &self.person.name
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.person.birth_date
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Numbers of the accounts held by this client, in opening order
    pub fn accounts(&self) -> &[u64] {
        &self.accounts
    }

    pub fn owns(&self, number: u64) -> bool {
        self.accounts.contains(&number)
    }

    pub fn add_account(&mut self, number: u64) {
        self.accounts.push(number);
    }

    /// Apply a transaction and record it in the account history if accepted
    ///
    /// Policy checks must already have passed; a rejected transaction leaves
    /// both balance and history untouched.
    pub fn execute_transaction(&self, account: &mut Account, transaction: Transaction) -> bool {
        if !transaction.apply(account) {
            return false;
        }
        account.record(transaction);
        true
    }
}
