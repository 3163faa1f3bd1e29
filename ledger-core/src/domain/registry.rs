//! Registry - the in-process store of clients and accounts

use super::result::{Error, Result};
use super::{Account, Client, WithdrawalLimits};

/// Client list, account list and the account-number counter
///
/// Collections are small and scanned linearly. Nothing is ever removed.
#[derive(Debug, Clone)]
pub struct Registry {
    clients: Vec<Client>,
    accounts: Vec<Account>,
    next_account_number: u64,
}

impl Default for Registry {
    fn default() -> Self {
        Self {
            clients: Vec::new(),
            accounts: Vec::new(),
            next_account_number: 1,
        }
    }
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// First client whose tax id matches
    pub fn find_client(&self, tax_id: &str) -> Option<&Client> {
        self.clients.iter().find(|c| c.tax_id() == tax_id)
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    /// Register a new client, rejecting duplicate identities
    pub fn register_client(&mut self, client: Client) -> Result<&Client> {
        if self.find_client(client.tax_id()).is_some() {
            return Err(Error::DuplicateIdentity(client.tax_id().to_string()));
        }
        self.clients.push(client);
        Ok(&self.clients[self.clients.len() - 1])
    }

    /// Number the next successfully opened account will get
    pub fn next_account_number(&self) -> u64 {
        self.next_account_number
    }

    /// Open an account for an existing client
    ///
    /// The counter is only consumed once the client is known to exist.
    pub fn open_account(
        &mut self,
        tax_id: &str,
        branch: &str,
        limits: Option<WithdrawalLimits>,
    ) -> Result<&Account> {
        let client = self
            .clients
            .iter_mut()
            .find(|c| c.tax_id() == tax_id)
            .ok_or_else(|| Error::not_found(format!("client {}", tax_id)))?;

        let number = self.next_account_number;
        self.next_account_number += 1;

        let account = match limits {
            Some(limits) => Account::current(tax_id, number, limits),
            None => Account::new(tax_id, number),
        }
        .with_branch(branch);

        client.add_account(number);
        self.accounts.push(account);
        Ok(&self.accounts[self.accounts.len() - 1])
    }

    pub fn account(&self, number: u64) -> Option<&Account> {
        self.accounts.iter().find(|a| a.number() == number)
    }

    /// All accounts in opening order
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Accounts held by a client, in the order the client holds them
    pub fn client_accounts(&self, tax_id: &str) -> Result<Vec<&Account>> {
        let client = self
            .find_client(tax_id)
            .ok_or_else(|| Error::not_found(format!("client {}", tax_id)))?;

        Ok(client
            .accounts()
            .iter()
            .filter_map(|number| self.account(*number))
            .collect())
    }

    /// Resolve a client together with one of its accounts for mutation
    pub fn client_account_mut(&mut self, tax_id: &str, number: u64) -> Result<(&Client, &mut Account)> {
        let client = self
            .clients
            .iter()
            .find(|c| c.tax_id() == tax_id)
            .ok_or_else(|| Error::not_found(format!("client {}", tax_id)))?;

        if !client.owns(number) {
            return Err(Error::not_found(format!(
                "account {} for client {}",
                number, tax_id
            )));
        }

        let account = self
            .accounts
            .iter_mut()
            .find(|a| a.number() == number)
            .ok_or_else(|| Error::not_found(format!("account {}", number)))?;

        Ok((client, account))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn client(tax_id: &str, name: &str) -> Client {
        let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let dob = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
        Client::physical_person(tax_id, name, dob, "Somewhere", today).unwrap()
    }

    #[test]
    fn test_duplicate_identity_rejected() {
        let mut registry = Registry::new();
        registry.register_client(client("111", "Ana")).unwrap();

        let err = registry.register_client(client("111", "Bruno")).unwrap_err();
        assert!(matches!(err, Error::DuplicateIdentity(ref key) if key == "111"));

        assert_eq!(registry.clients().len(), 1);
        assert_eq!(registry.find_client("111").unwrap().name(), "Ana");
    }

    #[test]
    fn test_account_numbers_increment_from_one() {
        let mut registry = Registry::new();
        registry.register_client(client("111", "Ana")).unwrap();
        registry.register_client(client("222", "Bruno")).unwrap();

        assert_eq!(registry.open_account("111", "0001", None).unwrap().number(), 1);
        assert_eq!(registry.open_account("222", "0001", None).unwrap().number(), 2);
        assert_eq!(registry.open_account("111", "0001", None).unwrap().number(), 3);

        assert_eq!(registry.find_client("111").unwrap().accounts(), &[1, 3]);
        let numbers: Vec<u64> = registry.accounts().iter().map(|a| a.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_unknown_client_does_not_consume_number() {
        let mut registry = Registry::new();
        registry.register_client(client("111", "Ana")).unwrap();

        assert!(matches!(
            registry.open_account("999", "0001", None),
            Err(Error::NotFound(_))
        ));
        assert_eq!(registry.next_account_number(), 1);
        assert!(registry.accounts().is_empty());

        assert_eq!(registry.open_account("111", "0001", None).unwrap().number(), 1);
    }

    #[test]
    fn test_open_account_applies_branch_and_limits() {
        let mut registry = Registry::new();
        registry.register_client(client("111", "Ana")).unwrap();

        let account = registry
            .open_account("111", "0420", Some(WithdrawalLimits::default()))
            .unwrap();
        assert_eq!(account.branch(), "0420");
        assert_eq!(account.owner(), "111");
        assert_eq!(account.limits(), Some(&WithdrawalLimits::default()));
    }

    #[test]
    fn test_client_account_mut_requires_ownership() {
        let mut registry = Registry::new();
        registry.register_client(client("111", "Ana")).unwrap();
        registry.register_client(client("222", "Bruno")).unwrap();
        registry.open_account("111", "0001", None).unwrap();

        assert!(registry.client_account_mut("111", 1).is_ok());
        assert!(matches!(registry.client_account_mut("222", 1), Err(Error::NotFound(_))));
        assert!(matches!(registry.client_account_mut("333", 1), Err(Error::NotFound(_))));
        assert!(matches!(registry.client_account_mut("111", 2), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_client_accounts() {
        let mut registry = Registry::new();
        registry.register_client(client("111", "Ana")).unwrap();
        assert!(registry.client_accounts("111").unwrap().is_empty());

        registry.open_account("111", "0001", None).unwrap();
        assert_eq!(registry.client_accounts("111").unwrap().len(), 1);
        assert!(registry.client_accounts("999").is_err());
    }
}
