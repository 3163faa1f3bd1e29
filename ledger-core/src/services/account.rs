//! Account service - account opening and listings

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info};

use crate::adapters::MemoryRepository;
use crate::config::Config;
use crate::domain::result::{Error, Result};
use crate::domain::{Account, Registry, WithdrawalLimits};

/// Account service for opening accounts and listing them
pub struct AccountService {
    repository: Arc<MemoryRepository>,
    config: Config,
}

impl AccountService {
    pub fn new(repository: Arc<MemoryRepository>, config: Config) -> Self {
        Self { repository, config }
    }

    /// Open a current account for an existing client
    ///
    /// Uses the configured branch and withdrawal limits. An unknown client
    /// does not consume an account number.
    pub fn create_account(&self, tax_id: &str) -> Result<AccountSummary> {
        let limits = self.config.withdrawal_limits;
        let branch = self.config.branch_code.as_str();

        let created = self.repository.write(|registry| {
            let number = registry.open_account(tax_id, branch, Some(limits))?.number();
            AccountSummary::lookup(registry, number)
        });

        match &created {
            Ok(summary) => info!(tax_id, number = summary.number, branch = %summary.branch, "account opened"),
            Err(e) => debug!(tax_id, %e, "account not opened"),
        }
        created
    }

    /// Accounts held by a client, for account selection
    pub fn client_accounts(&self, tax_id: &str) -> Result<Vec<AccountSummary>> {
        self.repository.read(|registry| {
            let accounts = registry.client_accounts(tax_id)?;
            Ok(accounts
                .into_iter()
                .map(|account| AccountSummary::from_account(registry, account))
                .collect())
        })
    }

    /// Every account in opening order
    pub fn list_accounts(&self) -> Result<Vec<AccountSummary>> {
        self.repository.read(|registry| {
            Ok(registry
                .accounts()
                .iter()
                .map(|account| AccountSummary::from_account(registry, account))
                .collect())
        })
    }
}

/// Listing view of an account
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountSummary {
    pub branch: String,
    pub number: u64,
    pub owner_tax_id: String,
    pub owner_name: String,
    pub balance: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limits: Option<WithdrawalLimits>,
}

impl AccountSummary {
    fn from_account(registry: &Registry, account: &Account) -> Self {
        let owner_name = registry
            .find_client(account.owner())
            .map(|c| c.name().to_string())
            .unwrap_or_default();

        Self {
            branch: account.branch().to_string(),
            number: account.number(),
            owner_tax_id: account.owner().to_string(),
            owner_name,
            balance: account.balance(),
            limits: account.limits().copied(),
        }
    }

    fn lookup(registry: &Registry, number: u64) -> Result<Self> {
        registry
            .account(number)
            .map(|account| Self::from_account(registry, account))
            .ok_or_else(|| Error::not_found(format!("account {}", number)))
    }
}
