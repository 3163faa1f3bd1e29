//! Transaction service - deposits, withdrawals and statements

use std::sync::Arc;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::adapters::MemoryRepository;
use crate::domain::result::{Error, Result};
use crate::domain::{Account, Transaction, TransactionKind};
use crate::ports::Clock;

/// Transaction service for moving money in and out of accounts
pub struct TransactionService {
    repository: Arc<MemoryRepository>,
    clock: Arc<dyn Clock>,
}

impl TransactionService {
    pub fn new(repository: Arc<MemoryRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// Deposit into one of the client's accounts
    ///
    /// `Ok(false)` means the account rejected the amount (not positive).
    pub fn deposit(&self, tax_id: &str, number: u64, amount: Decimal) -> Result<bool> {
        let now = self.clock.now();

        let accepted = self.repository.write(|registry| {
            let (client, account) = registry.client_account_mut(tax_id, number)?;
            Ok(client.execute_transaction(account, Transaction::deposit(amount, now)))
        })?;

        if accepted {
            info!(number, %amount, "deposit recorded");
        } else {
            debug!(number, %amount, "deposit rejected");
        }
        Ok(accepted)
    }

    /// Withdraw from one of the client's accounts
    ///
    /// Current-account policy is checked first and reported as
    /// `DailyCapExceeded` or `LimitExceeded`. `Ok(false)` means the amount
    /// was not positive or exceeded the balance.
    pub fn withdraw(&self, tax_id: &str, number: u64, amount: Decimal) -> Result<bool> {
        let now = self.clock.now();

        let outcome = self.repository.write(|registry| {
            let (client, account) = registry.client_account_mut(tax_id, number)?;
            account.authorize_withdrawal(amount, now.date())?;
            Ok(client.execute_transaction(account, Transaction::withdrawal(amount, now)))
        });

        match &outcome {
            Ok(true) => info!(number, %amount, "withdrawal recorded"),
            Ok(false) => debug!(number, %amount, "withdrawal rejected: insufficient funds"),
            Err(e) if e.is_policy_limit() => debug!(number, %amount, %e, "withdrawal refused by policy"),
            Err(e) => debug!(number, %amount, %e, "withdrawal rejected"),
        }
        outcome
    }

    /// Withdrawals left today on a client's account, `None` if unrestricted
    ///
    /// Lets the shell refuse before asking for an amount.
    pub fn remaining_withdrawals(&self, tax_id: &str, number: u64) -> Result<Option<u32>> {
        let today = self.clock.today();
        self.repository.read(|registry| {
            let account = owned_account(registry.client_accounts(tax_id)?, tax_id, number)?;
            Ok(account.remaining_withdrawals(today))
        })
    }

    /// Transactions of an account in the order they were recorded
    pub fn list_transactions(&self, number: u64) -> Result<Vec<TransactionLine>> {
        self.repository.read(|registry| {
            let account = registry
                .account(number)
                .ok_or_else(|| Error::not_found(format!("account {}", number)))?;
            Ok(TransactionLine::from_account(account))
        })
    }

    /// History and current balance of one of the client's accounts
    pub fn statement(&self, tax_id: &str, number: u64) -> Result<Statement> {
        self.repository.read(|registry| {
            let account = owned_account(registry.client_accounts(tax_id)?, tax_id, number)?;
            Ok(Statement {
                branch: account.branch().to_string(),
                number: account.number(),
                transactions: TransactionLine::from_account(account),
                balance: account.balance(),
            })
        })
    }
}

fn owned_account<'a>(accounts: Vec<&'a Account>, tax_id: &str, number: u64) -> Result<&'a Account> {
    accounts
        .into_iter()
        .find(|a| a.number() == number)
        .ok_or_else(|| Error::not_found(format!("account {} for client {}", number, tax_id)))
}

/// One line of an account statement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionLine {
    pub id: Uuid,
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub timestamp: NaiveDateTime,
}

impl TransactionLine {
    fn from_account(account: &Account) -> Vec<Self> {
        account
            .history()
            .iter()
            .map(|tx| Self {
                id: tx.id(),
                kind: tx.kind(),
                amount: tx.amount(),
                timestamp: tx.timestamp(),
            })
            .collect()
    }
}

/// Account statement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statement {
    pub branch: String,
    pub number: u64,
    pub transactions: Vec<TransactionLine>,
    pub balance: Decimal,
}
