//! Account domain model

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::result::{Error, Result};
use super::{History, Transaction};

/// Branch code given to accounts unless configured otherwise
pub const DEFAULT_BRANCH: &str = "0001";

/// Withdrawal restrictions carried by current accounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawalLimits {
    /// Maximum amount of a single withdrawal
    pub per_withdrawal: Decimal,
    /// Maximum number of withdrawals per calendar day
    pub daily_withdrawals: u32,
}

impl WithdrawalLimits {
    pub fn new(per_withdrawal: Decimal, daily_withdrawals: u32) -> Self {
        Self {
            per_withdrawal,
            daily_withdrawals,
        }
    }
}

impl Default for WithdrawalLimits {
    fn default() -> Self {
        Self::new(Decimal::new(500, 0), 3)
    }
}

/// A bank account
///
/// An account with `limits` set is a current account: withdrawals must pass
/// [`Account::authorize_withdrawal`] before being applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    number: u64,
    branch: String,
    /// Identity key of the owning client
    owner: String,
    balance: Decimal,
    limits: Option<WithdrawalLimits>,
    history: History,
}

impl Account {
    /// Create an unrestricted account with zero balance
    pub fn new(owner: impl Into<String>, number: u64) -> Self {
        Self {
            number,
            branch: DEFAULT_BRANCH.to_string(),
            owner: owner.into(),
            balance: Decimal::ZERO,
            limits: None,
            history: History::new(),
        }
    }

    /// Create a current account with withdrawal limits
    pub fn current(owner: impl Into<String>, number: u64, limits: WithdrawalLimits) -> Self {
        let mut account = Self::new(owner, number);
        account.limits = Some(limits);
        account
    }

    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = branch.into();
        self
    }

    pub fn number(&self) -> u64 {
        self.number
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn limits(&self) -> Option<&WithdrawalLimits> {
        self.limits.as_ref()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Add funds. Rejects non-positive amounts and balance overflow without
    /// touching the balance.
    pub fn deposit(&mut self, amount: Decimal) -> bool {
        if amount <= Decimal::ZERO {
            return false;
        }
        match self.balance.checked_add(amount) {
            Some(balance) => {
                self.balance = balance;
                true
            }
            None => false,
        }
    }

    /// Remove funds. Requires `0 < amount <= balance`.
    pub fn withdraw(&mut self, amount: Decimal) -> bool {
        if amount <= Decimal::ZERO || amount > self.balance {
            return false;
        }
        match self.balance.checked_sub(amount) {
            Some(balance) => {
                self.balance = balance;
                true
            }
            None => false,
        }
    }

    /// Check the current-account policy for a withdrawal made on `today`
    ///
    /// The daily count is checked before the amount ceiling. Unrestricted
    /// accounts always pass.
    pub fn authorize_withdrawal(&self, amount: Decimal, today: NaiveDate) -> Result<()> {
        let Some(limits) = &self.limits else {
            return Ok(());
        };

        if self.history.withdrawals_on(today) >= limits.daily_withdrawals as usize {
            return Err(Error::DailyCapExceeded {
                limit: limits.daily_withdrawals,
            });
        }

        if amount > limits.per_withdrawal {
            return Err(Error::LimitExceeded {
                amount,
                limit: limits.per_withdrawal,
            });
        }

        Ok(())
    }

    /// Withdrawals still allowed on `today`, or `None` when unrestricted
    pub fn remaining_withdrawals(&self, today: NaiveDate) -> Option<u32> {
        self.limits.as_ref().map(|limits| {
            let used = u32::try_from(self.history.withdrawals_on(today)).unwrap_or(u32::MAX);
            limits.daily_withdrawals.saturating_sub(used)
        })
    }

    pub(crate) fn record(&mut self, transaction: Transaction) {
        self.history.push(transaction);
    }
}
