//! Transaction domain model

use std::fmt;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Account;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl TransactionKind {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "Deposit",
            TransactionKind::Withdrawal => "Withdrawal",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A deposit or withdrawal request against an account
///
/// Transactions are immutable once created. The amount is not validated at
/// construction; the account decides whether to accept it when the
/// transaction is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    id: Uuid,
    kind: TransactionKind,
    amount: Decimal,
    /// When the transaction was created (naive datetime, local time)
    timestamp: NaiveDateTime,
}

impl Transaction {
    pub fn new(kind: TransactionKind, amount: Decimal, timestamp: NaiveDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            amount,
            timestamp,
        }
    }

    /// Create a deposit
    pub fn deposit(amount: Decimal, timestamp: NaiveDateTime) -> Self {
        Self::new(TransactionKind::Deposit, amount, timestamp)
    }

    /// Create a withdrawal
    pub fn withdrawal(amount: Decimal, timestamp: NaiveDateTime) -> Self {
        Self::new(TransactionKind::Withdrawal, amount, timestamp)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn is_withdrawal(&self) -> bool {
        self.kind == TransactionKind::Withdrawal
    }

    /// Apply this transaction to an account
    ///
    /// Returns whether the account accepted the change. Recording the
    /// transaction in the account history is the caller's job.
    pub fn apply(&self, account: &mut Account) -> bool {
        match self.kind {
            TransactionKind::Deposit => account.deposit(self.amount),
            TransactionKind::Withdrawal => account.withdraw(self.amount),
        }
    }
}
