//! Per-account transaction history

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Transaction;

/// Append-only, insertion-ordered log of an account's transactions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    transactions: Vec<Transaction>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Count withdrawals whose timestamp falls on the given calendar date
    pub fn withdrawals_on(&self, date: NaiveDate) -> usize {
        self.transactions
            .iter()
            .filter(|tx| tx.is_withdrawal() && tx.timestamp().date() == date)
            .count()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.transactions.iter()
    }
}
