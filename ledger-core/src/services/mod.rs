//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic with the repository and clock. Each
//! service covers one feature area.

mod account;
mod client;
mod transaction;

pub use account::{AccountService, AccountSummary};
pub use client::ClientService;
pub use transaction::{Statement, TransactionLine, TransactionService};
