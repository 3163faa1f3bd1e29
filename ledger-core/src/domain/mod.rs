//! Core domain entities
//!
//! All business entities are defined here. These are pure data structures
//! with validation logic - no I/O, no clock, no locking.

mod account;
mod client;
mod history;
mod registry;
pub mod result;
mod transaction;

pub use account::{Account, WithdrawalLimits, DEFAULT_BRANCH};
pub use client::{Client, PhysicalPerson};
pub use history::History;
pub use registry::Registry;
pub use transaction::{Transaction, TransactionKind};
