//! Ledger Core - business logic for the in-memory bank ledger
//!
//! This crate follows hexagonal architecture:
//!
//! - **domain**: Core business entities (Client, Account, Transaction, Registry)
//! - **ports**: Trait definitions for external dependencies (Clock)
//! - **services**: Business logic orchestration
//! - **adapters**: Concrete implementations (in-memory repository)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use adapters::MemoryRepository;
use config::Config;
use ports::{Clock, SystemClock};
use services::*;

// Re-export commonly used types at crate root
pub use domain::result::Error;
pub use domain::{Account, Client, Transaction, TransactionKind, WithdrawalLimits};
pub use services::{AccountSummary, Statement, TransactionLine};

/// Main context for ledger operations
///
/// This is the primary entry point for all business logic. It holds the
/// in-memory store, configuration, clock and all services. Contexts are
/// independent: each one starts with an empty registry and account number 1.
pub struct LedgerContext {
    pub config: Config,
    pub repository: Arc<MemoryRepository>,
    pub clock: Arc<dyn Clock>,
    pub client_service: ClientService,
    pub account_service: AccountService,
    pub transaction_service: TransactionService,
}

impl LedgerContext {
    /// Create a context from the settings in `ledger_dir`, using the system clock
    pub fn new(ledger_dir: &Path) -> Result<Self> {
        let config = Config::load(ledger_dir)?;
        Ok(Self::with_clock(config, Arc::new(SystemClock)))
    }

    /// Create a context with explicit configuration and clock
    pub fn with_clock(config: Config, clock: Arc<dyn Clock>) -> Self {
        let repository = Arc::new(MemoryRepository::new());

        let client_service = ClientService::new(Arc::clone(&repository), Arc::clone(&clock));
        let account_service = AccountService::new(Arc::clone(&repository), config.clone());
        let transaction_service = TransactionService::new(Arc::clone(&repository), Arc::clone(&clock));

        Self {
            config,
            repository,
            clock,
            client_service,
            account_service,
            transaction_service,
        }
    }
}
