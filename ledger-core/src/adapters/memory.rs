//! In-memory repository
//!
//! Holds the [`Registry`] behind a single lock. Every operation runs inside
//! one critical section, so account-number assignment, client creation and
//! balance mutation (including the withdrawal policy check) are serialized
//! when the repository is shared across threads.

use std::sync::{Mutex, MutexGuard};

use crate::domain::result::{Error, Result};
use crate::domain::Registry;

#[derive(Debug, Default)]
pub struct MemoryRepository {
    registry: Mutex<Registry>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Registry>> {
        self.registry
            .lock()
            .map_err(|e| Error::Storage(format!("Lock poisoned: {}", e)))
    }

    /// Run a read-only operation against the registry
    pub fn read<T>(&self, f: impl FnOnce(&Registry) -> Result<T>) -> Result<T> {
        let registry = self.lock()?;
        f(&registry)
    }

    /// Run a mutating operation against the registry
    ///
    /// The closure must validate before mutating: there is no rollback.
    pub fn write<T>(&self, f: impl FnOnce(&mut Registry) -> Result<T>) -> Result<T> {
        let mut registry = self.lock()?;
        f(&mut registry)
    }
}
