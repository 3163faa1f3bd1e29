//! Client service - client registration and lookup

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::adapters::MemoryRepository;
use crate::domain::result::{Error, Result};
use crate::domain::Client;
use crate::ports::Clock;

/// Client service for registration and identity lookup
pub struct ClientService {
    repository: Arc<MemoryRepository>,
    clock: Arc<dyn Clock>,
}

impl ClientService {
    pub fn new(repository: Arc<MemoryRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// Register a new physical-person client
    ///
    /// Fails with `DuplicateIdentity` if the tax id is taken; the existing
    /// client is left untouched.
    pub fn create_client(
        &self,
        tax_id: &str,
        name: &str,
        birth_date: NaiveDate,
        address: &str,
    ) -> Result<Client> {
        let client = Client::physical_person(tax_id, name, birth_date, address, self.clock.today())?;

        let created = self.repository.write(|registry| {
            registry.register_client(client).map(Client::clone)
        });

        match &created {
            Ok(client) => info!(tax_id = client.tax_id(), "client created"),
            Err(e) => debug!(tax_id, %e, "client rejected"),
        }
        created
    }

    /// Fail early if a tax id is malformed or already registered
    ///
    /// Lets the shell stop before prompting for the rest of the client data.
    pub fn ensure_available(&self, tax_id: &str) -> Result<()> {
        Client::validate_tax_id(tax_id)?;
        self.repository.read(|registry| match registry.find_client(tax_id) {
            Some(_) => Err(Error::DuplicateIdentity(tax_id.to_string())),
            None => Ok(()),
        })
    }

    /// Look up a client by tax id
    pub fn find_client(&self, tax_id: &str) -> Result<Client> {
        self.repository.read(|registry| {
            registry
                .find_client(tax_id)
                .cloned()
                .ok_or_else(|| Error::not_found(format!("client {}", tax_id)))
        })
    }

    /// All clients in registration order
    pub fn list_clients(&self) -> Result<Vec<Client>> {
        self.repository.read(|registry| Ok(registry.clients().to_vec()))
    }
}
