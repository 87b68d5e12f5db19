//! Client record service.

use std::sync::Arc;

use crate::domain::entities::{Client, NewClient};
use crate::domain::repositories::ClientRepository;
use crate::error::AppError;

/// Service for creating and listing clients.
///
/// No uniqueness or range checks are applied: duplicate names and negative
/// ages are stored as submitted.
pub struct ClientService<R: ClientRepository> {
    repository: Arc<R>,
}

impl<R: ClientRepository> ClientService<R> {
    /// Creates a new client service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Stores a new client.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_client(&self, new_client: NewClient) -> Result<Client, AppError> {
        let client = self.repository.create(new_client).await?;
        tracing::debug!(client_id = client.id, "Client created");
        Ok(client)
    }

    /// Lists every client.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_clients(&self) -> Result<Vec<Client>, AppError> {
        self.repository.list().await
    }
}
