//! Async wrapper around synchronous CardsClient.
//!
//! This module provides an async interface to the synchronous CardsClient by using
//! `tokio::task::spawn_blocking` to run HTTP operations on a dedicated thread pool,
//! preventing blocking of the async runtime.

use crate::client::CardsClient;
use crate::error::{CardsApiError, CardsApiResult};
use crate::models::{Contact, NewContact};
use async_trait::async_trait;
use std::sync::Arc;

/// Async operations the views need from the cards API.
///
/// Views depend on this trait rather than on `CardsClient` so tests can
/// substitute an in-memory implementation.
#[async_trait]
pub trait AsyncCardsClient: Send + Sync {
    /// Read the full contact collection.
    async fn get_cards(&self) -> CardsApiResult<Vec<Contact>>;

    /// Create a contact from the form payload.
    async fn create_card(&self, contact: &NewContact) -> CardsApiResult<()>;
}

/// Async wrapper around synchronous CardsClient.
#[derive(Clone)]
pub struct AsyncCardsClientImpl {
    client: Arc<CardsClient>,
}

impl AsyncCardsClientImpl {
    pub fn new(client: CardsClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Access the wrapped synchronous client.
    pub fn inner(&self) -> &CardsClient {
        &self.client
    }
}

#[async_trait]
impl AsyncCardsClient for AsyncCardsClientImpl {
    async fn get_cards(&self) -> CardsApiResult<Vec<Contact>> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.get_cards())
            .await
            .map_err(|e| CardsApiError::HttpError(format!("Task join error: {}", e)))?
    }

    async fn create_card(&self, contact: &NewContact) -> CardsApiResult<()> {
        let client = self.client.clone();
        let contact = contact.clone();

        tokio::task::spawn_blocking(move || client.create_card(&contact))
            .await
            .map_err(|e| CardsApiError::HttpError(format!("Task join error: {}", e)))?
    }
}
