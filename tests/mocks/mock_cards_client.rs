use async_trait::async_trait;
use contact_cards::client::AsyncCardsClient;
use contact_cards::error::{CardsApiError, CardsApiResult};
use contact_cards::models::{Contact, NewContact};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock cards client for testing.
///
/// Serves an in-memory list of cards, can be switched to fail either
/// endpoint with a status code, and records every call and every payload it
/// was asked to create.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockCardsClient {
    cards: Arc<Mutex<Vec<Contact>>>,
    created: Arc<Mutex<Vec<NewContact>>>,
    fail_list_with: Arc<Mutex<Option<u16>>>,
    fail_create_with: Arc<Mutex<Option<u16>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockCardsClient {
    /// Create a new empty MockCardsClient.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that already serves the given cards.
    pub fn with_cards(cards: Vec<Contact>) -> Self {
        let mock = Self::new();
        *mock.cards.lock().unwrap() = cards;
        mock
    }

    /// Make `get_cards` fail with the given status.
    pub fn fail_list(&self, status: u16) {
        *self.fail_list_with.lock().unwrap() = Some(status);
    }

    /// Make `create_card` fail with the given status.
    pub fn fail_create(&self, status: u16) {
        *self.fail_create_with.lock().unwrap() = Some(status);
    }

    /// Payloads received by `create_card`, in order.
    pub fn created(&self) -> Vec<NewContact> {
        self.created.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Total calls across both endpoints.
    pub fn total_calls(&self) -> usize {
        self.call_counts.lock().unwrap().values().sum()
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

#[async_trait]
impl AsyncCardsClient for MockCardsClient {
    async fn get_cards(&self) -> CardsApiResult<Vec<Contact>> {
        self.track_call("get_cards");

        if let Some(status) = *self.fail_list_with.lock().unwrap() {
            return Err(CardsApiError::ApiError {
                status,
                message: "mock failure".to_string(),
            });
        }

        Ok(self.cards.lock().unwrap().clone())
    }

    async fn create_card(&self, contact: &NewContact) -> CardsApiResult<()> {
        self.track_call("create_card");
        self.created.lock().unwrap().push(contact.clone());

        if let Some(status) = *self.fail_create_with.lock().unwrap() {
            return Err(CardsApiError::ApiError {
                status,
                message: "mock failure".to_string(),
            });
        }

        let mut cards = self.cards.lock().unwrap();
        let id = cards.len() as i64 + 1;
        cards.push(Contact {
            id,
            name: contact.name.clone(),
            email: contact.email.clone(),
            phone: contact.phone.clone(),
            company: contact.company.clone(),
            title: contact.title.clone(),
        });
        Ok(())
    }
}
