//! Contact list view.
//!
//! Reads the whole contact collection once per activation and renders one
//! card per contact. There is no retry, polling or pagination: a failed read
//! stays failed until the view is activated again.

use crate::client::AsyncCardsClient;
use crate::error::ViewError;
use crate::models::Contact;
use std::fmt::Write;
use tracing::{debug, warn};

/// Where the list view is in its fetch lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListState {
    /// Waiting for the collection read to resolve
    Loading,
    /// Collection read succeeded
    Loaded(Vec<Contact>),
    /// Collection read failed
    Failed(ViewError),
}

/// View model for the contact list.
#[derive(Debug, Clone)]
pub struct ContactListView {
    state: ListState,
    editing: bool,
}

impl Default for ContactListView {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactListView {
    pub fn new() -> Self {
        Self {
            state: ListState::Loading,
            editing: false,
        }
    }

    /// Issue one read of the contact collection and settle the view state.
    ///
    /// Any previously loaded cards are dropped before the read, so a failure
    /// never leaves stale data on screen.
    pub async fn activate(&mut self, client: &dyn AsyncCardsClient) {
        self.state = ListState::Loading;

        self.state = match client.get_cards().await {
            Ok(cards) => {
                debug!("Loaded {} cards", cards.len());
                ListState::Loaded(cards)
            }
            Err(e) => {
                warn!("Failed to fetch cards: {}", e);
                ListState::Failed(ViewError::FetchFailed(e.to_string()))
            }
        };
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ListState::Loading)
    }

    /// Loaded cards, or an empty slice while loading or after a failure.
    pub fn cards(&self) -> &[Contact] {
        match &self.state {
            ListState::Loaded(cards) => cards,
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&ViewError> {
        match &self.state {
            ListState::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Edit affordance on a card. Only raises the editing flag.
    pub fn edit(&mut self, id: i64) {
        debug!("Edit requested for card {}", id);
        self.editing = true;
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Render the current state as text.
    pub fn render(&self) -> String {
        match &self.state {
            ListState::Loading => "Loading...".to_string(),
            ListState::Failed(err) => format!("Error: {}", err),
            ListState::Loaded(cards) if cards.is_empty() => "No contacts.".to_string(),
            ListState::Loaded(cards) => cards
                .iter()
                .map(render_card)
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

/// Render one card: name, `title at company`, phone, email, edit control.
pub fn render_card(contact: &Contact) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", contact.name);
    let _ = writeln!(out, "{}", contact.position());
    let _ = writeln!(out, "{}", contact.phone);
    let _ = writeln!(out, "{}", contact.email);
    let _ = writeln!(out, "[edit #{}]", contact.id);
    out
}
