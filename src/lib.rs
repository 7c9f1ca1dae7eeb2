//! Contact Cards - a contact list and contact creation front end for the cards API.
//!
//! The crate reads contact cards from `GET /api/cards` and creates new ones
//! with `POST /api/card` after validating the form client-side.
//!
//! # Architecture
//!
//! - **models**: The contact record and the creation payload
//! - **domain**: Validated value objects for email, phone and bounded text
//! - **validation**: The typed per-field rule set used by the form
//! - **client**: HTTP client for the cards API, with an async wrapper
//! - **views**: List, form and page view models
//! - **metrics**: In-process request counters
//! - **config**: Configuration from environment variables
//! - **error**: Error types

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod validation;
pub mod views;

pub use client::{AsyncCardsClient, AsyncCardsClientImpl, CardsClient};
pub use config::Config;
pub use error::{CardsApiError, ConfigError, ViewError};
pub use metrics::{HttpTimer, Metrics, MetricsSummary};
pub use models::{Contact, NewContact};
pub use validation::{FieldRule, FormField};
pub use views::{
    Acknowledgment, ContactFormView, ContactListView, ContactsPage, FormSignal, ListState,
    SubmitOutcome,
};
