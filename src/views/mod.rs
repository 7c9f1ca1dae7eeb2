//! View models for the contact list, the creation form and the page that
//! composes them.
//!
//! Each view is a plain state machine: user events and network results go in,
//! rendered text comes out. Nothing here knows about terminals or browsers.

pub mod form;
pub mod list;
pub mod page;

pub use form::{Acknowledgment, ContactFormView, FormSignal, SubmitOutcome};
pub use list::{ContactListView, ListState};
pub use page::ContactsPage;
