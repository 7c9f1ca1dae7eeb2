//! Data models for the cards API.
//!
//! This module contains the contact record returned by `GET /api/cards` and
//! the payload sent to `POST /api/card`.

pub mod contact;

pub use contact::{Contact, NewContact};
