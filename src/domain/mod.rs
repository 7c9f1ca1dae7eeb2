//! Format predicates for the contact fields.
//!
//! Email syntax, phone digits and text length are checked here once and
//! shared by the form rule set in `crate::validation`.

pub mod email;
pub mod phone;
pub mod text;

pub use email::is_valid_email;
pub use phone::is_valid_phone;
pub use text::{char_len, MAX_TEXT_LEN, MIN_TEXT_LEN};
