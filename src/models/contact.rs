//! Contact model representing a single card.

use serde::{Deserialize, Serialize};

/// A contact as returned by the cards API.
///
/// The server assigns `id`. Field values are rendered verbatim, so nothing
/// here is normalized or re-validated on the way in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    /// Server-assigned unique identifier
    pub id: i64,

    /// Full name
    #[serde(default)]
    pub name: String,

    /// Email address
    #[serde(default)]
    pub email: String,

    /// Phone number
    #[serde(default)]
    pub phone: String,

    /// Company the contact works for
    #[serde(default)]
    pub company: String,

    /// Job title
    #[serde(default)]
    pub title: String,
}

impl Contact {
    /// The `title at company` line shown on a card.
    pub fn position(&self) -> String {
        format!("{} at {}", self.title, self.company)
    }
}

/// Request body for creating a contact.
///
/// Carries exactly the five form fields; the server assigns the id.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_deserialization() {
        let json = r#"{
            "id": 7,
            "name": "Angela Moss",
            "email": "a@x.com",
            "phone": "1234567890",
            "company": "Acme",
            "title": "Manager"
        }"#;

        let contact: Contact = serde_json::from_str(json).unwrap();
        assert_eq!(contact.id, 7);
        assert_eq!(contact.name, "Angela Moss");
        assert_eq!(contact.position(), "Manager at Acme");
    }

    #[test]
    fn test_contact_missing_optional_text_defaults_empty() {
        let contact: Contact = serde_json::from_str(r#"{"id": 1, "name": "Al"}"#).unwrap();
        assert_eq!(contact.email, "");
        assert_eq!(contact.company, "");
    }

    #[test]
    fn test_new_contact_serializes_exact_keys() {
        let payload = NewContact {
            name: "Angela Moss".to_string(),
            email: "a@x.com".to_string(),
            phone: "1234567890".to_string(),
            company: "Acme".to_string(),
            title: "Manager".to_string(),
        };

        let value = serde_json::to_value(&payload).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 5);
        assert!(object.get("id").is_none());
        assert_eq!(object["phone"], "1234567890");
    }
}
