use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Normalize a display name into the key it is stored under.
///
/// Two names that normalize to the same key refer to the same contact.
pub fn normalize_key(name: &str) -> String {
    name.trim().to_lowercase()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Contact {
    pub fn new(name: String, phone: String, email: String, address: String) -> Self {
        let now = Utc::now();
        Self {
            name,
            phone,
            email,
            address,
            created_at: now,
            updated_at: now,
        }
    }

    /// The normalized key this contact lives under in the store.
    pub fn key(&self) -> String {
        normalize_key(&self.name)
    }
}

/// Summary counts over the whole book.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total: usize,
    pub with_email: usize,
    pub with_address: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_lowercases_and_trims() {
        assert_eq!(normalize_key("  Ada Lovelace "), "ada lovelace");
        let contact = Contact::new(
            "Ada Lovelace".into(),
            "1234567890".into(),
            String::new(),
            String::new(),
        );
        assert_eq!(contact.key(), "ada lovelace");
    }

    #[test]
    fn new_contact_stamps_both_timestamps() {
        let contact = Contact::new("Bob".into(), "1234567890".into(), "".into(), "".into());
        assert_eq!(contact.created_at, contact.updated_at);
    }
}
