use super::ContactStore;
use crate::error::{Result, RolodexError};
use crate::model::Contact;
use std::collections::HashMap;

/// In-memory store for tests and fixtures. Nothing is persisted.
#[derive(Default)]
pub struct InMemoryStore {
    contacts: HashMap<String, Contact>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContactStore for InMemoryStore {
    fn save(&mut self, contact: &Contact) -> Result<()> {
        self.contacts.insert(contact.key(), contact.clone());
        Ok(())
    }

    fn rename(&mut self, old_key: &str, contact: &Contact) -> Result<()> {
        if self.contacts.remove(old_key).is_none() {
            return Err(RolodexError::ContactNotFound(old_key.to_string()));
        }
        self.contacts.insert(contact.key(), contact.clone());
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Contact> {
        self.contacts
            .get(key)
            .cloned()
            .ok_or_else(|| RolodexError::ContactNotFound(key.to_string()))
    }

    fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.contacts.contains_key(key))
    }

    fn list(&self) -> Result<Vec<Contact>> {
        Ok(self.contacts.values().cloned().collect())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.contacts.remove(key).is_none() {
            return Err(RolodexError::ContactNotFound(key.to_string()));
        }
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_contacts(mut self, count: usize) -> Self {
            for i in 0..count {
                let contact = Contact::new(
                    format!("Test Contact {}", i + 1),
                    format!("555000{:04}", i + 1),
                    String::new(),
                    String::new(),
                );
                self.store.save(&contact).unwrap();
            }
            self
        }

        pub fn with_contact(mut self, name: &str, phone: &str) -> Self {
            let contact = Contact::new(
                name.to_string(),
                phone.to_string(),
                String::new(),
                String::new(),
            );
            self.store.save(&contact).unwrap();
            self
        }

        pub fn with_full_contact(
            mut self,
            name: &str,
            phone: &str,
            email: &str,
            address: &str,
        ) -> Self {
            let contact = Contact::new(
                name.to_string(),
                phone.to_string(),
                email.to_string(),
                address.to_string(),
            );
            self.store.save(&contact).unwrap();
            self
        }
    }
}
