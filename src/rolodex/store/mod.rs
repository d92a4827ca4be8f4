//! # Storage Layer
//!
//! Persistence for the contact book sits behind the [`ContactStore`] trait,
//! with two implementations:
//!
//! - [`fs::JsonStore`]: the production store. The whole book is one
//!   `contacts.json` document, a map of normalized name key to contact
//!   record, rewritten atomically (temp file + rename) on every mutation.
//! - [`memory::InMemoryStore`]: a `HashMap` used by unit tests and the
//!   test fixtures, no filesystem involved.
//!
//! ## On Disk
//!
//! ```text
//! <data dir>/
//! ├── contacts.json       # all contacts, keyed by normalized name
//! └── config.json         # application configuration
//! ```
//!
//! The whole mapping is loaded on every read and written back on every
//! mutation; nothing is updated in place.

use crate::error::Result;
use crate::model::Contact;

pub mod fs;
pub mod memory;

/// Abstract interface for contact storage.
///
/// Implementations must keep one contact per normalized name key and persist
/// every mutation before returning.
pub trait ContactStore {
    /// Save a contact under its normalized key (create or overwrite)
    fn save(&mut self, contact: &Contact) -> Result<()>;

    /// Remove `old_key` and store the contact under its current key,
    /// persisted as a single rewrite
    fn rename(&mut self, old_key: &str, contact: &Contact) -> Result<()>;

    /// Get a contact by normalized key
    fn get(&self, key: &str) -> Result<Contact>;

    /// Whether a contact exists under the given normalized key
    fn contains(&self, key: &str) -> Result<bool>;

    /// List all contacts, in no particular order
    fn list(&self) -> Result<Vec<Contact>>;

    /// Delete a contact permanently
    fn remove(&mut self, key: &str) -> Result<()>;
}
