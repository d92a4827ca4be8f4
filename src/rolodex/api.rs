//! # API Facade
//!
//! A thin facade over the command layer and the one entry point every UI
//! client goes through. The menu and the web handlers never reach into
//! commands or stores directly.
//!
//! Responsibilities stop at dispatch: turn a display name into a normalized
//! key, call the matching command, hand back the structured `CmdResult`.
//! Business logic stays in `commands/*.rs`; printing and HTML stay in the
//! clients.
//!
//! `RolodexApi<S: ContactStore>` is generic over the storage backend, so the
//! whole surface runs against `InMemoryStore` in tests and `JsonStore` in
//! production.

use crate::commands;
use crate::error::Result;
use crate::model::{normalize_key, Contact};
use crate::store::ContactStore;

/// Facade over the command layer, generic over the storage backend.
pub struct RolodexApi<S: ContactStore> {
    store: S,
}

impl<S: ContactStore> RolodexApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add_contact(&mut self, input: &commands::ContactInput) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, input)
    }

    pub fn search_contacts(&self, term: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, term)
    }

    pub fn get_contact(&self, name: &str) -> Result<Contact> {
        self.store.get(&normalize_key(name))
    }

    pub fn update_contact(
        &mut self,
        old_name: &str,
        input: &commands::ContactInput,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, old_name, input)
    }

    pub fn delete_contact(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, name)
    }

    pub fn list_contacts(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn stats(&self) -> Result<commands::CmdResult> {
        commands::stats::run(&self.store)
    }
}

pub use commands::{CmdMessage, CmdResult, ContactInput, MessageLevel};
