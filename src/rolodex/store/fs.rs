use super::ContactStore;
use crate::error::{Result, RolodexError};
use crate::model::Contact;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

const CONTACTS_FILENAME: &str = "contacts.json";

pub struct JsonStore {
    root: PathBuf,
    data_file: String,
}

impl JsonStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            data_file: CONTACTS_FILENAME.to_string(),
        }
    }

    pub fn with_data_file(mut self, name: &str) -> Self {
        self.data_file = name.to_string();
        self
    }

    pub fn data_path(&self) -> PathBuf {
        self.root.join(&self.data_file)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(RolodexError::Io)?;
        }
        Ok(())
    }

    fn load_book(&self) -> Result<HashMap<String, Contact>> {
        let data_file = self.data_path();
        if !data_file.exists() {
            return Ok(HashMap::new());
        }
        let content = fs::read_to_string(&data_file).map_err(RolodexError::Io)?;
        match serde_json::from_str(&content) {
            Ok(book) => Ok(book),
            Err(e) => {
                // An unreadable book starts over empty; the old file is
                // replaced on the next save.
                tracing::warn!(
                    path = %data_file.display(),
                    error = %e,
                    "contacts file is not valid JSON, starting with an empty book"
                );
                Ok(HashMap::new())
            }
        }
    }

    fn save_book(&self, book: &HashMap<String, Contact>) -> Result<()> {
        self.ensure_dir()?;

        let data_file = self.data_path();
        let content = serde_json::to_string_pretty(book).map_err(RolodexError::Serialization)?;

        // Atomic replace: a crash mid-write leaves the old book intact
        let tmp_file = self
            .root
            .join(format!(".{}-{}.tmp", self.data_file, std::process::id()));
        fs::write(&tmp_file, content).map_err(RolodexError::Io)?;
        fs::rename(&tmp_file, &data_file).map_err(RolodexError::Io)?;

        Ok(())
    }
}

impl ContactStore for JsonStore {
    fn save(&mut self, contact: &Contact) -> Result<()> {
        let mut book = self.load_book()?;
        book.insert(contact.key(), contact.clone());
        self.save_book(&book)
    }

    fn rename(&mut self, old_key: &str, contact: &Contact) -> Result<()> {
        let mut book = self.load_book()?;
        if book.remove(old_key).is_none() {
            return Err(RolodexError::ContactNotFound(old_key.to_string()));
        }
        book.insert(contact.key(), contact.clone());
        self.save_book(&book)
    }

    fn get(&self, key: &str) -> Result<Contact> {
        let book = self.load_book()?;
        book.get(key)
            .cloned()
            .ok_or_else(|| RolodexError::ContactNotFound(key.to_string()))
    }

    fn contains(&self, key: &str) -> Result<bool> {
        let book = self.load_book()?;
        Ok(book.contains_key(key))
    }

    fn list(&self) -> Result<Vec<Contact>> {
        let book = self.load_book()?;
        Ok(book.into_values().collect())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let mut book = self.load_book()?;
        if book.remove(key).is_none() {
            return Err(RolodexError::ContactNotFound(key.to_string()));
        }
        self.save_book(&book)
    }
}
