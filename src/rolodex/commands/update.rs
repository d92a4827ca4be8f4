use crate::commands::{CmdMessage, CmdResult, ContactInput};
use crate::error::{Result, RolodexError};
use crate::model::{normalize_key, Contact};
use crate::store::ContactStore;
use crate::validate::{validate_email, validate_phone};
use chrono::Utc;

pub fn run<S: ContactStore>(
    store: &mut S,
    old_name: &str,
    input: &ContactInput,
) -> Result<CmdResult> {
    let old_key = normalize_key(old_name);
    let existing = store.get(&old_key)?;

    let name = input.name.trim();
    if name.is_empty() {
        return Err(RolodexError::InvalidInput("Name cannot be empty".into()));
    }

    validate_phone(input.phone.trim())?;
    validate_email(input.email.trim())?;

    let new_key = normalize_key(name);
    if new_key != old_key && store.contains(&new_key)? {
        return Err(RolodexError::DuplicateContact(name.to_string()));
    }

    let contact = Contact {
        name: name.to_string(),
        phone: input.phone.trim().to_string(),
        email: input.email.trim().to_string(),
        address: input.address.trim().to_string(),
        created_at: existing.created_at,
        updated_at: Utc::now(),
    };

    if new_key != old_key {
        store.rename(&old_key, &contact)?;
    } else {
        store.save(&contact)?;
    }

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Contact '{}' updated successfully",
        contact.name
    )));
    Ok(result.with_affected(vec![contact]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::store::memory::InMemoryStore;

    fn input(name: &str, phone: &str, email: &str, address: &str) -> ContactInput {
        ContactInput::new(name.into(), phone.into(), email.into(), address.into())
    }

    #[test]
    fn updates_fields_in_place() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, &input("Ada", "1234567890", "", "")).unwrap();

        run(
            &mut store,
            "Ada",
            &input("Ada", "0987654321", "ada@example.com", "12 Main St"),
        )
        .unwrap();

        let contact = store.get("ada").unwrap();
        assert_eq!(contact.phone, "0987654321");
        assert_eq!(contact.email, "ada@example.com");
        assert_eq!(contact.address, "12 Main St");
    }

    #[test]
    fn preserves_created_at() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, &input("Ada", "1234567890", "", "")).unwrap();
        let before = store.get("ada").unwrap();

        run(&mut store, "Ada", &input("Ada", "0987654321", "", "")).unwrap();

        let after = store.get("ada").unwrap();
        assert_eq!(after.created_at, before.created_at);
        assert!(after.updated_at >= before.updated_at);
    }

    #[test]
    fn rename_moves_to_new_key() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, &input("Ada", "1234567890", "", "")).unwrap();

        run(
            &mut store,
            "Ada",
            &input("Ada Lovelace", "1234567890", "", ""),
        )
        .unwrap();

        assert!(!store.contains("ada").unwrap());
        let contact = store.get("ada lovelace").unwrap();
        assert_eq!(contact.name, "Ada Lovelace");
    }

    #[test]
    fn rename_onto_existing_contact_fails() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, &input("Ada", "1234567890", "", "")).unwrap();
        add::run(&mut store, &input("Grace", "0987654321", "", "")).unwrap();

        let err = run(&mut store, "Ada", &input("Grace", "1234567890", "", "")).unwrap_err();
        assert!(matches!(err, RolodexError::DuplicateContact(_)));

        // Both originals survive intact
        assert!(store.contains("ada").unwrap());
        assert_eq!(store.get("grace").unwrap().phone, "0987654321");
    }

    #[test]
    fn case_only_rename_is_not_a_collision() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, &input("ada", "1234567890", "", "")).unwrap();

        run(&mut store, "ada", &input("ADA", "1234567890", "", "")).unwrap();

        let contact = store.get("ada").unwrap();
        assert_eq!(contact.name, "ADA");
    }

    #[test]
    fn unknown_contact_fails() {
        let mut store = InMemoryStore::new();
        let err = run(&mut store, "Nobody", &input("Nobody", "1234567890", "", "")).unwrap_err();
        assert!(matches!(err, RolodexError::ContactNotFound(_)));
    }

    #[test]
    fn invalid_phone_leaves_contact_unchanged() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, &input("Ada", "1234567890", "", "")).unwrap();

        let err = run(&mut store, "Ada", &input("Ada", "123", "", "")).unwrap_err();
        assert!(matches!(err, RolodexError::InvalidInput(_)));
        assert_eq!(store.get("ada").unwrap().phone, "1234567890");
    }
}
