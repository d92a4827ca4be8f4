use crate::commands::{CmdMessage, CmdResult, ContactInput};
use crate::error::{Result, RolodexError};
use crate::model::{normalize_key, Contact};
use crate::store::ContactStore;
use crate::validate::{validate_email, validate_phone};

pub fn run<S: ContactStore>(store: &mut S, input: &ContactInput) -> Result<CmdResult> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(RolodexError::InvalidInput("Name cannot be empty".into()));
    }

    validate_phone(input.phone.trim())?;
    validate_email(input.email.trim())?;

    let key = normalize_key(name);
    if store.contains(&key)? {
        return Err(RolodexError::DuplicateContact(name.to_string()));
    }

    let contact = Contact::new(
        name.to_string(),
        input.phone.trim().to_string(),
        input.email.trim().to_string(),
        input.address.trim().to_string(),
    );
    store.save(&contact)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Contact '{}' added successfully",
        contact.name
    )));
    Ok(result.with_affected(vec![contact]))
}
