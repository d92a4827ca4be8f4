use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::normalize_key;
use crate::store::ContactStore;

pub fn run<S: ContactStore>(store: &mut S, name: &str) -> Result<CmdResult> {
    let key = normalize_key(name);
    let contact = store.get(&key)?;
    store.remove(&key)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Contact '{}' deleted successfully",
        contact.name
    )));
    Ok(result.with_affected(vec![contact]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RolodexError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn removes_the_contact() {
        let mut fixture = StoreFixture::new().with_contact("Ada", "1234567890");
        let result = run(&mut fixture.store, "Ada").unwrap();

        assert_eq!(result.affected[0].name, "Ada");
        assert!(!fixture.store.contains("ada").unwrap());
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let mut fixture = StoreFixture::new().with_contact("Ada Lovelace", "1234567890");
        run(&mut fixture.store, "  ADA LOVELACE ").unwrap();
        assert!(fixture.store.list().unwrap().is_empty());
    }

    #[test]
    fn unknown_contact_fails() {
        let mut fixture = StoreFixture::new().with_contact("Ada", "1234567890");
        let err = run(&mut fixture.store, "Nobody").unwrap_err();
        assert!(matches!(err, RolodexError::ContactNotFound(_)));
        assert_eq!(fixture.store.list().unwrap().len(), 1);
    }
}
