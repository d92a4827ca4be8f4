use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::ContactStore;

/// All contacts, sorted by display name without regard to case.
pub fn run<S: ContactStore>(store: &S) -> Result<CmdResult> {
    let mut contacts = store.list()?;
    contacts.sort_by_key(|c| c.name.to_lowercase());
    Ok(CmdResult::default().with_listed(contacts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn sorts_by_name_case_insensitively() {
        let fixture = StoreFixture::new()
            .with_contact("zoe", "1234567890")
            .with_contact("Ada", "1234567890")
            .with_contact("grace", "1234567890");

        let result = run(&fixture.store).unwrap();
        let names: Vec<&str> = result.listed.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Ada", "grace", "zoe"]);
    }

    #[test]
    fn empty_book_lists_nothing() {
        let fixture = StoreFixture::new();
        let result = run(&fixture.store).unwrap();
        assert!(result.listed.is_empty());
    }
}
