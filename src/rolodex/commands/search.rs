use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::ContactStore;

/// An empty or whitespace term matches the whole book; anything else is a
/// case-insensitive substring match against name, phone, or email.
pub fn run<S: ContactStore>(store: &S, term: &str) -> Result<CmdResult> {
    let contacts = store.list()?;
    let term = term.trim().to_lowercase();

    let listed = if term.is_empty() {
        contacts
    } else {
        contacts
            .into_iter()
            .filter(|c| {
                c.name.to_lowercase().contains(&term)
                    || c.phone.contains(&term)
                    || c.email.to_lowercase().contains(&term)
            })
            .collect()
    };

    Ok(CmdResult::default().with_listed(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn empty_term_returns_everything() {
        let fixture = StoreFixture::new().with_contacts(3);
        let result = run(&fixture.store, "").unwrap();
        assert_eq!(result.listed.len(), 3);

        let result = run(&fixture.store, "   ").unwrap();
        assert_eq!(result.listed.len(), 3);
    }

    #[test]
    fn matches_name_case_insensitively() {
        let fixture = StoreFixture::new()
            .with_contact("Ada Lovelace", "1234567890")
            .with_contact("Grace Hopper", "0987654321");

        let result = run(&fixture.store, "ADA").unwrap();
        assert_eq!(result.listed.len(), 1);
        assert_eq!(result.listed[0].name, "Ada Lovelace");
    }

    #[test]
    fn matches_phone_substring() {
        let fixture = StoreFixture::new()
            .with_contact("Ada", "1234567890")
            .with_contact("Grace", "0987654321");

        let result = run(&fixture.store, "12345").unwrap();
        assert_eq!(result.listed.len(), 1);
        assert_eq!(result.listed[0].name, "Ada");
    }

    #[test]
    fn matches_email_substring() {
        let fixture = StoreFixture::new()
            .with_full_contact("Ada", "1234567890", "ada@example.com", "")
            .with_full_contact("Grace", "0987654321", "grace@navy.mil", "");

        let result = run(&fixture.store, "example").unwrap();
        assert_eq!(result.listed.len(), 1);
        assert_eq!(result.listed[0].name, "Ada");
    }

    #[test]
    fn no_match_returns_empty() {
        let fixture = StoreFixture::new().with_contact("Ada", "1234567890");
        let result = run(&fixture.store, "nobody").unwrap();
        assert!(result.listed.is_empty());
    }
}
