use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Stats;
use crate::store::ContactStore;

pub fn run<S: ContactStore>(store: &S) -> Result<CmdResult> {
    let contacts = store.list()?;
    let stats = Stats {
        total: contacts.len(),
        with_email: contacts.iter().filter(|c| !c.email.is_empty()).count(),
        with_address: contacts.iter().filter(|c| !c.address.is_empty()).count(),
    };
    Ok(CmdResult::default().with_stats(stats))
}
