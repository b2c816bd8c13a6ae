use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

/// Lists every customer sorted ascending by id.
pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    if store.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info("No customers.")));
    }

    let mut customers: Vec<_> = store.list_customers().into_iter().cloned().collect();
    customers.sort_by(|a, b| a.id().cmp(b.id()));

    Ok(CmdResult::default().with_listed_customers(customers))
}
