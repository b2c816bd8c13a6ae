use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::CustomerId;
use crate::store::DataStore;
use tracing::debug;

/// Removes a customer for good. Confirmation is the caller's job.
pub fn run<S: DataStore>(store: &mut S, id: &CustomerId) -> Result<CmdResult> {
    store.delete_customer(id)?;
    debug!(%id, remaining = store.len(), "customer deleted");

    Ok(CmdResult::default().with_message(CmdMessage::success("Customer has been deleted.")))
}
