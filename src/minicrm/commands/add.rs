use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CrmError, Result};
use crate::model::{Customer, CustomerId};
use crate::store::{DataStore, IdSequence};
use tracing::{debug, warn};

/// Draws the next id from the sequence. The counter never moves backwards, even if
/// the id is later found to be taken and discarded.
pub fn next_id(ids: &mut IdSequence) -> CustomerId {
    ids.next_id()
}

/// Fails with `DuplicateId` if `id` is already in the store.
pub fn ensure_free<S: DataStore>(store: &S, id: &CustomerId) -> Result<()> {
    if store.contains(id) {
        warn!(%id, "generated id already in use");
        return Err(CrmError::DuplicateId(id.clone()));
    }
    Ok(())
}

/// Creates a customer under a reserved id. An empty `email` means no email.
pub fn run<S: DataStore>(
    store: &mut S,
    id: CustomerId,
    name: &str,
    email: &str,
) -> Result<CmdResult> {
    let mut customer = Customer::new(id.clone(), name);
    customer.add_email(email);
    let has_email = !customer.emails().is_empty();
    debug!(%id, name = customer.name(), "adding customer");
    store.insert_customer(customer)?;

    let message = if !has_email {
        format!("Customer added with id {}.", id)
    } else {
        format!("Customer added with id {} and email.", id)
    };

    Ok(CmdResult::default().with_message(CmdMessage::success(message)))
}
