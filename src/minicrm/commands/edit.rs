use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::CustomerId;
use crate::store::DataStore;
use tracing::debug;

/// A single change to an existing customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditAction {
    ChangeName(String),
    AddTag(String),
    AddNote(String),
    AddEmail(String),
    RemoveTag(String),
    RemoveNote(String),
    RemoveEmail(String),
}

pub fn run<S: DataStore>(store: &mut S, id: &CustomerId, action: EditAction) -> Result<CmdResult> {
    let customer = store.get_customer_mut(id)?;

    let message = match &action {
        EditAction::ChangeName(name) => {
            customer.set_name(name);
            CmdMessage::success("Name updated.")
        }
        // Adds confirm even when the value was empty or already present.
        EditAction::AddTag(tag) => {
            let inserted = customer.add_tag(tag);
            debug!(%id, inserted, "add tag");
            CmdMessage::success("Tag added.")
        }
        EditAction::AddNote(note) => {
            customer.add_note(note);
            CmdMessage::success("Note added.")
        }
        EditAction::AddEmail(email) => {
            let inserted = customer.add_email(email);
            debug!(%id, inserted, "add email");
            CmdMessage::success("Email added.")
        }
        EditAction::RemoveTag(tag) => removal(customer.remove_tag(tag), "Tag"),
        EditAction::RemoveNote(note) => removal(customer.remove_note(note), "Note"),
        EditAction::RemoveEmail(email) => removal(customer.remove_email(email), "Email"),
    };
    debug!(%id, ?action, "customer edited");

    Ok(CmdResult::default().with_message(message))
}

fn removal(removed: bool, what: &str) -> CmdMessage {
    if removed {
        CmdMessage::success(format!("{} removed.", what))
    } else {
        CmdMessage::warning(format!("{} not found.", what))
    }
}
