//! Menu text and the grammar of menu input.
//!
//! Every choice is a single line matched exactly after trimming. Parsing is pure so
//! the grammar can be tested without a terminal.

use crate::commands::EditAction;
use std::str::FromStr;
use thiserror::Error;

pub const MAIN_MENU: &str = "\
Mini-CRM
1) Add customer
2) Edit customer
3) Show customer by id
4) List all customers
5) Delete customer
0) Exit";

pub const EDIT_MENU: &str = "\
1) Change name
2) Add tag
3) Add note
4) Add email
5) Remove tag
6) Remove note
7) Remove email";

pub const CONFIRM_DELETE_PROMPT: &str = "Are you sure you want to delete this customer? (Y/N): ";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown choice: {0}")]
pub struct UnknownChoice(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainChoice {
    Add,
    Edit,
    Show,
    List,
    Delete,
    Exit,
}

impl FromStr for MainChoice {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MainChoice::Add),
            "2" => Ok(MainChoice::Edit),
            "3" => Ok(MainChoice::Show),
            "4" => Ok(MainChoice::List),
            "5" => Ok(MainChoice::Delete),
            "0" => Ok(MainChoice::Exit),
            other => Err(UnknownChoice(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditChoice {
    ChangeName,
    AddTag,
    AddNote,
    AddEmail,
    RemoveTag,
    RemoveNote,
    RemoveEmail,
}

impl FromStr for EditChoice {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(EditChoice::ChangeName),
            "2" => Ok(EditChoice::AddTag),
            "3" => Ok(EditChoice::AddNote),
            "4" => Ok(EditChoice::AddEmail),
            "5" => Ok(EditChoice::RemoveTag),
            "6" => Ok(EditChoice::RemoveNote),
            "7" => Ok(EditChoice::RemoveEmail),
            other => Err(UnknownChoice(other.to_string())),
        }
    }
}

impl EditChoice {
    /// Prompt for the one line of input this sub-action reads.
    pub fn prompt(self) -> &'static str {
        match self {
            EditChoice::ChangeName => "New name: ",
            EditChoice::AddTag => "New tag: ",
            EditChoice::AddNote => "New note: ",
            EditChoice::AddEmail => "New email: ",
            EditChoice::RemoveTag => "Tag to remove: ",
            EditChoice::RemoveNote => "Note to remove: ",
            EditChoice::RemoveEmail => "Email to remove: ",
        }
    }

    /// Builds the action from the raw input line. Notes keep the line verbatim,
    /// everything else is trimmed.
    pub fn into_action(self, line: &str) -> EditAction {
        let trimmed = line.trim().to_string();
        match self {
            EditChoice::ChangeName => EditAction::ChangeName(trimmed),
            EditChoice::AddTag => EditAction::AddTag(trimmed),
            EditChoice::AddNote => EditAction::AddNote(line.to_string()),
            EditChoice::AddEmail => EditAction::AddEmail(trimmed),
            EditChoice::RemoveTag => EditAction::RemoveTag(trimmed),
            EditChoice::RemoveNote => EditAction::RemoveNote(line.to_string()),
            EditChoice::RemoveEmail => EditAction::RemoveEmail(trimmed),
        }
    }
}

/// Answer to the delete confirmation; case-insensitive `Y` or `N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Yes,
    No,
}

impl FromStr for Confirmation {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "Y" => Ok(Confirmation::Yes),
            "N" => Ok(Confirmation::No),
            _ => Err(UnknownChoice(s.trim().to_string())),
        }
    }
}
