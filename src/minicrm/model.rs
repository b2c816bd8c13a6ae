use std::fmt;

const ID_PREFIX: &str = "C-";

/// Identifier of a customer, e.g. `C-0001`.
///
/// Ids are compared as strings. Generated ids are zero-padded to four digits, so
/// string order and numeric order agree for everything the counter produces below
/// `C-10000`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CustomerId(String);

impl CustomerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Formats a counter value as `C-%04d`.
    pub fn from_number(n: u32) -> Self {
        Self(format!("{}{:04}", ID_PREFIX, n))
    }

    /// The numeric part of a generated id, if this id has that shape.
    pub fn number(&self) -> Option<u32> {
        self.0.strip_prefix(ID_PREFIX)?.parse().ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CustomerId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// One managed customer record.
///
/// Emails and tags behave as insertion-ordered sets of trimmed, non-empty strings.
/// Notes are kept verbatim, duplicates and empty strings included. The collections are
/// only reachable as read-only slices; every change goes through the methods below.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    id: CustomerId,
    name: String,
    emails: Vec<String>,
    tags: Vec<String>,
    notes: Vec<String>,
}

impl Customer {
    pub fn new(id: CustomerId, name: &str) -> Self {
        Self {
            id,
            name: name.trim().to_string(),
            emails: Vec::new(),
            tags: Vec::new(),
            notes: Vec::new(),
        }
    }

    pub fn id(&self) -> &CustomerId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn emails(&self) -> &[String] {
        &self.emails
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    /// Replaces the name. An all-whitespace name trims to the empty string and is accepted.
    pub fn set_name(&mut self, name: &str) {
        self.name = name.trim().to_string();
    }

    pub fn add_email(&mut self, email: &str) -> bool {
        insert_trimmed(&mut self.emails, email)
    }

    pub fn remove_email(&mut self, email: &str) -> bool {
        remove_first(&mut self.emails, email.trim())
    }

    pub fn add_tag(&mut self, tag: &str) -> bool {
        insert_trimmed(&mut self.tags, tag)
    }

    pub fn remove_tag(&mut self, tag: &str) -> bool {
        remove_first(&mut self.tags, tag.trim())
    }

    pub fn add_note(&mut self, note: &str) {
        self.notes.push(note.to_string());
    }

    /// Removes the first note equal to `note`, without trimming.
    pub fn remove_note(&mut self, note: &str) -> bool {
        remove_first(&mut self.notes, note)
    }
}

/// Set insert over an ordered vec: returns true only if the trimmed value was new.
fn insert_trimmed(set: &mut Vec<String>, value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() || set.iter().any(|v| v == value) {
        return false;
    }
    set.push(value.to_string());
    true
}

fn remove_first(list: &mut Vec<String>, value: &str) -> bool {
    match list.iter().position(|v| v == value) {
        Some(pos) => {
            list.remove(pos);
            true
        }
        None => false,
    }
}
