use crate::model::Customer;

pub mod add;
pub mod delete;
pub mod edit;
pub mod list;
pub mod show;

pub use edit::EditAction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What a command hands back to its caller: records to display and messages to print.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_customers: Vec<Customer>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_listed_customers(mut self, customers: Vec<Customer>) -> Self {
        self.listed_customers = customers;
        self
    }
}
