use crate::model::{Contact, Stats};

pub mod add;
pub mod delete;
pub mod list;
pub mod search;
pub mod stats;
pub mod update;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
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

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected: Vec<Contact>,
    pub listed: Vec<Contact>,
    pub stats: Option<Stats>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, contacts: Vec<Contact>) -> Self {
        self.affected = contacts;
        self
    }

    pub fn with_listed(mut self, contacts: Vec<Contact>) -> Self {
        self.listed = contacts;
        self
    }

    pub fn with_stats(mut self, stats: Stats) -> Self {
        self.stats = Some(stats);
        self
    }
}

/// Raw field values from a form or prompt, not yet validated.
#[derive(Debug, Clone, Default)]
pub struct ContactInput {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl ContactInput {
    pub fn new(name: String, phone: String, email: String, address: String) -> Self {
        Self {
            name,
            phone,
            email,
            address,
        }
    }
}
