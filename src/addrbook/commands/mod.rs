//! # Command Layer
//!
//! Business operations on top of [`AddressBook`](crate::book::AddressBook). Each command
//! calls the store, then packages what happened into a [`CmdResult`]: the records or report
//! to show, plus user-facing [`CmdMessage`]s.
//!
//! Commands never print. Turning a `CmdResult` into terminal output is the CLI's job.

use crate::book::{GroupSummary, MissingInfoReport, Preview, TypeCounts};
use crate::model::Contact;

pub mod contacts;
pub mod labels;
pub mod persist;
pub mod reports;
pub mod search;

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

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    MissingInfo(MissingInfoReport),
    TypeCounts(TypeCounts),
    Groups(GroupSummary),
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Id handed out by an add.
    pub added_id: Option<u32>,
    /// Full records: the viewed contact, or search/filter matches.
    pub contacts: Vec<Contact>,
    pub previews: Vec<Preview>,
    /// What a search was for, e.g. `Name contains 'ann'`.
    pub heading: Option<String>,
    pub report: Option<Report>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_contacts(mut self, contacts: Vec<Contact>) -> Self {
        self.contacts = contacts;
        self
    }

    pub fn with_previews(mut self, previews: Vec<Preview>) -> Self {
        self.previews = previews;
        self
    }

    pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    pub fn with_report(mut self, report: Report) -> Self {
        self.report = Some(report);
        self
    }

    /// True when no message of `Error` level was produced.
    pub fn is_ok(&self) -> bool {
        !self
            .messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}

pub(crate) const MSG_NOT_FOUND: &str = "Contact not found.";
