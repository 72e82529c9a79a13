//! # Command Layer
//!
//! The core business logic. Each operation lives in its own submodule as a
//! pure function over a [`crate::store::RecordStore`]: no stdout, no
//! terminal concerns, no exit codes. Commands return structured
//! [`CmdResult`]s and let the client decide how to render them.
//!
//! Bulk semantics: commands take explicit target id slices. Targets in an
//! invalid source state for the requested transition are **no-ops** with an
//! info message (the UI grays those actions out, but the data layer must
//! stay safe when called directly). Targets that do not exist at all are
//! errors.
//!
//! ## Command Modules
//!
//! - [`list`]: derive the filtered/sorted view
//! - [`moderate`]: dismiss / remove / restore reports, adjusting the badge
//! - [`members`]: suspend / reactivate members
//! - [`media`]: share / unshare gallery items
//! - [`delete`]: permanently remove records
//!
//! ## Testing Strategy
//!
//! This is where the lion's share of testing lives. Command tests use
//! [`crate::store::MemoryStore`] and verify result contents, store state,
//! and edge cases.

use serde::Serialize;

pub mod delete;
pub mod list;
pub mod media;
pub mod members;
pub mod moderate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
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

/// Structured command output.
///
/// - `affected`: records modified by the operation
/// - `listed`: records to display (for `list`)
/// - `messages`: structured messages with levels
#[derive(Debug, Default)]
pub struct CmdResult<R> {
    pub affected: Vec<R>,
    pub listed: Vec<R>,
    pub messages: Vec<CmdMessage>,
}

impl<R> CmdResult<R> {
    pub fn new() -> Self {
        Self {
            affected: Vec::new(),
            listed: Vec::new(),
            messages: Vec::new(),
        }
    }

    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed(mut self, records: Vec<R>) -> Self {
        self.listed = records;
        self
    }

    pub fn with_affected(mut self, records: Vec<R>) -> Self {
        self.affected = records;
        self
    }
}
