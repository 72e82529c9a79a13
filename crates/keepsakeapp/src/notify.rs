//! Notification sink.
//!
//! Action feedback is an explicit, injected dependency rather than an
//! ambient hook: the dashboard pushes every command's messages into a
//! [`NotificationSink`], and the client decides what a notification looks
//! like (terminal line, test buffer, nothing).

use crate::commands::{CmdMessage, MessageLevel};

pub trait NotificationSink {
    fn notify(&mut self, level: MessageLevel, message: &str);

    fn notify_all(&mut self, messages: &[CmdMessage]) {
        for m in messages {
            self.notify(m.level, &m.content);
        }
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl NotificationSink for NullSink {
    fn notify(&mut self, _level: MessageLevel, _message: &str) {}
}

/// Buffers notifications for inspection (tests, headless clients).
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    pub entries: Vec<CmdMessage>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Vec<&str> {
        self.entries.iter().map(|m| m.content.as_str()).collect()
    }
}

impl NotificationSink for MemorySink {
    fn notify(&mut self, level: MessageLevel, message: &str) {
        self.entries.push(CmdMessage {
            level,
            content: message.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sink_buffers_in_order() {
        let mut sink = MemorySink::new();
        sink.notify(MessageLevel::Info, "first");
        sink.notify(MessageLevel::Success, "second");

        assert_eq!(sink.contents(), vec!["first", "second"]);
        assert_eq!(sink.entries[1].level, MessageLevel::Success);
    }

    #[test]
    fn notify_all_forwards_each_message() {
        let mut sink = MemorySink::new();
        sink.notify_all(&[CmdMessage::info("a"), CmdMessage::warning("b")]);
        assert_eq!(sink.entries.len(), 2);
    }
}
