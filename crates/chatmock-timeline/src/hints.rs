//! Per-message display hints derived from message adjacency.
//!
//! Two neighbouring messages belong to one visual group when they share a
//! sender id and the same clock minute (hour and minute equal, seconds and
//! date ignored). Within a group only the first message shows the sender
//! block and only the last one shows the time label.
//!
//! Hints are never stored. They are recomputed from the message slice on
//! every render and the slice is only read.

use chatmock_store::Message;
use chrono::{NaiveDateTime, Timelike};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayHints {
    /// Show avatar and name above this message.
    pub show_sender_info: bool,
    /// Print the time label next to this message.
    pub show_timestamp: bool,
    /// Extra gap before this message because the speaker changed.
    pub separator_before: bool,
}

impl Default for DisplayHints {
    fn default() -> Self {
        Self {
            show_sender_info: true,
            show_timestamp: true,
            separator_before: false,
        }
    }
}

/// Hour and minute equality; not a rolling window.
pub fn same_minute(a: &NaiveDateTime, b: &NaiveDateTime) -> bool {
    a.hour() == b.hour() && a.minute() == b.minute()
}

pub fn same_group(a: &Message, b: &Message) -> bool {
    a.sender.id == b.sender.id && same_minute(&a.timestamp, &b.timestamp)
}

/// Hints for `messages[index]`, or `None` when the index is out of range.
pub fn display_hints(messages: &[Message], index: usize) -> Option<DisplayHints> {
    let message = messages.get(index)?;
    let mut hints = DisplayHints::default();

    if let Some(prev) = index.checked_sub(1).and_then(|i| messages.get(i)) {
        hints.show_sender_info = !same_group(prev, message);
        hints.separator_before = prev.sender.id != message.sender.id;
    }

    if let Some(next) = messages.get(index + 1) {
        hints.show_timestamp = !same_group(message, next);
    }

    Some(hints)
}

/// Hints for every message, in list order.
pub fn timeline_hints(messages: &[Message]) -> Vec<DisplayHints> {
    (0..messages.len())
        .filter_map(|i| display_hints(messages, i))
        .collect()
}
