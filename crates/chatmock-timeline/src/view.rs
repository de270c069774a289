//! Read-only view model handed to a skin renderer.
//!
//! A [`TimelineView`] borrows the conversation and pairs each message with its
//! hints, side and preformatted labels. Building one never mutates the store,
//! so a renderer can rebuild it on every frame.

use chatmock_store::{Conversation, Message};
use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::trace;

use crate::hints::DisplayHints;
use crate::policy::day_sections;
use crate::skin::ChatSkin;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Sent by the current user, drawn on the right.
    Outgoing,
    Incoming,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineRow<'a> {
    pub message: &'a Message,
    pub side: Side,
    pub hints: DisplayHints,
    /// Bubble tail. Apple uses its own side-change rule; every other skin
    /// draws it on the last bubble of a group.
    pub show_tail: bool,
    pub time_label: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewSection<'a> {
    pub header: Option<String>,
    pub rows: Vec<TimelineRow<'a>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineView<'a> {
    pub skin: ChatSkin,
    pub title: String,
    pub status_time: Option<String>,
    pub sections: Vec<ViewSection<'a>>,
}

impl<'a> TimelineView<'a> {
    /// Lay out `conversation` for `skin`. The title defaults to the other
    /// participant's name.
    pub fn build(skin: ChatSkin, conversation: &'a Conversation) -> Self {
        let messages = conversation.messages();
        let hints = skin.hints(messages);

        let sections = match skin {
            ChatSkin::Apple => day_sections(messages)
                .into_iter()
                .map(|section| ViewSection {
                    header: Some(day_header(&section.opened_at)),
                    rows: section
                        .entries
                        .iter()
                        .map(|e| row(&messages[e.index], hints[e.index], e.show_tail))
                        .collect(),
                })
                .collect(),
            _ => {
                let rows: Vec<TimelineRow<'a>> = messages
                    .iter()
                    .zip(hints.iter().copied())
                    .map(|(m, h)| row(m, h, h.show_timestamp))
                    .collect();
                let header = match skin {
                    ChatSkin::Telegram => Some("Today".to_string()),
                    _ => None,
                };
                vec![ViewSection { header, rows }]
            }
        };

        trace!(skin = %skin, messages = messages.len(), "Timeline view built");

        Self {
            skin,
            title: conversation
                .other_user()
                .map(|p| p.name.clone())
                .unwrap_or_default(),
            status_time: skin.status_bar_time().map(str::to_string),
            sections,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_status_time(mut self, time: impl Into<String>) -> Self {
        if self.status_time.is_some() {
            self.status_time = Some(time.into());
        }
        self
    }

    pub fn rows(&self) -> impl Iterator<Item = &TimelineRow<'a>> {
        self.sections.iter().flat_map(|s| s.rows.iter())
    }
}

/// Time label next to a bubble, e.g. `2:30 PM`.
pub fn time_label(timestamp: &NaiveDateTime) -> String {
    timestamp.format("%-I:%M %p").to_string()
}

/// Apple-style section header, e.g. `Wed, May 1 at 10:00 AM`.
pub fn day_header(timestamp: &NaiveDateTime) -> String {
    timestamp.format("%a, %b %-d at %-I:%M %p").to_string()
}

fn row(message: &Message, hints: DisplayHints, show_tail: bool) -> TimelineRow<'_> {
    TimelineRow {
        message,
        side: if message.is_user {
            Side::Outgoing
        } else {
            Side::Incoming
        },
        hints,
        show_tail,
        time_label: time_label(&message.timestamp),
    }
}
