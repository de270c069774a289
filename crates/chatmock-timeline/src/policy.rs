//! Skin-specific grouping policies.
//!
//! Each skin picks one of these by name. Only [`exact_minute_hints`] is the
//! shared contract; the others are presentation overrides and never change
//! the core rules in [`crate::hints`].

use chatmock_store::Message;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::hints::{timeline_hints, DisplayHints};

/// Discord folds follow-up messages from one author into a block for five minutes.
pub const DISCORD_GROUP_WINDOW_SECS: i64 = 5 * 60;

/// Same-sender, same-minute grouping (KakaoTalk, Instagram).
pub fn exact_minute_hints(messages: &[Message]) -> Vec<DisplayHints> {
    timeline_hints(messages)
}

/// Sender block hidden while the same author keeps posting within `window`
/// of the previous message. Time labels stay on every message and there is
/// no speaker-change gap (Discord).
pub fn rolling_window_hints(messages: &[Message], window: Duration) -> Vec<DisplayHints> {
    messages
        .iter()
        .enumerate()
        .map(|(i, message)| {
            let grouped = i
                .checked_sub(1)
                .and_then(|p| messages.get(p))
                .is_some_and(|prev| {
                    let elapsed = message.timestamp - prev.timestamp;
                    prev.sender.id == message.sender.id
                        && elapsed >= Duration::zero()
                        && elapsed < window
                });
            DisplayHints {
                show_sender_info: !grouped,
                show_timestamp: true,
                separator_before: false,
            }
        })
        .collect()
}

/// [`rolling_window_hints`] with the Discord window.
pub fn discord_hints(messages: &[Message]) -> Vec<DisplayHints> {
    rolling_window_hints(messages, Duration::seconds(DISCORD_GROUP_WINDOW_SECS))
}

/// No sender blocks or gaps; time labels follow the exact-minute rule (Telegram).
pub fn timestamp_only_hints(messages: &[Message]) -> Vec<DisplayHints> {
    timeline_hints(messages)
        .into_iter()
        .map(|h| DisplayHints {
            show_sender_info: false,
            separator_before: false,
            ..h
        })
        .collect()
}

/// A run of consecutive messages sent on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySection {
    pub date: NaiveDate,
    /// Timestamp of the first message, used for the section header.
    pub opened_at: NaiveDateTime,
    pub entries: Vec<SectionEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionEntry {
    /// Index into the message list.
    pub index: usize,
    /// Draw the bubble tail: last in the section or the side changes next.
    pub show_tail: bool,
}

/// Split the list into day sections (Apple Messages).
///
/// Sections follow list order; a day that reappears later opens a new one.
pub fn day_sections(messages: &[Message]) -> Vec<DaySection> {
    let mut sections: Vec<DaySection> = Vec::new();

    for (index, message) in messages.iter().enumerate() {
        let date = message.timestamp.date();
        match sections.last_mut() {
            Some(section) if section.date == date => section.entries.push(SectionEntry {
                index,
                show_tail: false,
            }),
            _ => sections.push(DaySection {
                date,
                opened_at: message.timestamp,
                entries: vec![SectionEntry {
                    index,
                    show_tail: false,
                }],
            }),
        }
    }

    for section in &mut sections {
        let count = section.entries.len();
        for pos in 0..count {
            let is_last = pos + 1 == count;
            let side_changes = !is_last && {
                let here = &messages[section.entries[pos].index];
                let next = &messages[section.entries[pos + 1].index];
                here.is_user != next.is_user
            };
            section.entries[pos].show_tail = is_last || side_changes;
        }
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hints::fixtures::{at, msg};
    use chrono::NaiveDate;

    #[test]
    fn exact_minute_matches_core() {
        let messages = vec![msg("1", "me", at(10, 0, 0)), msg("2", "me", at(10, 0, 30))];
        assert_eq!(exact_minute_hints(&messages), timeline_hints(&messages));
    }

    #[test]
    fn discord_groups_within_five_minutes() {
        let messages = vec![
            msg("1", "me", at(10, 0, 0)),
            msg("2", "me", at(10, 4, 59)),
            msg("3", "me", at(10, 9, 59)),
            msg("4", "other", at(10, 10, 0)),
            msg("5", "me", at(10, 10, 30)),
        ];
        let hints = discord_hints(&messages);
        let senders: Vec<_> = hints.iter().map(|h| h.show_sender_info).collect();
        assert_eq!(senders, [true, false, true, true, true]);
        assert!(hints.iter().all(|h| h.show_timestamp && !h.separator_before));
    }

    #[test]
    fn rolling_window_ignores_backwards_time() {
        let messages = vec![msg("1", "me", at(10, 5, 0)), msg("2", "me", at(10, 4, 0))];
        let hints = rolling_window_hints(&messages, Duration::minutes(5));
        assert!(hints[1].show_sender_info);
    }

    #[test]
    fn telegram_only_keeps_timestamp_rule() {
        let messages = vec![
            msg("1", "other", at(9, 41, 0)),
            msg("2", "other", at(9, 41, 20)),
            msg("3", "me", at(9, 42, 0)),
        ];
        let hints = timestamp_only_hints(&messages);
        assert!(hints.iter().all(|h| !h.show_sender_info && !h.separator_before));
        let stamps: Vec<_> = hints.iter().map(|h| h.show_timestamp).collect();
        assert_eq!(stamps, [false, true, true]);
    }

    #[test]
    fn day_sections_and_tails() {
        let next_day = NaiveDate::from_ymd_opt(2024, 5, 2)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        let messages = vec![
            msg("1", "me", at(10, 0, 0)),
            msg("2", "me", at(10, 1, 0)),
            msg("3", "other", at(10, 2, 0)),
            msg("4", "other", next_day),
        ];

        let sections = day_sections(&messages);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].opened_at, at(10, 0, 0));

        let tails: Vec<_> = sections[0].entries.iter().map(|e| e.show_tail).collect();
        assert_eq!(tails, [false, true, true]);
        assert_eq!(
            sections[1].entries,
            vec![SectionEntry {
                index: 3,
                show_tail: true
            }]
        );
    }

    #[test]
    fn day_sections_empty() {
        assert!(day_sections(&[]).is_empty());
    }
}
