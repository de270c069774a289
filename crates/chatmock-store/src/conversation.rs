//! The in-memory conversation handle.
//!
//! A [`Conversation`] owns the two participants and the ordered message list
//! of one session. It is created by the caller and passed around by
//! reference; there is no shared global instance. Message operations live in
//! `messages.rs`, participant operations in `participants.rs`.

use chatmock_shared::MessageId;
use chrono::{Local, NaiveDate};

use crate::error::{Result, StoreError};
use crate::ids::IdGenerator;
use crate::models::{Message, Participant};

/// Participants and messages of one mockup conversation.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    pub(crate) current: Option<Participant>,
    pub(crate) other: Option<Participant>,
    pub(crate) messages: Vec<Message>,
    pub(crate) ids: IdGenerator,
    date: Option<NaiveDate>,
}

impl Conversation {
    /// Empty conversation without participants. Messages cannot be added
    /// until [`Conversation::update_participants`] has been called.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_participants(current: Participant, other: Participant) -> Result<Self> {
        let mut conversation = Self::new();
        conversation.update_participants(current, other)?;
        Ok(conversation)
    }

    /// Conversation between the conventional `"me"` and `"other"` ids.
    pub fn with_default_participants() -> Self {
        Self {
            current: Some(Participant::default_current()),
            other: Some(Participant::default_other()),
            ..Self::default()
        }
    }

    /// Pin the calendar date used for new message timestamps.
    ///
    /// Without a pinned date, today's local date is used.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn message(&self, id: &MessageId) -> Option<&Message> {
        self.messages.iter().find(|m| &m.id == id)
    }

    pub fn current_user(&self) -> Option<&Participant> {
        self.current.as_ref()
    }

    pub fn other_user(&self) -> Option<&Participant> {
        self.other.as_ref()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Both participants, or the precondition error every write path shares.
    pub fn participants(&self) -> Result<(&Participant, &Participant)> {
        match (&self.current, &self.other) {
            (Some(current), Some(other)) => Ok((current, other)),
            _ => Err(StoreError::MissingParticipants),
        }
    }

    pub(crate) fn message_date(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| Local::now().date_naive())
    }
}
