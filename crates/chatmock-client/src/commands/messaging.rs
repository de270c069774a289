use chatmock_shared::validate::{validate_form, validate_message, validate_patch};
use chatmock_shared::{MessageForm, MessageId, MessageKind};
use chatmock_store::{Message, MessageBody};
use chatmock_timeline::view::time_label;
use chatmock_timeline::{DisplayHints, TimelineView};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::Result;
use crate::events::{MessagesChangedPayload, EVENT_MESSAGES_CHANGED};
use crate::state::Session;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageDto {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: MessageKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_alt: Option<String>,
    pub sender_id: String,
    pub sender_name: String,
    pub is_user: bool,
    pub timestamp: String,
    pub time_label: String,
    pub hints: DisplayHints,
}

impl MessageDto {
    pub fn from_message(m: &Message, hints: DisplayHints) -> Self {
        let (content, image_url, image_alt) = match &m.body {
            MessageBody::Text { content } => (Some(content.clone()), None, None),
            MessageBody::Image { image_url, alt } => {
                (None, Some(image_url.clone()), Some(alt.clone()))
            }
        };
        Self {
            id: m.id.to_string(),
            kind: m.kind(),
            content,
            image_url,
            image_alt,
            sender_id: m.sender.id.to_string(),
            sender_name: m.sender.name.clone(),
            is_user: m.is_user,
            timestamp: m.timestamp.format("%Y-%m-%dT%H:%M:%S").to_string(),
            time_label: time_label(&m.timestamp),
            hints,
        }
    }
}

/// Add one message from the typed form.
pub fn add_message(session: &mut Session, form: &MessageForm) -> Result<MessageId> {
    let descriptor = validate_form(form)?;
    let id = session.conversation.add_message(&descriptor)?;
    notify(session, "added");
    Ok(id)
}

/// Add one message from a raw JSON object.
pub fn add_message_value(session: &mut Session, value: &Value) -> Result<MessageId> {
    let descriptor = validate_message(value)?;
    let id = session.conversation.add_message(&descriptor)?;
    notify(session, "added");
    Ok(id)
}

/// Apply a partial edit. Returns `false` when no message has that id.
pub fn edit_message(session: &mut Session, id: &str, patch: &Value) -> Result<bool> {
    let patch = validate_patch(patch)?;
    let id = MessageId::from(id);
    let found = session.conversation.edit_message(&id, &patch)?;
    if found {
        notify(session, "edited");
    } else {
        debug!(msg_id = %id, "Edit ignored, unknown message");
    }
    Ok(found)
}

pub fn delete_message(session: &mut Session, id: &str) -> bool {
    let id = MessageId::from(id);
    let found = session.conversation.delete_message(&id);
    if found {
        notify(session, "deleted");
    }
    found
}

pub fn clear_messages(session: &mut Session) -> usize {
    let removed = session.conversation.clear_messages();
    notify(session, "cleared");
    removed
}

/// All messages in order, each with its hints under the active skin.
pub fn list_messages(session: &Session) -> Vec<MessageDto> {
    let messages = session.conversation.messages();
    session
        .skin()
        .hints(messages)
        .into_iter()
        .zip(messages)
        .map(|(hints, m)| MessageDto::from_message(m, hints))
        .collect()
}

/// Skin view with the session's title and status bar overrides applied.
pub fn timeline_view(session: &Session) -> TimelineView<'_> {
    let mut view = TimelineView::build(session.skin(), &session.conversation);
    if let Some(ref title) = session.settings.chat_title {
        view = view.with_title(title.clone());
    }
    if let Some(ref time) = session.settings.status_time {
        view = view.with_status_time(time.clone());
    }
    view
}

pub(crate) fn notify(session: &Session, reason: &'static str) {
    session.emit(
        EVENT_MESSAGES_CHANGED,
        MessagesChangedPayload {
            count: session.conversation.len(),
            reason,
        },
    );
}
