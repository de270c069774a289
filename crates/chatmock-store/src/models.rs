//! Domain model structs held by a [`crate::Conversation`].
//!
//! Every struct derives `Serialize` and `Deserialize` so it can be handed
//! directly to a skin renderer. The serialized shape of [`Message`] is the
//! flat `{ id, type, content | imageUrl + alt, sender, timestamp, isUser }`
//! object the renderers consume.

use chatmock_shared::constants::{DEFAULT_CURRENT_USER_ID, DEFAULT_OTHER_USER_ID};
use chatmock_shared::{MessageId, MessageKind, ParticipantId, ParticipantProfile};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Participant
// ---------------------------------------------------------------------------

/// One of the two identities taking part in a conversation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Participant {
    /// Stable identity; senders are compared by id only.
    pub id: ParticipantId,
    /// Display name shown next to the avatar.
    pub name: String,
    /// Optional avatar as a data URI or path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Participant {
    pub fn new(id: impl Into<ParticipantId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            avatar: None,
        }
    }

    /// Participant with a freshly generated id.
    pub fn generate(name: impl Into<String>) -> Self {
        Self::new(ParticipantId::generate(), name)
    }

    /// Default "current user" with an empty name.
    pub fn default_current() -> Self {
        Self::new(DEFAULT_CURRENT_USER_ID, "")
    }

    /// Default "other user" with an empty name.
    pub fn default_other() -> Self {
        Self::new(DEFAULT_OTHER_USER_ID, "")
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// Same identity, new name and avatar.
    pub fn with_profile(&self, profile: &ParticipantProfile) -> Self {
        Self {
            id: self.id.clone(),
            name: profile.name.clone(),
            avatar: profile.avatar.clone(),
        }
    }
}

impl From<&str> for Participant {
    fn from(id: &str) -> Self {
        Self::new(id, id)
    }
}

// ---------------------------------------------------------------------------
// Message
// ---------------------------------------------------------------------------

/// Payload of a message; exactly one per message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MessageBody {
    Text {
        content: String,
    },
    Image {
        #[serde(rename = "imageUrl")]
        image_url: String,
        alt: String,
    },
}

impl MessageBody {
    pub fn kind(&self) -> MessageKind {
        match self {
            Self::Text { .. } => MessageKind::Text,
            Self::Image { .. } => MessageKind::Image,
        }
    }
}

/// A single chat message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Unique within the conversation, assigned at creation.
    pub id: MessageId,
    /// Sender snapshot; rewritten whenever the participants change.
    pub sender: Participant,
    /// Local wall-clock time shown next to the bubble.
    pub timestamp: NaiveDateTime,
    /// Whether the current user sent the message. Source of truth for `sender`.
    pub is_user: bool,
    #[serde(flatten)]
    pub body: MessageBody,
}

impl Message {
    pub fn kind(&self) -> MessageKind {
        self.body.kind()
    }

    pub fn content(&self) -> Option<&str> {
        match &self.body {
            MessageBody::Text { content } => Some(content),
            MessageBody::Image { .. } => None,
        }
    }

    pub fn image_url(&self) -> Option<&str> {
        match &self.body {
            MessageBody::Image { image_url, .. } => Some(image_url),
            MessageBody::Text { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn generated_participants_have_distinct_ids() {
        let a = Participant::generate("Alice");
        let b = Participant::generate("Alice");
        assert_ne!(a.id, b.id);
        assert_eq!(a.name, "Alice");
        assert!(a.avatar.is_none());
    }

    #[test]
    fn text_message_serializes_flat() {
        let msg = Message {
            id: MessageId::from("1"),
            sender: Participant::new("me", "Alice"),
            timestamp: at(14, 30),
            is_user: true,
            body: MessageBody::Text {
                content: "Hello!".into(),
            },
        };

        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(value["type"], "text");
        assert_eq!(value["content"], "Hello!");
        assert_eq!(value["isUser"], true);
        assert_eq!(value["sender"]["id"], "me");
        assert!(value["sender"].get("avatar").is_none());
    }

    #[test]
    fn image_message_round_trips() {
        let msg = Message {
            id: MessageId::from("2"),
            sender: Participant::new("other", "Bob").with_avatar("bob.png"),
            timestamp: at(15, 0),
            is_user: false,
            body: MessageBody::Image {
                image_url: "data:image/png;base64,AAAA".into(),
                alt: "desc".into(),
            },
        };

        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"imageUrl\""));
        let back: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(back, msg);
        assert_eq!(back.kind(), MessageKind::Image);
        assert!(back.content().is_none());
    }

    #[test]
    fn with_profile_keeps_identity() {
        let p = Participant::default_current();
        let renamed = p.with_profile(&ParticipantProfile {
            name: "Alice".into(),
            avatar: Some("a.png".into()),
        });
        assert_eq!(renamed.id, p.id);
        assert_eq!(renamed.name, "Alice");
        assert_eq!(renamed.avatar.as_deref(), Some("a.png"));
    }
}
