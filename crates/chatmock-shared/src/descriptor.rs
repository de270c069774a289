//! Input shapes accepted from the message form, the edit dialog, the bulk
//! import document and the profile form.
//!
//! Raw inputs (`MessageForm`, `ProfileForm`, JSON values) are turned into the
//! validated shapes (`MessageDescriptor`, `MessagePatch`,
//! `ParticipantProfile`) by [`crate::validate`].

use serde::{Deserialize, Serialize};

use crate::types::{ClockTime, MessageKind};

/// Payload of a validated message descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptorBody {
    Text { content: String },
    Image { image_url: String, alt: String },
}

/// A validated request to add one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDescriptor {
    /// `true` when the current user sent the message.
    pub is_user_message: bool,
    pub time: ClockTime,
    pub body: DescriptorBody,
}

impl MessageDescriptor {
    pub fn text(is_user_message: bool, time: ClockTime, content: impl Into<String>) -> Self {
        Self {
            is_user_message,
            time,
            body: DescriptorBody::Text {
                content: content.into(),
            },
        }
    }

    pub fn image(
        is_user_message: bool,
        time: ClockTime,
        image_url: impl Into<String>,
        alt: impl Into<String>,
    ) -> Self {
        Self {
            is_user_message,
            time,
            body: DescriptorBody::Image {
                image_url: image_url.into(),
                alt: alt.into(),
            },
        }
    }

    pub fn kind(&self) -> MessageKind {
        match self.body {
            DescriptorBody::Text { .. } => MessageKind::Text,
            DescriptorBody::Image { .. } => MessageKind::Image,
        }
    }
}

/// Fields to change on an existing message. `None` leaves a field as is.
///
/// `kind` switches the message between text and image; the payload field of
/// the new kind must then be present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessagePatch {
    pub is_user_message: Option<bool>,
    pub time: Option<ClockTime>,
    pub kind: Option<MessageKind>,
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub image_alt: Option<String>,
}

impl MessagePatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Message form as submitted by the UI widgets, before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageForm {
    #[serde(rename = "type")]
    pub kind: String,
    pub is_user_message: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_alt: Option<String>,
    pub time: String,
}

/// One side of the profile form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileEntry {
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Participant update contract: `{ currentUser, otherUser }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileForm {
    pub current_user: ProfileEntry,
    pub other_user: ProfileEntry,
}

/// A validated participant name and avatar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantProfile {
    pub name: String,
    pub avatar: Option<String>,
}
