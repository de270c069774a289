use chatmock_shared::constants::DEFAULT_IMAGE_ALT;
use chatmock_shared::{DescriptorBody, MessageDescriptor, MessageId, MessageKind, MessagePatch};
use chrono::NaiveDate;
use tracing::{debug, info};

use crate::conversation::Conversation;
use crate::error::Result;
use crate::models::{Message, MessageBody, Participant};

impl Conversation {
    /// Append one validated message.
    pub fn add_message(&mut self, descriptor: &MessageDescriptor) -> Result<MessageId> {
        let date = self.message_date();
        let (current, other) = self.participants()?;
        let sender = sender_for(descriptor.is_user_message, current, other);
        let id = self.ids.next_id();
        let message = build_message(id.clone(), descriptor, sender, date);

        self.messages.push(message);
        info!(msg_id = %id, kind = descriptor.kind().as_str(), "Message added");
        Ok(id)
    }

    /// Append a validated batch in input order, as one state transition.
    ///
    /// An empty batch is accepted and changes nothing.
    pub fn add_bulk_messages(&mut self, descriptors: &[MessageDescriptor]) -> Result<Vec<MessageId>> {
        if descriptors.is_empty() {
            return Ok(Vec::new());
        }

        let date = self.message_date();
        let (current, other) = self.participants()?;
        let (current, other) = (current.clone(), other.clone());

        let batch: Vec<Message> = descriptors
            .iter()
            .map(|d| {
                let sender = sender_for(d.is_user_message, &current, &other);
                build_message(self.ids.next_id(), d, sender, date)
            })
            .collect();
        let ids: Vec<MessageId> = batch.iter().map(|m| m.id.clone()).collect();

        self.messages.extend(batch);
        info!(count = ids.len(), total = self.messages.len(), "Messages imported");
        Ok(ids)
    }

    /// Apply the present fields of `patch` to the message with `id`.
    ///
    /// Returns `Ok(false)` when no such message exists.
    pub fn edit_message(&mut self, id: &MessageId, patch: &MessagePatch) -> Result<bool> {
        let Some(pos) = self.messages.iter().position(|m| &m.id == id) else {
            debug!(msg_id = %id, "Edit ignored, message not found");
            return Ok(false);
        };

        let sender = match patch.is_user_message {
            Some(is_user) => {
                let (current, other) = self.participants()?;
                Some((is_user, sender_for(is_user, current, other)))
            }
            None => None,
        };

        let message = &mut self.messages[pos];
        if let Some((is_user, sender)) = sender {
            message.is_user = is_user;
            message.sender = sender;
        }
        if let Some(time) = patch.time {
            message.timestamp = message.timestamp.date().and_time(time.to_naive_time());
        }
        apply_body_patch(&mut message.body, patch);

        info!(msg_id = %id, "Message edited");
        Ok(true)
    }

    /// Remove the message with `id`. Returns whether anything was removed.
    pub fn delete_message(&mut self, id: &MessageId) -> bool {
        let before = self.messages.len();
        self.messages.retain(|m| &m.id != id);
        let removed = self.messages.len() != before;
        if removed {
            info!(msg_id = %id, "Message deleted");
        } else {
            debug!(msg_id = %id, "Delete ignored, message not found");
        }
        removed
    }

    /// Drop every message, keeping the participants. Returns how many were removed.
    pub fn clear_messages(&mut self) -> usize {
        let removed = self.messages.len();
        self.messages.clear();
        info!(removed, "Messages cleared");
        removed
    }
}

fn sender_for(is_user: bool, current: &Participant, other: &Participant) -> Participant {
    if is_user {
        current.clone()
    } else {
        other.clone()
    }
}

fn build_message(
    id: MessageId,
    descriptor: &MessageDescriptor,
    sender: Participant,
    date: NaiveDate,
) -> Message {
    let body = match &descriptor.body {
        DescriptorBody::Text { content } => MessageBody::Text {
            content: content.clone(),
        },
        DescriptorBody::Image { image_url, alt } => MessageBody::Image {
            image_url: image_url.clone(),
            alt: alt.clone(),
        },
    };

    Message {
        id,
        sender,
        timestamp: date.and_time(descriptor.time.to_naive_time()),
        is_user: descriptor.is_user_message,
        body,
    }
}

fn alt_or_default(alt: Option<&String>) -> String {
    match alt {
        Some(a) if !a.is_empty() => a.clone(),
        _ => DEFAULT_IMAGE_ALT.to_string(),
    }
}

// Fields that do not fit the target kind are ignored. A kind switch only
// happens when the new kind's payload is present.
fn apply_body_patch(body: &mut MessageBody, patch: &MessagePatch) {
    let target = patch.kind.unwrap_or_else(|| body.kind());

    if target != body.kind() {
        let switched = match target {
            MessageKind::Text => patch.content.as_ref().map(|content| MessageBody::Text {
                content: content.clone(),
            }),
            MessageKind::Image => patch.image_url.as_ref().map(|image_url| MessageBody::Image {
                image_url: image_url.clone(),
                alt: alt_or_default(patch.image_alt.as_ref()),
            }),
        };
        if let Some(switched) = switched {
            *body = switched;
        }
        return;
    }

    match body {
        MessageBody::Text { content } => {
            if let Some(new) = &patch.content {
                *content = new.clone();
            }
        }
        MessageBody::Image { image_url, alt } => {
            if let Some(new) = &patch.image_url {
                *image_url = new.clone();
            }
            if patch.image_alt.is_some() {
                *alt = alt_or_default(patch.image_alt.as_ref());
            }
        }
    }
}
