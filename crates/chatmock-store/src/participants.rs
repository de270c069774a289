use tracing::info;

use crate::conversation::Conversation;
use crate::error::{Result, StoreError};
use crate::models::Participant;

impl Conversation {
    /// Replace both participants and re-derive every message's sender.
    ///
    /// Each message keeps its `is_user` flag; only `sender` follows it. This is
    /// the one path that changes senders outside an explicit message edit.
    pub fn update_participants(&mut self, current: Participant, other: Participant) -> Result<()> {
        if current.id == other.id {
            return Err(StoreError::DuplicateParticipantId(current.id));
        }

        for message in &mut self.messages {
            message.sender = if message.is_user {
                current.clone()
            } else {
                other.clone()
            };
        }

        info!(
            current = %current.id,
            other = %other.id,
            messages = self.messages.len(),
            "Participants updated"
        );
        self.current = Some(current);
        self.other = Some(other);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chatmock_shared::{ClockTime, MessageDescriptor};

    use super::*;

    fn seeded() -> Conversation {
        let mut c = Conversation::with_default_participants();
        let t = ClockTime::new(10, 0).unwrap();
        c.add_bulk_messages(&[
            MessageDescriptor::text(true, t, "one"),
            MessageDescriptor::text(false, t, "two"),
            MessageDescriptor::image(true, t, "a.png", "a"),
        ])
        .unwrap();
        c
    }

    #[test]
    fn senders_follow_is_user_flags() {
        let mut c = seeded();
        let flags_before: Vec<_> = c.messages().iter().map(|m| m.is_user).collect();

        let a2 = Participant::new("alice", "Alice").with_avatar("alice.png");
        let b2 = Participant::new("bob", "Bob");
        c.update_participants(a2.clone(), b2.clone()).unwrap();

        for m in c.messages() {
            if m.is_user {
                assert_eq!(m.sender, a2);
            } else {
                assert_eq!(m.sender, b2);
            }
        }
        let flags_after: Vec<_> = c.messages().iter().map(|m| m.is_user).collect();
        assert_eq!(flags_before, flags_after);
        assert_eq!(c.current_user(), Some(&a2));
        assert_eq!(c.other_user(), Some(&b2));
    }

    #[test]
    fn duplicate_ids_leave_state_untouched() {
        let mut c = seeded();
        let before = c.messages().to_vec();

        let err = c
            .update_participants(Participant::new("x", "A"), Participant::new("x", "B"))
            .unwrap_err();
        assert_eq!(err, StoreError::DuplicateParticipantId("x".into()));
        assert_eq!(c.messages(), before.as_slice());
        assert_eq!(c.current_user().unwrap().id.as_str(), "me");
    }
}
