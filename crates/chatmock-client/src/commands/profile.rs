use chatmock_shared::validate::validate_profile;
use chatmock_shared::ProfileForm;
use chatmock_store::Participant;
use serde::Serialize;

use crate::error::Result;
use crate::events::{ParticipantsChangedPayload, EVENT_PARTICIPANTS_CHANGED};
use crate::state::Session;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilesDto {
    pub current_user: Participant,
    pub other_user: Participant,
}

pub fn get_profiles(session: &Session) -> Option<ProfilesDto> {
    let (current, other) = session.conversation.participants().ok()?;
    Some(ProfilesDto {
        current_user: current.clone(),
        other_user: other.clone(),
    })
}

/// Rename both participants and set or clear their avatars.
///
/// Existing ids are kept, so every message keeps its side and picks up the
/// new name.
pub fn update_profiles(session: &mut Session, form: &ProfileForm) -> Result<ProfilesDto> {
    let (current_profile, other_profile) = validate_profile(form)?;

    let current = session
        .conversation
        .current_user()
        .cloned()
        .unwrap_or_else(Participant::default_current)
        .with_profile(&current_profile);
    let other = session
        .conversation
        .other_user()
        .cloned()
        .unwrap_or_else(Participant::default_other)
        .with_profile(&other_profile);

    replace(session, current, other)
}

/// Back to the default empty-named `"me"` and `"other"` participants.
pub fn reset_profiles(session: &mut Session) -> Result<ProfilesDto> {
    replace(session, Participant::default_current(), Participant::default_other())
}

fn replace(session: &mut Session, current: Participant, other: Participant) -> Result<ProfilesDto> {
    session
        .conversation
        .update_participants(current.clone(), other.clone())?;

    session.emit(
        EVENT_PARTICIPANTS_CHANGED,
        ParticipantsChangedPayload {
            current_user: current.name.clone(),
            other_user: other.name.clone(),
        },
    );

    Ok(ProfilesDto {
        current_user: current,
        other_user: other,
    })
}
