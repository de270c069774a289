use chatmock_shared::{ClockTime, ValidationError, ValidationErrors};
use chatmock_timeline::ChatSkin;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::SessionConfig;
use crate::error::Result;
use crate::events::EVENT_SETTINGS_CHANGED;
use crate::state::Session;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSettings {
    pub skin: ChatSkin,
    /// Header title; the other participant's name when unset.
    #[serde(default)]
    pub chat_title: Option<String>,
    /// Status bar clock text, e.g. `9:41`.
    #[serde(default)]
    pub status_time: Option<String>,
}

impl SessionSettings {
    pub fn from_config(config: &SessionConfig) -> Self {
        Self {
            skin: config.skin,
            chat_title: config.chat_title.clone(),
            status_time: None,
        }
    }
}

pub fn get_settings(session: &Session) -> SessionSettings {
    session.settings.clone()
}

/// Replace all settings. Blank overrides are cleared and a status time must
/// look like a clock (`H:MM` or `HH:MM`).
pub fn update_settings(session: &mut Session, settings: SessionSettings) -> Result<SessionSettings> {
    let status_time = non_blank(settings.status_time);
    if let Some(ref time) = status_time {
        if ClockTime::parse(time).is_none() {
            return Err(ValidationErrors(vec![ValidationError::time_format("statusTime")]).into());
        }
    }

    session.settings = SessionSettings {
        skin: settings.skin,
        chat_title: non_blank(settings.chat_title),
        status_time,
    };

    info!(skin = %session.settings.skin, "Settings updated");
    session.emit(EVENT_SETTINGS_CHANGED, &session.settings);
    Ok(session.settings.clone())
}

/// Switch the active skin by slug (`kakaotalk`, `discord`, ...).
pub fn set_skin(session: &mut Session, skin: &str) -> Result<ChatSkin> {
    let skin: ChatSkin = skin.parse()?;
    let settings = SessionSettings {
        skin,
        ..session.settings.clone()
    };
    update_settings(session, settings)?;
    Ok(skin)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use crate::events::recorder::RecordingSink;

    #[test]
    fn defaults_follow_config() {
        let config = SessionConfig {
            skin: ChatSkin::Telegram,
            chat_title: Some("Family".into()),
            ..SessionConfig::default()
        };
        let session = Session::new(config);
        let settings = get_settings(&session);
        assert_eq!(settings.skin, ChatSkin::Telegram);
        assert_eq!(settings.chat_title.as_deref(), Some("Family"));
        assert!(settings.status_time.is_none());
    }

    #[test]
    fn set_skin_parses_slug_and_notifies() {
        let sink = RecordingSink::default();
        let mut session = Session::default().with_event_sink(sink.clone());

        assert_eq!(set_skin(&mut session, "apple").unwrap(), ChatSkin::Apple);
        assert_eq!(session.skin(), ChatSkin::Apple);
        assert_eq!(sink.names(), [EVENT_SETTINGS_CHANGED]);

        let err = set_skin(&mut session, "myspace").unwrap_err();
        assert!(matches!(err, ClientError::Skin(_)));
        assert_eq!(session.skin(), ChatSkin::Apple);
    }

    #[test]
    fn update_rejects_bad_status_time() {
        let mut session = Session::default();
        let err = update_settings(
            &mut session,
            SessionSettings {
                status_time: Some("25:00".into()),
                ..SessionSettings::default()
            },
        )
        .unwrap_err();
        match err {
            ClientError::Validation(errors) => assert!(errors.has_field("statusTime")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn update_clears_blank_overrides() {
        let mut session = Session::default();
        let settings = update_settings(
            &mut session,
            SessionSettings {
                skin: ChatSkin::Instagram,
                chat_title: Some("   ".into()),
                status_time: Some(" 9:41 ".into()),
            },
        )
        .unwrap();
        assert!(settings.chat_title.is_none());
        assert_eq!(settings.status_time.as_deref(), Some("9:41"));
    }
}
