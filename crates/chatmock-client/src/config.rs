//! Session configuration loaded from environment variables.
//!
//! Every setting has a default so a session can start with zero
//! configuration.

use std::path::PathBuf;

use chatmock_timeline::ChatSkin;

pub const DEFAULT_EXPORT_SCALE: u32 = 4;
pub const MAX_EXPORT_SCALE: u32 = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Skin selected when the session starts.
    /// Env: `CHATMOCK_SKIN`
    /// Default: `kakaotalk`
    pub skin: ChatSkin,

    /// Directory exported PNG files are written to.
    /// Env: `CHATMOCK_EXPORT_DIR`
    /// Default: `.`
    pub export_dir: PathBuf,

    /// Pixel ratio applied when exporting (1 to 8).
    /// Env: `CHATMOCK_EXPORT_SCALE`
    /// Default: `4`
    pub export_scale: u32,

    /// Header title instead of the other participant's name.
    /// Env: `CHATMOCK_CHAT_TITLE`
    pub chat_title: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            skin: ChatSkin::default(),
            export_dir: PathBuf::from("."),
            export_scale: DEFAULT_EXPORT_SCALE,
            chat_title: None,
        }
    }
}

impl SessionConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(value) = var("CHATMOCK_SKIN") {
            match value.parse::<ChatSkin>() {
                Ok(skin) => config.skin = skin,
                Err(e) => tracing::warn!(error = %e, "Invalid CHATMOCK_SKIN, using default"),
            }
        }

        if let Some(dir) = var("CHATMOCK_EXPORT_DIR") {
            if !dir.trim().is_empty() {
                config.export_dir = PathBuf::from(dir);
            }
        }

        if let Some(value) = var("CHATMOCK_EXPORT_SCALE") {
            match value.trim().parse::<u32>() {
                Ok(n) if (1..=MAX_EXPORT_SCALE).contains(&n) => config.export_scale = n,
                _ => tracing::warn!(
                    value = %value,
                    "Invalid CHATMOCK_EXPORT_SCALE (expected 1-{MAX_EXPORT_SCALE}), using default"
                ),
            }
        }

        if let Some(title) = var("CHATMOCK_CHAT_TITLE") {
            if !title.trim().is_empty() {
                config.chat_title = Some(title);
            }
        }

        config
    }
}
