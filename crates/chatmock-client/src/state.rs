//! Session state shared by every command.
//!
//! The caller owns one [`Session`] per open mockup and passes it by
//! reference into the command functions. There is no global instance.

use chatmock_store::Conversation;
use chatmock_timeline::ChatSkin;
use serde::Serialize;

use crate::commands::settings::SessionSettings;
use crate::config::SessionConfig;
use crate::events::{emit_event, EventSink, TracingSink};

pub struct Session {
    /// Participants and messages. All edits go through the commands.
    pub(crate) conversation: Conversation,

    /// Skin and header overrides chosen by the user.
    pub(crate) settings: SessionSettings,

    /// Startup configuration (export directory, scale).
    pub(crate) config: SessionConfig,

    events: Box<dyn EventSink>,
}

impl Session {
    /// Fresh session with the default `"me"` / `"other"` participants.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            conversation: Conversation::with_default_participants(),
            settings: SessionSettings::from_config(&config),
            config,
            events: Box::new(TracingSink),
        }
    }

    pub fn from_env() -> Self {
        Self::new(SessionConfig::from_env())
    }

    /// Replace the conversation, e.g. one with a pinned date.
    pub fn with_conversation(mut self, conversation: Conversation) -> Self {
        self.conversation = conversation;
        self
    }

    pub fn with_event_sink(mut self, sink: impl EventSink + 'static) -> Self {
        self.events = Box::new(sink);
        self
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn skin(&self) -> ChatSkin {
        self.settings.skin
    }

    pub(crate) fn emit<S: Serialize>(&self, event: &str, payload: S) {
        emit_event(self.events.as_ref(), event, payload);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
