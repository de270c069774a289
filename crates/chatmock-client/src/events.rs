use std::error::Error;

use serde::Serialize;
use serde_json::Value;

pub const EVENT_MESSAGES_CHANGED: &str = "messages-changed";
pub const EVENT_PARTICIPANTS_CHANGED: &str = "participants-changed";
pub const EVENT_SETTINGS_CHANGED: &str = "settings-changed";
pub const EVENT_EXPORT_FINISHED: &str = "export-finished";

pub type EmitError = Box<dyn Error + Send + Sync>;

/// Where session notifications go: a UI bridge, a test recorder, or the log.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: &str, payload: Value) -> Result<(), EmitError>;
}

/// Default sink; writes every event to the `tracing` log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&self, event: &str, payload: Value) -> Result<(), EmitError> {
        tracing::debug!(event, %payload, "Event");
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagesChangedPayload {
    pub count: usize,
    pub reason: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantsChangedPayload {
    pub current_user: String,
    pub other_user: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportFinishedPayload {
    pub path: String,
    pub bytes: usize,
}

pub fn emit_event<S: Serialize>(sink: &dyn EventSink, event: &str, payload: S) {
    let result = serde_json::to_value(payload)
        .map_err(EmitError::from)
        .and_then(|value| sink.emit(event, value));
    if let Err(e) = result {
        tracing::error!(event, error = %e, "Failed to emit event");
    }
}

#[cfg(test)]
pub(crate) mod recorder {
    use std::sync::{Arc, Mutex};

    use super::*;

    /// Keeps every emitted event for assertions.
    #[derive(Debug, Clone, Default)]
    pub struct RecordingSink(pub Arc<Mutex<Vec<(String, Value)>>>);

    impl RecordingSink {
        pub fn names(&self) -> Vec<String> {
            self.0.lock().unwrap().iter().map(|(n, _)| n.clone()).collect()
        }

        pub fn last(&self) -> Option<(String, Value)> {
            self.0.lock().unwrap().last().cloned()
        }
    }

    impl EventSink for RecordingSink {
        fn emit(&self, event: &str, payload: Value) -> Result<(), EmitError> {
            self.0.lock().unwrap().push((event.to_string(), payload));
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::recorder::RecordingSink;
    use super::*;

    struct FailingSink;

    impl EventSink for FailingSink {
        fn emit(&self, _event: &str, _payload: Value) -> Result<(), EmitError> {
            Err("bridge closed".into())
        }
    }

    #[test]
    fn emit_serializes_payload() {
        let sink = RecordingSink::default();
        emit_event(
            &sink,
            EVENT_MESSAGES_CHANGED,
            MessagesChangedPayload {
                count: 3,
                reason: "added",
            },
        );
        let (name, payload) = sink.last().unwrap();
        assert_eq!(name, EVENT_MESSAGES_CHANGED);
        assert_eq!(payload["count"], 3);
        assert_eq!(payload["reason"], "added");
    }

    #[test]
    fn emit_failure_is_only_logged() {
        emit_event(&FailingSink, EVENT_SETTINGS_CHANGED, ());
    }
}
