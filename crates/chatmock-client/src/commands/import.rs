//! Bulk import of message lists from JSON documents.
//!
//! A batch is validated completely before the store is touched: either every
//! element is appended in order, or nothing changes and every failing element
//! is reported.

use std::path::Path;

use chatmock_shared::constants::SAMPLE_IMPORT;
use chatmock_shared::validate::{check_import_file, parse_bulk_import};
use chatmock_shared::MessageId;
use serde::Serialize;
use tracing::warn;

use crate::commands::messaging::notify;
use crate::error::Result;
use crate::state::Session;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    pub imported: usize,
    pub message_ids: Vec<MessageId>,
}

/// Validate and append a JSON array of message descriptors.
pub fn import_json(session: &mut Session, text: &str) -> Result<ImportSummary> {
    let descriptors = parse_bulk_import(text).map_err(|e| {
        warn!(error = %e, "Import rejected");
        e
    })?;
    let message_ids = session.conversation.add_bulk_messages(&descriptors)?;

    notify(session, "imported");

    Ok(ImportSummary {
        imported: message_ids.len(),
        message_ids,
    })
}

/// Read a `.json` file (or one whose MIME type mentions JSON) and import it.
pub async fn import_file(
    session: &mut Session,
    path: impl AsRef<Path>,
    mime_type: Option<&str>,
) -> Result<ImportSummary> {
    let path = path.as_ref();
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    check_import_file(file_name, mime_type)?;

    let text = tokio::fs::read_to_string(path).await?;
    import_json(session, &text)
}

/// Load the documented two-message example.
pub fn import_sample(session: &mut Session) -> Result<ImportSummary> {
    import_json(session, SAMPLE_IMPORT)
}

#[cfg(test)]
mod tests {
    use chatmock_shared::ImportError;
    use chatmock_store::Conversation;
    use serde_json::json;

    use super::*;
    use crate::error::ClientError;

    fn text(content: &str, time: &str) -> serde_json::Value {
        json!({ "type": "text", "content": content, "isUserMessage": true, "time": time })
    }

    #[test]
    fn partial_batch_is_rejected_whole() {
        let mut session = Session::default();
        import_json(&mut session, &json!([text("keep", "10:00")]).to_string()).unwrap();

        let doc = json!([
            text("ok", "10:01"),
            { "type": "text", "content": "", "isUserMessage": true, "time": "10:02" }
        ]);
        let err = import_json(&mut session, &doc.to_string()).unwrap_err();

        let ClientError::Import(ImportError::Validation(failures)) = err else {
            panic!("expected validation failure");
        };
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].index, 1);
        assert_eq!(failures[0].error.field, "content");
        assert_eq!(session.conversation().len(), 1);
    }

    #[test]
    fn valid_batch_appends_in_order() {
        let mut session = Session::default();
        let doc = json!([text("one", "10:00"), text("two", "10:00")]);
        let summary = import_json(&mut session, &doc.to_string()).unwrap();

        assert_eq!(summary.imported, 2);
        let contents: Vec<_> = session
            .conversation()
            .messages()
            .iter()
            .filter_map(|m| m.content())
            .collect();
        assert_eq!(contents, ["one", "two"]);
    }

    #[test]
    fn empty_array_is_rejected() {
        let mut session = Session::default();
        let err = import_json(&mut session, "[]").unwrap_err();
        assert!(err.to_string().contains("At least one message is required"));
        assert!(session.conversation().is_empty());
    }

    #[test]
    fn fifty_messages_get_distinct_ids() {
        let mut session = Session::default();
        let doc: Vec<_> = (0..50).map(|i| text(&format!("m{i}"), "12:00")).collect();
        let summary = import_json(&mut session, &json!(doc).to_string()).unwrap();

        let mut ids = summary.message_ids.clone();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn not_json_is_reported_as_such() {
        let mut session = Session::default();
        let err = import_json(&mut session, "{ not json").unwrap_err();
        assert!(matches!(err, ClientError::Import(ImportError::InvalidJson(_))));
    }

    #[test]
    fn missing_participants_block_import() {
        let mut session = Session::default().with_conversation(Conversation::new());
        let err = import_sample(&mut session).unwrap_err();
        assert!(matches!(err, ClientError::Store(_)));
    }

    #[test]
    fn sample_imports_cleanly() {
        let mut session = Session::default();
        assert_eq!(import_sample(&mut session).unwrap().imported, 2);
        let url = session.conversation().messages()[1].image_url().unwrap();
        assert!(url.starts_with("data:image/png"));
    }

    #[tokio::test]
    async fn import_file_reads_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chat.json");
        tokio::fs::write(&path, SAMPLE_IMPORT).await.unwrap();

        let mut session = Session::default();
        let summary = import_file(&mut session, &path, None).await.unwrap();
        assert_eq!(summary.imported, 2);
    }

    #[tokio::test]
    async fn import_file_accepts_json_mime() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.txt");
        tokio::fs::write(&path, SAMPLE_IMPORT).await.unwrap();

        let mut session = Session::default();
        assert!(import_file(&mut session, &path, Some("application/json")).await.is_ok());
    }

    #[tokio::test]
    async fn import_file_rejects_other_files_before_reading() {
        let mut session = Session::default();
        let err = import_file(&mut session, "/does/not/exist/notes.txt", Some("text/plain"))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Import(ImportError::UnsupportedFile(_))));

        let err = import_file(&mut session, "/does/not/exist/chat.json", None)
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Io(_)));
    }
}
