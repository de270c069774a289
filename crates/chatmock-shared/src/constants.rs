/// Application name
pub const APP_NAME: &str = "chatmock";

/// Conventional id of the participant the mockup is drawn for
pub const DEFAULT_CURRENT_USER_ID: &str = "me";

/// Conventional id of the conversation partner
pub const DEFAULT_OTHER_USER_ID: &str = "other";

/// Alt text used when an image message is added without a description
pub const DEFAULT_IMAGE_ALT: &str = "Uploaded image";

// Validation messages shown to the user verbatim.
pub const TIME_FORMAT_ERROR: &str = "Invalid time format. Use HH:MM";
pub const BOOLEAN_SENDER_ERROR: &str = "isUserMessage must be a boolean";
pub const CONTENT_REQUIRED_ERROR: &str = "message content is required";
pub const IMAGE_REQUIRED_ERROR: &str = "image is required";
pub const MESSAGE_TYPE_ERROR: &str = "type must be \"text\" or \"image\"";
pub const NAME_REQUIRED_ERROR: &str = "name is required";
pub const MIN_MESSAGES_ERROR: &str = "At least one message is required";
pub const NOT_AN_ARRAY_ERROR: &str = "expected a JSON array of messages";

/// Example bulk import document, as documented in the import dialog.
pub const SAMPLE_IMPORT: &str = r#"[
  {
    "type": "text",
    "content": "Hello world!",
    "isUserMessage": true,
    "time": "14:30"
  },
  {
    "type": "image",
    "imageUrl": "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==",
    "imageAlt": "Photo description",
    "isUserMessage": false,
    "time": "14:35"
  }
]"#;
