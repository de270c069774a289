//! Validation of untrusted message, edit, import and profile input.
//!
//! Every check runs before the store is touched. Violations are collected in
//! rule order (time, sender flag, payload, type) rather than stopping at the
//! first one, so the UI can show them all at once.

use serde_json::{json, Map, Value};

use crate::constants::{DEFAULT_IMAGE_ALT, MIN_MESSAGES_ERROR, NOT_AN_ARRAY_ERROR};
use crate::descriptor::{
    DescriptorBody, MessageDescriptor, MessageForm, MessagePatch, ParticipantProfile, ProfileEntry,
    ProfileForm,
};
use crate::error::{FieldError, ImportError, ValidationError, ValidationErrors};
use crate::types::{ClockTime, MessageKind};

/// Validate one message descriptor given as a JSON object.
pub fn validate_message(value: &Value) -> Result<MessageDescriptor, ValidationErrors> {
    let obj = as_object(value)?;
    let mut errors = Vec::new();

    let time = match obj.get("time").and_then(Value::as_str).and_then(ClockTime::parse) {
        Some(t) => Some(t),
        None => {
            errors.push(ValidationError::time_format("time"));
            None
        }
    };

    let is_user_message = match obj.get("isUserMessage") {
        Some(Value::Bool(b)) => Some(*b),
        _ => {
            errors.push(ValidationError::not_boolean("isUserMessage"));
            None
        }
    };

    let content = optional_str(obj, "content", &mut errors);
    let image_url = optional_str(obj, "imageUrl", &mut errors);
    let image_alt = optional_str(obj, "imageAlt", &mut errors);

    let body = match message_kind(obj) {
        Some(MessageKind::Text) => match content {
            Some(c) if !c.trim().is_empty() => Some(DescriptorBody::Text {
                content: c.to_string(),
            }),
            _ => {
                push_unless_reported(&mut errors, ValidationError::content_required());
                None
            }
        },
        Some(MessageKind::Image) => match image_url {
            Some(url) if !url.is_empty() => Some(DescriptorBody::Image {
                image_url: url.to_string(),
                alt: alt_or_default(image_alt),
            }),
            _ => {
                push_unless_reported(&mut errors, ValidationError::image_required());
                None
            }
        },
        None => {
            errors.push(ValidationError::invalid_type());
            None
        }
    };

    match (time, is_user_message, body) {
        (Some(time), Some(is_user_message), Some(body)) if errors.is_empty() => {
            Ok(MessageDescriptor {
                is_user_message,
                time,
                body,
            })
        }
        _ => Err(ValidationErrors(errors)),
    }
}

/// Validate a typed form submission from the message composer.
pub fn validate_form(form: &MessageForm) -> Result<MessageDescriptor, ValidationErrors> {
    validate_message(&json!({
        "type": form.kind,
        "isUserMessage": form.is_user_message,
        "content": form.content,
        "imageUrl": form.image_url,
        "imageAlt": form.image_alt,
        "time": form.time,
    }))
}

/// Validate a partial edit. Only present fields are checked and carried over.
pub fn validate_patch(value: &Value) -> Result<MessagePatch, ValidationErrors> {
    let obj = as_object(value)?;
    let mut errors = Vec::new();
    let mut patch = MessagePatch::default();

    if let Some(raw) = present(obj, "time") {
        match raw.as_str().and_then(ClockTime::parse) {
            Some(t) => patch.time = Some(t),
            None => errors.push(ValidationError::time_format("time")),
        }
    }

    if let Some(raw) = present(obj, "isUserMessage") {
        match raw {
            Value::Bool(b) => patch.is_user_message = Some(*b),
            _ => errors.push(ValidationError::not_boolean("isUserMessage")),
        }
    }

    let content = optional_str(obj, "content", &mut errors);
    let image_url = optional_str(obj, "imageUrl", &mut errors);
    let image_alt = optional_str(obj, "imageAlt", &mut errors);

    if let Some(c) = content {
        if c.trim().is_empty() {
            errors.push(ValidationError::content_required());
        } else {
            patch.content = Some(c.to_string());
        }
    }

    if let Some(url) = image_url {
        if url.is_empty() {
            errors.push(ValidationError::image_required());
        } else {
            patch.image_url = Some(url.to_string());
        }
    }

    patch.image_alt = image_alt.map(str::to_string);

    if present(obj, "type").is_some() {
        match message_kind(obj) {
            Some(MessageKind::Text) if content.is_none() => {
                push_unless_reported(&mut errors, ValidationError::content_required());
            }
            Some(MessageKind::Image) if image_url.is_none() => {
                push_unless_reported(&mut errors, ValidationError::image_required());
            }
            Some(kind) => patch.kind = Some(kind),
            None => errors.push(ValidationError::invalid_type()),
        }
    }

    if errors.is_empty() {
        Ok(patch)
    } else {
        Err(ValidationErrors(errors))
    }
}

/// Accept a file for bulk import by extension or MIME type.
pub fn check_import_file(file_name: &str, mime_type: Option<&str>) -> Result<(), ImportError> {
    let by_name = file_name.to_ascii_lowercase().ends_with(".json");
    let by_mime = mime_type.is_some_and(|m| m.contains("json"));
    if by_name || by_mime {
        Ok(())
    } else {
        Err(ImportError::UnsupportedFile(file_name.to_string()))
    }
}

/// Parse and validate a bulk import document.
///
/// Nothing is returned unless every element is valid, so a caller can never
/// apply half of a rejected batch.
pub fn parse_bulk_import(text: &str) -> Result<Vec<MessageDescriptor>, ImportError> {
    let value: Value = serde_json::from_str(text)?;
    validate_bulk(&value)
}

/// Validate an already-parsed bulk import document.
pub fn validate_bulk(value: &Value) -> Result<Vec<MessageDescriptor>, ImportError> {
    let items = value
        .as_array()
        .ok_or_else(|| ImportError::Shape(NOT_AN_ARRAY_ERROR.to_string()))?;
    if items.is_empty() {
        return Err(ImportError::Shape(MIN_MESSAGES_ERROR.to_string()));
    }

    let mut descriptors = Vec::with_capacity(items.len());
    let mut failures = Vec::new();
    for (index, item) in items.iter().enumerate() {
        match validate_message(item) {
            Ok(d) => descriptors.push(d),
            Err(errors) => failures.extend(
                errors
                    .0
                    .into_iter()
                    .map(|error| FieldError { index, error }),
            ),
        }
    }

    if failures.is_empty() {
        Ok(descriptors)
    } else {
        Err(ImportError::Validation(failures))
    }
}

/// Validate the participant update form. Both names are required.
pub fn validate_profile(
    form: &ProfileForm,
) -> Result<(ParticipantProfile, ParticipantProfile), ValidationErrors> {
    let mut errors = Vec::new();
    let current = profile_entry(&form.current_user, "currentUser.name", &mut errors);
    let other = profile_entry(&form.other_user, "otherUser.name", &mut errors);
    match (current, other) {
        (Some(current), Some(other)) => Ok((current, other)),
        _ => Err(ValidationErrors(errors)),
    }
}

fn profile_entry(
    entry: &ProfileEntry,
    field: &str,
    errors: &mut Vec<ValidationError>,
) -> Option<ParticipantProfile> {
    let name = entry.name.trim();
    if name.is_empty() {
        errors.push(ValidationError::name_required(field));
        return None;
    }
    Some(ParticipantProfile {
        name: name.to_string(),
        avatar: entry.avatar.clone().filter(|a| !a.is_empty()),
    })
}

fn as_object(value: &Value) -> Result<&Map<String, Value>, ValidationErrors> {
    value
        .as_object()
        .ok_or_else(|| ValidationErrors(vec![ValidationError::new("message", "expected an object")]))
}

// JSON `null` counts as absent, as form libraries send it for empty inputs.
fn present<'a>(obj: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    obj.get(field).filter(|v| !v.is_null())
}

fn optional_str<'a>(
    obj: &'a Map<String, Value>,
    field: &str,
    errors: &mut Vec<ValidationError>,
) -> Option<&'a str> {
    let value = present(obj, field)?;
    let s = value.as_str();
    if s.is_none() {
        errors.push(ValidationError::not_a_string(field));
    }
    s
}

fn message_kind(obj: &Map<String, Value>) -> Option<MessageKind> {
    obj.get("type")
        .and_then(Value::as_str)
        .and_then(|s| s.parse().ok())
}

fn push_unless_reported(errors: &mut Vec<ValidationError>, error: ValidationError) {
    if !errors.iter().any(|e| e.field == error.field) {
        errors.push(error);
    }
}

fn alt_or_default(alt: Option<&str>) -> String {
    match alt {
        Some(a) if !a.is_empty() => a.to_string(),
        _ => DEFAULT_IMAGE_ALT.to_string(),
    }
}
