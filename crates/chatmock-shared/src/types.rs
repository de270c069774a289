use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;
use uuid::Uuid;

// Participant identity, stable for the lifetime of a conversation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ParticipantId(pub String);

impl ParticipantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Random id for participants created without a conventional id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ParticipantId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct MessageId(pub String);

impl MessageId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MessageId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Text,
    Image,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown message type '{0}' (expected text or image)")]
pub struct ParseKindError(pub String);

impl FromStr for MessageKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "image" => Ok(Self::Image),
            _ => Err(ParseKindError(s.to_string())),
        }
    }
}

/// Wall-clock hour and minute as entered in the `HH:MM` time picker.
///
/// The hour may be written with one or two digits (`9:05`, `09:05`); the
/// minute always takes two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }

    pub fn parse(s: &str) -> Option<Self> {
        let (h, m) = s.split_once(':')?;
        if h.is_empty() || h.len() > 2 || m.len() != 2 {
            return None;
        }
        if !h.bytes().all(|b| b.is_ascii_digit()) || !m.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Self::new(h.parse().ok()?, m.parse().ok()?)
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn to_naive_time(self) -> NaiveTime {
        NaiveTime::from_hms_opt(u32::from(self.hour), u32::from(self.minute), 0)
            .unwrap_or(NaiveTime::MIN)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for ClockTime {
    type Err = crate::error::ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| crate::error::ValidationError::time_format("time"))
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).ok_or_else(|| serde::de::Error::custom(crate::constants::TIME_FORMAT_ERROR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_time_boundaries() {
        assert_eq!(ClockTime::parse("23:59"), ClockTime::new(23, 59));
        assert_eq!(ClockTime::parse("00:00"), ClockTime::new(0, 0));
        assert_eq!(ClockTime::parse("9:05"), ClockTime::new(9, 5));
        assert!(ClockTime::parse("24:00").is_none());
        assert!(ClockTime::parse("12:60").is_none());
        assert!(ClockTime::parse("9:5").is_none());
        assert!(ClockTime::parse("123:00").is_none());
        assert!(ClockTime::parse("+1:00").is_none());
        assert!(ClockTime::parse("12:00:00").is_none());
        assert!(ClockTime::parse("").is_none());
    }

    #[test]
    fn test_clock_time_display_pads() {
        let t = ClockTime::parse("7:03").unwrap();
        assert_eq!(t.to_string(), "07:03");
        assert_eq!(t.to_naive_time(), NaiveTime::from_hms_opt(7, 3, 0).unwrap());
    }

    #[test]
    fn test_message_kind_from_str() {
        assert_eq!("text".parse::<MessageKind>(), Ok(MessageKind::Text));
        assert_eq!("image".parse::<MessageKind>(), Ok(MessageKind::Image));
        assert_eq!(
            "Text".parse::<MessageKind>(),
            Err(ParseKindError("Text".to_string()))
        );
    }

    #[test]
    fn test_clock_time_serde_as_string() {
        let t = ClockTime::new(9, 5).unwrap();
        let value = serde_json::to_value(t).unwrap();
        assert_eq!(value, "09:05");
        assert_eq!(serde_json::from_value::<ClockTime>(value).unwrap(), t);

        let err = serde_json::from_str::<ClockTime>("\"24:00\"").unwrap_err();
        assert!(err.to_string().contains("Invalid time format"));
        assert!(serde_json::from_str::<ClockTime>("930").is_err());
    }

    #[test]
    fn test_generated_participant_ids_differ() {
        assert_ne!(ParticipantId::generate(), ParticipantId::generate());
    }
}
