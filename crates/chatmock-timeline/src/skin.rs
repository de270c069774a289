use std::fmt;
use std::str::FromStr;

use chatmock_store::Message;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::hints::DisplayHints;
use crate::policy;

/// Target messaging app whose chrome the mockup reproduces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatSkin {
    #[default]
    KakaoTalk,
    Instagram,
    Telegram,
    Discord,
    Apple,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown chat skin '{0}' (expected kakaotalk, instagram, telegram, discord or apple)")]
pub struct ParseSkinError(pub String);

impl ChatSkin {
    pub const ALL: [ChatSkin; 5] = [
        Self::KakaoTalk,
        Self::Instagram,
        Self::Telegram,
        Self::Discord,
        Self::Apple,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Self::KakaoTalk => "kakaotalk",
            Self::Instagram => "instagram",
            Self::Telegram => "telegram",
            Self::Discord => "discord",
            Self::Apple => "apple",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::KakaoTalk => "KakaoTalk",
            Self::Instagram => "Instagram DM",
            Self::Telegram => "Telegram",
            Self::Discord => "Discord",
            Self::Apple => "Apple Messages",
        }
    }

    /// Clock shown in the phone status bar. Discord mocks a desktop window
    /// and has none.
    pub fn status_bar_time(&self) -> Option<&'static str> {
        match self {
            Self::KakaoTalk => Some("4:24"),
            Self::Instagram | Self::Telegram => Some("9:41"),
            Self::Apple => Some("8:41"),
            Self::Discord => None,
        }
    }

    /// Mockup size in CSS pixels, before export scaling.
    pub fn canvas_size(&self) -> (u32, u32) {
        match self {
            Self::Discord => (400, 600),
            _ => (375, 844),
        }
    }

    /// Background colour of the message area as RGB.
    pub fn background(&self) -> [u8; 3] {
        match self {
            Self::KakaoTalk => [0xDB, 0xEA, 0xFE],
            Self::Instagram => [0x00, 0x00, 0x00],
            Self::Telegram => [0xDC, 0xF8, 0xC6],
            Self::Discord => [0x1F, 0x29, 0x37],
            Self::Apple => [0xF2, 0xF2, 0xF7],
        }
    }

    /// Display hints under this skin's grouping policy.
    ///
    /// Apple Messages draws day headers and bubble tails instead of sender
    /// blocks and per-message time labels, see [`policy::day_sections`].
    pub fn hints(&self, messages: &[Message]) -> Vec<DisplayHints> {
        match self {
            Self::KakaoTalk | Self::Instagram => policy::exact_minute_hints(messages),
            Self::Telegram => policy::timestamp_only_hints(messages),
            Self::Discord => policy::discord_hints(messages),
            Self::Apple => vec![
                DisplayHints {
                    show_sender_info: false,
                    show_timestamp: false,
                    separator_before: false,
                };
                messages.len()
            ],
        }
    }
}

impl fmt::Display for ChatSkin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for ChatSkin {
    type Err = ParseSkinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|skin| skin.slug() == wanted)
            .ok_or_else(|| ParseSkinError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hints::fixtures::{at, msg};

    #[test]
    fn parse_round_trips_slugs() {
        for skin in ChatSkin::ALL {
            assert_eq!(skin.slug().parse::<ChatSkin>(), Ok(skin));
        }
        assert_eq!(" Discord ".parse::<ChatSkin>(), Ok(ChatSkin::Discord));
        assert!("whatsapp".parse::<ChatSkin>().is_err());
    }

    #[test]
    fn default_is_kakaotalk() {
        assert_eq!(ChatSkin::default(), ChatSkin::KakaoTalk);
        assert_eq!(serde_json::to_value(ChatSkin::KakaoTalk).unwrap(), "kakaotalk");
    }

    #[test]
    fn skins_dispatch_to_their_policy() {
        let messages = vec![msg("1", "me", at(10, 0, 0)), msg("2", "me", at(10, 3, 0))];

        let kakao = ChatSkin::KakaoTalk.hints(&messages);
        assert!(kakao[1].show_sender_info);

        let discord = ChatSkin::Discord.hints(&messages);
        assert!(!discord[1].show_sender_info);

        let apple = ChatSkin::Apple.hints(&messages);
        assert_eq!(apple.len(), 2);
        assert!(apple.iter().all(|h| !h.show_sender_info));
    }

    #[test]
    fn discord_has_no_status_bar() {
        assert!(ChatSkin::Discord.status_bar_time().is_none());
        assert_eq!(ChatSkin::Discord.canvas_size(), (400, 600));
        assert_eq!(ChatSkin::KakaoTalk.status_bar_time(), Some("4:24"));
    }
}
