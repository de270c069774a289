//! # chatmock-timeline
//!
//! Timeline grouping engine and skin view models.
//!
//! - [`hints`]: the shared exact-minute grouping rules.
//! - [`policy`]: named per-skin overrides (Discord window, Telegram,
//!   Apple day sections).
//! - [`skin`] and [`view`]: what a renderer needs to draw one app's chrome.

pub mod hints;
pub mod policy;
pub mod skin;
pub mod view;

pub use hints::{display_hints, timeline_hints, DisplayHints};
pub use skin::{ChatSkin, ParseSkinError};
pub use view::{Side, TimelineRow, TimelineView, ViewSection};
