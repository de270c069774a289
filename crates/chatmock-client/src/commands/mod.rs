//! Session command handlers.
//!
//! Each sub-module groups related commands by domain. Every command takes the
//! caller's [`crate::state::Session`]; writes validate first and only then
//! touch the conversation.

pub mod export;
pub mod import;
pub mod messaging;
pub mod profile;
pub mod settings;
