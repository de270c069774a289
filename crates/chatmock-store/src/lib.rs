//! # chatmock-store
//!
//! In-memory message store for one mockup conversation.
//!
//! A [`Conversation`] is the authoritative holder of the two participants and
//! the insertion-ordered message list. Every mutation is synchronous and
//! takes `&mut self`, so a read after a write always sees the whole change.
//! Input is expected to be validated already (see `chatmock_shared::validate`);
//! the store only enforces its own preconditions.

pub mod conversation;
pub mod ids;
pub mod messages;
pub mod models;
pub mod participants;

mod error;

pub use conversation::Conversation;
pub use error::{Result, StoreError};
pub use models::*;
