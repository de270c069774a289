use chatmock_shared::ParticipantId;
use thiserror::Error;

/// Errors produced by the store layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A message was added or re-assigned before both participants exist.
    #[error("Both participants must be set before adding or editing messages")]
    MissingParticipants,

    /// The two participants of a conversation must be distinguishable.
    #[error("Participants must have distinct ids (both are '{0}')")]
    DuplicateParticipantId(ParticipantId),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StoreError>;
