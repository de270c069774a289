//! # chatmock-shared
//!
//! Types, constants and input validation shared by every chatmock crate.
//! Nothing here holds state: the store, the timeline engine and the client
//! session all build on these definitions.

pub mod constants;
pub mod descriptor;
pub mod error;
pub mod types;
pub mod validate;

pub use descriptor::{
    DescriptorBody, MessageDescriptor, MessageForm, MessagePatch, ParticipantProfile, ProfileEntry,
    ProfileForm,
};
pub use error::{FieldError, ImportError, ValidationError, ValidationErrors};
pub use types::{ClockTime, MessageId, MessageKind, ParseKindError, ParticipantId};
