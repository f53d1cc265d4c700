//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod error;
pub mod key_action;
pub mod note;

// Re-export for convenience
pub use error::{
    AppError, InputError, InvalidSequenceNumber, MalformedRecord, PersistError, StoreError,
};
pub use key_action::KeyAction;
pub use note::{
    accept_body, current_origin, format_timestamp, AcceptedBody, Note, NumberedNote,
    SequenceNumber, DEFAULT_MAX_NOTE_LEN, TIMESTAMP_FORMAT,
};
