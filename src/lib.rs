//! Interaction Responder
//!
//! Safe reply helpers for chat bot interactions.
//!
//! ## Modules
//!
//! - `responder` - `safe_reply`, `safe_error`, `safe_defer` and reply options
//! - `telegram` - Teloxide-backed [`responder::Interaction`]
//! - `error` - Platform call errors

pub mod error;
pub mod responder;
pub mod telegram;

pub use error::InteractionError;
pub use responder::{
    DEFAULT_ERROR_MESSAGE, Interaction, MessageFlags, ReplyInput, ReplyOptions, ReplyPayload,
    safe_defer, safe_error, safe_reply,
};
