//! Error types for platform calls made on behalf of an interaction.

use thiserror::Error;

/// A platform call (reply, follow-up, edit or defer) that did not go through.
///
/// The responder treats every variant the same way; the split only exists so
/// the logged message says where the failure came from.
#[derive(Error, Debug)]
pub enum InteractionError {
    #[error("Telegram request failed: {0}")]
    Request(#[from] teloxide::RequestError),

    #[error("Interaction cannot be answered: {0}")]
    Unavailable(String),

    #[error("Platform error: {0}")]
    Platform(String),
}

pub type Result<T> = std::result::Result<T, InteractionError>;
