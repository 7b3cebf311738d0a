//! Safe interaction responses.
//!
//! Command handlers answer through these helpers instead of calling the
//! interaction directly. They pick the operation that fits the interaction's
//! current state and never fail: a response that cannot be delivered (expired
//! token, dismissed UI, network error) is logged and reported as `false`.

pub mod interaction;
pub mod options;

use tracing::{debug, error};

pub use interaction::{Interaction, ReplyRoute};
pub use options::{MessageFlags, ReplyInput, ReplyOptions, ReplyPayload};

/// Text shown to the user when no error message is given.
pub const DEFAULT_ERROR_MESSAGE: &str = "❌ An error occurred";

/// Reply to an interaction in whatever state it is in.
///
/// Already replied interactions get a follow-up, deferred ones get their
/// deferred response edited, fresh ones get the initial reply. A bare string
/// is sent as a private reply.
pub async fn safe_reply<I>(interaction: &I, options: impl Into<ReplyInput>) -> bool
where
    I: Interaction + ?Sized,
{
    let payload = options.into().into_payload();
    let route = ReplyRoute::for_interaction(interaction);
    debug!(?route, private = payload.is_private(), "Sending interaction response");

    let result = match route {
        ReplyRoute::FollowUp => interaction.follow_up(&payload).await,
        ReplyRoute::EditReply => interaction.edit_reply(&payload).await,
        ReplyRoute::Reply => interaction.reply(&payload).await,
    };

    match result {
        Ok(()) => true,
        Err(e) => {
            error!("[SafeReply] Failed to send interaction response: {}", e);
            false
        }
    }
}

/// Send a private error message.
///
/// Falls back to [`DEFAULT_ERROR_MESSAGE`] when `message` is `None`. The full
/// `cause` is logged before the reply is attempted.
pub async fn safe_error<I>(
    interaction: &I,
    message: Option<&str>,
    cause: Option<&anyhow::Error>,
) -> bool
where
    I: Interaction + ?Sized,
{
    let message = message.unwrap_or(DEFAULT_ERROR_MESSAGE);

    if let Some(cause) = cause {
        error!("[Error] {}: {:?}", message, cause);
    }

    safe_reply(
        interaction,
        ReplyOptions::text(message).flags(MessageFlags::EPHEMERAL),
    )
    .await
}

/// Acknowledge an interaction without content yet.
///
/// Does nothing and returns `true` if the interaction was already deferred or
/// replied to. Deferrals are private unless `options` sets flags.
pub async fn safe_defer<I>(interaction: &I, options: ReplyOptions) -> bool
where
    I: Interaction + ?Sized,
{
    if interaction.deferred() || interaction.replied() {
        debug!("Interaction already handled, skipping defer");
        return true;
    }

    let mut payload = options.normalize();
    if !payload.has_flags() {
        payload.flags = Some(MessageFlags::EPHEMERAL);
    }

    match interaction.defer_reply(&payload).await {
        Ok(()) => true,
        Err(e) => {
            error!("[SafeDefer] Failed to defer interaction: {}", e);
            false
        }
    }
}
