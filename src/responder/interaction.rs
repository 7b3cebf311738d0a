//! The interaction abstraction the responder talks to.
//!
//! [`Interaction`] is transport-agnostic; [`crate::telegram::TelegramInteraction`]
//! implements it via teloxide.

use async_trait::async_trait;

use super::options::ReplyPayload;
use crate::error::Result;

/// One inbound event that can be answered.
///
/// `replied` and `deferred` reflect the response state as the platform sees
/// it. The responder only reads them and never synchronizes on them, so
/// concurrent callers on the same interaction can race.
#[async_trait]
pub trait Interaction: Send + Sync {
    /// An initial reply has been sent.
    fn replied(&self) -> bool;

    /// The interaction was acknowledged without content.
    fn deferred(&self) -> bool;

    /// Sends the initial reply.
    async fn reply(&self, payload: &ReplyPayload) -> Result<()>;

    /// Sends an additional message after the initial reply.
    async fn follow_up(&self, payload: &ReplyPayload) -> Result<()>;

    /// Replaces the deferred (or initial) response.
    async fn edit_reply(&self, payload: &ReplyPayload) -> Result<()>;

    /// Acknowledges the interaction, extending the response window.
    async fn defer_reply(&self, payload: &ReplyPayload) -> Result<()>;
}

/// Which operation answers an interaction in a given state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyRoute {
    Reply,
    EditReply,
    FollowUp,
}

impl ReplyRoute {
    /// `replied` wins over `deferred` when both are set.
    pub fn select(replied: bool, deferred: bool) -> Self {
        if replied {
            Self::FollowUp
        } else if deferred {
            Self::EditReply
        } else {
            Self::Reply
        }
    }

    pub fn for_interaction<I: Interaction + ?Sized>(interaction: &I) -> Self {
        Self::select(interaction.replied(), interaction.deferred())
    }
}
