//! Inline button callbacks.
//!
//! Each button answers through the responder so the private, public and
//! deferred paths can be tried from a chat.

use std::time::Duration;

use interaction_responder::telegram::TelegramInteraction;
use interaction_responder::{MessageFlags, ReplyOptions, safe_defer, safe_reply};
use teloxide::prelude::*;
use tracing::debug;

use crate::bot::dispatcher::{AppState, ThrottledBot};

/// Callback data prefix for responder buttons.
pub const CALLBACK_PREFIX: &str = "reply:";

/// What a button asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Private,
    Public,
    Slow,
}

impl Action {
    pub const ALL: [Action; 3] = [Action::Private, Action::Public, Action::Slow];

    pub fn key(self) -> &'static str {
        match self {
            Self::Private => "private",
            Self::Public => "public",
            Self::Slow => "slow",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Private => "🔒 Private",
            Self::Public => "📢 Public",
            Self::Slow => "🐢 Slow",
        }
    }

    /// Parse callback data (with prefix).
    pub fn from_data(data: &str) -> Option<Self> {
        let key = data.strip_prefix(CALLBACK_PREFIX)?;
        Self::ALL.into_iter().find(|a| a.key() == key)
    }
}

/// Handle responder button presses (reply:*).
pub async fn callback_handler(
    bot: ThrottledBot,
    q: CallbackQuery,
    _state: AppState,
) -> anyhow::Result<()> {
    let Some(action) = q.data.as_deref().and_then(Action::from_data) else {
        return Ok(());
    };

    let Some(interaction) = TelegramInteraction::from_callback_query(bot, &q) else {
        debug!("Callback message no longer accessible, ignoring");
        return Ok(());
    };

    match action {
        Action::Private => {
            safe_reply(&interaction, "🔒 Only you can see this.").await;
        }
        Action::Public => {
            let text = format!("📢 {} pressed the button.", q.from.first_name);
            safe_reply(&interaction, ReplyOptions::text(text).ephemeral(false)).await;
        }
        Action::Slow => {
            let quiet = ReplyOptions::default().flags(MessageFlags::SUPPRESS_NOTIFICATIONS);
            if !safe_defer(&interaction, quiet).await {
                return Ok(());
            }

            tokio::time::sleep(Duration::from_secs(2)).await;
            safe_reply(
                &interaction,
                ReplyOptions::text("🐢 Done.").flags(MessageFlags::SUPPRESS_NOTIFICATIONS),
            )
            .await;
        }
    }

    Ok(())
}
