//! /fail command plugin.
//!
//! Lets owners check how failures reach users and the log.

use anyhow::Context;
use interaction_responder::telegram::TelegramInteraction;
use interaction_responder::{safe_error, safe_reply};
use teloxide::prelude::*;
use tracing::debug;

use crate::bot::dispatcher::{AppState, ThrottledBot};

/// Handle the /fail command.
pub async fn fail_command(
    bot: ThrottledBot,
    msg: Message,
    state: AppState,
) -> anyhow::Result<()> {
    let interaction = TelegramInteraction::from_message(bot, &msg);

    let user_id = msg.from.as_ref().map(|u| u.id.0).unwrap_or_default();
    if !state.is_owner(user_id) {
        safe_reply(&interaction, "⛔ This command is for bot owners only.").await;
        return Ok(());
    }

    if let Err(e) = simulated_failure() {
        if !safe_error(&interaction, Some(state.config.error_message.as_str()), Some(&e)).await {
            debug!("Could not notify user {} about the failure", user_id);
        }
    }

    Ok(())
}

fn simulated_failure() -> anyhow::Result<()> {
    "not-a-number"
        .parse::<u32>()
        .map(|_| ())
        .context("Simulated failure requested via /fail")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulated_failure_carries_context() {
        let err = simulated_failure().unwrap_err();
        let rendered = format!("{:?}", err);

        assert!(rendered.contains("Simulated failure"));
        assert!(rendered.contains("invalid digit"));
    }
}
