//! Ping command plugin.
//!
//! Measures and displays Telegram API latency.

use std::time::Instant;

use interaction_responder::telegram::TelegramInteraction;
use interaction_responder::{ReplyOptions, safe_defer, safe_error, safe_reply};
use teloxide::prelude::*;

use crate::bot::dispatcher::{AppState, ThrottledBot};

/// Handle the /ping command - measures Telegram API latency.
pub async fn ping_command(
    bot: ThrottledBot,
    msg: Message,
    state: AppState,
) -> anyhow::Result<()> {
    let interaction = TelegramInteraction::from_message(bot.clone(), &msg);
    safe_defer(&interaction, ReplyOptions::default()).await;

    // Measure time to call getMe (lightweight API call)
    let start = Instant::now();
    if let Err(e) = bot.get_me().await {
        let cause = anyhow::Error::from(e);
        safe_error(&interaction, Some(state.config.error_message.as_str()), Some(&cause)).await;
        return Ok(());
    }
    let ms = start.elapsed().as_millis();

    let text = format!("{} Pong! {}ms", latency_emoji(ms), ms);
    safe_reply(&interaction, ReplyOptions::text(text)).await;

    Ok(())
}

fn latency_emoji(ms: u128) -> &'static str {
    if ms < 100 {
        "🟢"
    } else if ms < 300 {
        "🟡"
    } else {
        "🔴"
    }
}
