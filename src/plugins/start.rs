//! /start command plugin.
//!
//! Sends a welcome message with buttons that exercise each reply path.

use interaction_responder::safe_error;
use interaction_responder::telegram::TelegramInteraction;
use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use super::buttons::{Action, CALLBACK_PREFIX};
use crate::bot::dispatcher::{AppState, ThrottledBot};

/// Handle the /start command.
pub async fn start_handler(
    bot: ThrottledBot,
    msg: Message,
    state: AppState,
) -> anyhow::Result<()> {
    let chat_id = msg.chat.id;

    let welcome_text = "Hi! 👋\n\n\
        Press a button to see how replies are delivered:\n\
        • Private - only you see it\n\
        • Public - posted in the chat\n\
        • Slow - acknowledged first, answered later";

    let keyboard = InlineKeyboardMarkup::new(vec![
        Action::ALL
            .iter()
            .map(|action| {
                InlineKeyboardButton::callback(
                    action.label(),
                    format!("{}{}", CALLBACK_PREFIX, action.key()),
                )
            })
            .collect::<Vec<_>>(),
    ]);

    let sent = bot
        .send_message(chat_id, welcome_text)
        .reply_markup(keyboard)
        .await;

    if let Err(e) = sent {
        let cause = anyhow::Error::from(e);
        let interaction = TelegramInteraction::from_message(bot, &msg);
        safe_error(&interaction, Some(state.config.error_message.as_str()), Some(&cause)).await;
    }

    Ok(())
}
