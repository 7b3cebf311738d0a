//! Teloxide-based implementation of [`Interaction`].
//!
//! Telegram has no interaction tokens, so the response state is tracked here.
//! Private payloads are shown as a callback alert while the callback query is
//! still unanswered, since that is the only response Telegram shows to the
//! invoking user alone. Everything else becomes a chat message.

use async_trait::async_trait;
use parking_lot::Mutex;
use teloxide::prelude::*;
use teloxide::types::{ChatAction, ChatId, MessageId, ReplyParameters};
use tracing::debug;

use super::ThrottledBot;
use crate::error::{InteractionError, Result};
use crate::responder::{Interaction, MessageFlags, ReplyPayload};

#[derive(Debug, Default)]
struct ResponseState {
    replied: bool,
    deferred: bool,
    callback_answered: bool,
    last_message: Option<MessageId>,
}

/// Telegram rejects callback alerts longer than this (in characters).
pub const CALLBACK_ALERT_LIMIT: usize = 200;

/// How a payload reaches the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Alert on the pending callback query.
    CallbackAlert,
    /// Regular message in the chat.
    ChatMessage,
}

impl Delivery {
    /// Private payloads that fit in an alert use the pending callback.
    pub fn plan(payload: &ReplyPayload, callback_pending: bool) -> Self {
        let fits_alert = payload
            .content
            .as_deref()
            .is_none_or(|text| text.chars().count() <= CALLBACK_ALERT_LIMIT);

        if payload.is_private() && callback_pending && fits_alert {
            Self::CallbackAlert
        } else {
            Self::ChatMessage
        }
    }
}

/// A command message or callback query being answered.
pub struct TelegramInteraction {
    bot: ThrottledBot,
    chat_id: ChatId,
    callback_id: Option<String>,
    reply_to: Option<MessageId>,
    state: Mutex<ResponseState>,
}

impl TelegramInteraction {
    pub fn new(bot: ThrottledBot, chat_id: ChatId) -> Self {
        Self {
            bot,
            chat_id,
            callback_id: None,
            reply_to: None,
            state: Mutex::new(ResponseState::default()),
        }
    }

    /// Answer a command message; chat messages reply to it.
    pub fn from_message(bot: ThrottledBot, msg: &Message) -> Self {
        let mut interaction = Self::new(bot, msg.chat.id);
        interaction.reply_to = Some(msg.id);
        interaction
    }

    /// Answer a button press. `None` if the originating message is gone.
    pub fn from_callback_query(bot: ThrottledBot, q: &CallbackQuery) -> Option<Self> {
        let chat_id = q.message.as_ref().map(|m| m.chat().id)?;
        let mut interaction = Self::new(bot, chat_id);
        interaction.callback_id = Some(q.id.clone());
        Some(interaction)
    }

    pub fn chat_id(&self) -> ChatId {
        self.chat_id
    }

    fn pending_callback(&self) -> Option<String> {
        if self.state.lock().callback_answered {
            return None;
        }
        self.callback_id.clone()
    }

    async fn answer_callback(&self, id: String, alert: Option<String>) -> Result<()> {
        let mut request = self.bot.answer_callback_query(id);
        if let Some(text) = alert {
            request = request.text(text).show_alert(true);
        }
        request.await?;

        self.state.lock().callback_answered = true;
        Ok(())
    }

    async fn deliver(&self, payload: &ReplyPayload) -> Result<()> {
        let pending = self.pending_callback();

        if let (Delivery::CallbackAlert, Some(id)) =
            (Delivery::plan(payload, pending.is_some()), pending.clone())
        {
            debug!(chat_id = self.chat_id.0, "Delivering private reply as callback alert");
            return self.answer_callback(id, payload.content.clone()).await;
        }

        let text = payload
            .content
            .clone()
            .ok_or_else(|| InteractionError::Unavailable("reply has no content".to_string()))?;

        let mut request = self.bot.send_message(self.chat_id, text);
        if let Some(id) = self.reply_to {
            request = request.reply_parameters(ReplyParameters::new(id));
        }
        if payload.has_flags_set(MessageFlags::SUPPRESS_NOTIFICATIONS) {
            request = request.disable_notification(true);
        }
        let sent = request.await?;
        self.state.lock().last_message = Some(sent.id);

        // Stop the button spinner. The message is already out, so a stale
        // query must not turn this into a failed delivery.
        if let Some(id) = pending {
            if let Err(e) = self.answer_callback(id, None).await {
                debug!(chat_id = self.chat_id.0, "Could not acknowledge callback: {}", e);
                self.state.lock().callback_answered = true;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl Interaction for TelegramInteraction {
    fn replied(&self) -> bool {
        self.state.lock().replied
    }

    fn deferred(&self) -> bool {
        self.state.lock().deferred
    }

    async fn reply(&self, payload: &ReplyPayload) -> Result<()> {
        self.deliver(payload).await?;
        self.state.lock().replied = true;
        Ok(())
    }

    async fn follow_up(&self, payload: &ReplyPayload) -> Result<()> {
        self.deliver(payload).await
    }

    async fn edit_reply(&self, payload: &ReplyPayload) -> Result<()> {
        let last = self.state.lock().last_message;
        let Some(message_id) = last else {
            return self.deliver(payload).await;
        };

        let text = payload
            .content
            .clone()
            .ok_or_else(|| InteractionError::Unavailable("edit has no content".to_string()))?;

        self.bot
            .edit_message_text(self.chat_id, message_id, text)
            .await?;
        Ok(())
    }

    async fn defer_reply(&self, payload: &ReplyPayload) -> Result<()> {
        self.bot
            .send_chat_action(self.chat_id, ChatAction::Typing)
            .await?;

        // Private deferrals keep the callback open for an alert later.
        if !payload.is_private() {
            if let Some(id) = self.pending_callback() {
                self.answer_callback(id, None).await?;
            }
        }

        self.state.lock().deferred = true;
        Ok(())
    }
}
