//! Reply options and their normalization.
//!
//! Callers hand the responder either a bare string or a [`ReplyOptions`]
//! record. Both are resolved into a single [`ReplyPayload`] before anything is
//! sent, and the legacy `ephemeral` switch never survives that step.

use std::ops::{BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

/// Message flag bit-set, using the platform's bit values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageFlags(u64);

impl MessageFlags {
    /// Hide link embeds.
    pub const SUPPRESS_EMBEDS: Self = Self(1 << 2);

    /// Only the invoking user can see the response.
    pub const EPHEMERAL: Self = Self(1 << 6);

    /// Deliver without a push notification.
    pub const SUPPRESS_NOTIFICATIONS: Self = Self(1 << 12);

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u64 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True if every bit of `other` is set.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for MessageFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for MessageFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Options accepted by the responder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<MessageFlags>,

    /// Deprecated. Converted into [`MessageFlags::EPHEMERAL`] on normalization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ephemeral: Option<bool>,
}

impl ReplyOptions {
    /// Options carrying only a text body.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Default::default()
        }
    }

    /// Set the text body (builder pattern).
    #[must_use]
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Set the flags (builder pattern).
    #[must_use]
    pub fn flags(mut self, flags: MessageFlags) -> Self {
        self.flags = Some(flags);
        self
    }

    /// Set the legacy ephemeral switch.
    #[must_use]
    pub fn ephemeral(mut self, ephemeral: bool) -> Self {
        self.ephemeral = Some(ephemeral);
        self
    }

    /// Resolve into the payload handed to the platform.
    ///
    /// `ephemeral: true` only takes effect when no flags are set; existing
    /// flags are kept as they are and the two are never merged.
    pub fn normalize(self) -> ReplyPayload {
        let flags = match self.ephemeral {
            Some(true) if !has_flags(self.flags) => Some(MessageFlags::EPHEMERAL),
            _ => self.flags,
        };

        ReplyPayload {
            content: self.content,
            flags,
        }
    }
}

/// Canonical options as sent to the platform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<MessageFlags>,
}

impl ReplyPayload {
    /// Private text payload.
    pub fn private(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            flags: Some(MessageFlags::EPHEMERAL),
        }
    }

    /// True if any flag bit is set.
    pub fn has_flags(&self) -> bool {
        has_flags(self.flags)
    }

    pub fn is_private(&self) -> bool {
        self.has_flags_set(MessageFlags::EPHEMERAL)
    }

    pub fn has_flags_set(&self, flags: MessageFlags) -> bool {
        self.flags.is_some_and(|f| f.contains(flags))
    }
}

/// Either a bare string or a full options record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyInput {
    /// Shorthand for a private reply with this text.
    Text(String),
    Options(ReplyOptions),
}

impl ReplyInput {
    pub fn into_payload(self) -> ReplyPayload {
        match self {
            Self::Text(content) => ReplyPayload::private(content),
            Self::Options(options) => options.normalize(),
        }
    }
}

impl From<&str> for ReplyInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for ReplyInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<ReplyOptions> for ReplyInput {
    fn from(options: ReplyOptions) -> Self {
        Self::Options(options)
    }
}

// Unset and zero flags both count as "no flags".
fn has_flags(flags: Option<MessageFlags>) -> bool {
    flags.is_some_and(|f| !f.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_input_is_private() {
        let payload = ReplyInput::from("hi").into_payload();

        assert_eq!(payload.content.as_deref(), Some("hi"));
        assert_eq!(payload.flags, Some(MessageFlags::EPHEMERAL));
    }

    #[test]
    fn test_text_matches_explicit_private_options() {
        let from_text = ReplyInput::from("same".to_string()).into_payload();
        let from_options = ReplyInput::from(
            ReplyOptions::text("same").flags(MessageFlags::EPHEMERAL),
        )
        .into_payload();

        assert_eq!(from_text, from_options);
    }

    #[test]
    fn test_ephemeral_true_sets_private_bit() {
        let payload = ReplyOptions::text("x").ephemeral(true).normalize();
        assert_eq!(payload.flags, Some(MessageFlags::EPHEMERAL));
        assert!(payload.is_private());
    }

    #[test]
    fn test_ephemeral_true_with_zero_flags_sets_private_bit() {
        let payload = ReplyOptions::text("x")
            .flags(MessageFlags::empty())
            .ephemeral(true)
            .normalize();
        assert_eq!(payload.flags, Some(MessageFlags::EPHEMERAL));
    }

    #[test]
    fn test_ephemeral_false_adds_nothing() {
        let payload = ReplyOptions::text("x").ephemeral(false).normalize();
        assert_eq!(payload.flags, None);
        assert!(!payload.is_private());
    }

    #[test]
    fn test_ephemeral_true_keeps_existing_flags() {
        let payload = ReplyOptions::text("x")
            .flags(MessageFlags::SUPPRESS_EMBEDS)
            .ephemeral(true)
            .normalize();

        // Not merged.
        assert_eq!(payload.flags, Some(MessageFlags::SUPPRESS_EMBEDS));
        assert!(!payload.is_private());
    }

    #[test]
    fn test_payload_never_serializes_ephemeral() {
        let options: ReplyOptions =
            serde_json::from_str(r#"{"content":"hello","ephemeral":true}"#).unwrap();
        let json = serde_json::to_value(options.normalize()).unwrap();

        assert_eq!(json, serde_json::json!({ "content": "hello", "flags": 64 }));

        let options: ReplyOptions =
            serde_json::from_str(r#"{"content":"hello","ephemeral":false}"#).unwrap();
        let json = serde_json::to_value(options.normalize()).unwrap();

        assert_eq!(json, serde_json::json!({ "content": "hello" }));
    }

    #[test]
    fn test_flags_bit_ops() {
        let flags = MessageFlags::EPHEMERAL | MessageFlags::SUPPRESS_NOTIFICATIONS;

        assert!(flags.contains(MessageFlags::EPHEMERAL));
        assert!(flags.contains(MessageFlags::SUPPRESS_NOTIFICATIONS));
        assert!(!flags.contains(MessageFlags::SUPPRESS_EMBEDS));
        assert_eq!(flags.bits(), 64 | 4096);
        assert!(MessageFlags::default().is_empty());
    }
}
