//! Telegram transport for the responder.

mod interaction;

use teloxide::adaptors::Throttle;
use teloxide::Bot;

pub use interaction::{Delivery, TelegramInteraction};

/// Bot type with Throttle adaptor for automatic rate limiting.
pub type ThrottledBot = Throttle<Bot>;
