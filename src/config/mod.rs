//! Configuration for the responder bot.
//!
//! Loads configuration from environment variables.

use std::env;

use anyhow::Context;
use interaction_responder::DEFAULT_ERROR_MESSAGE;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    // Telegram
    pub bot_token: String,

    /// Text shown to users when a command fails.
    pub error_message: String,

    /// Owner user IDs (comma-separated)
    /// Only these users may run /fail.
    pub owner_ids: Vec<u64>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let bot_token = env::var("BOT_TOKEN").context("BOT_TOKEN must be set")?;

        let error_message = env::var("ERROR_MESSAGE")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string());

        Ok(Self {
            bot_token,
            error_message,
            owner_ids: parse_owner_ids(&env::var("OWNER_IDS").unwrap_or_default()),
        })
    }

    /// Check if a user is a bot owner.
    pub fn is_owner(&self, user_id: u64) -> bool {
        self.owner_ids.contains(&user_id)
    }
}

fn parse_owner_ids(raw: &str) -> Vec<u64> {
    raw.split(',')
        .filter_map(|s| s.trim().parse::<u64>().ok())
        .collect()
}
