//! Interaction Responder - demonstration bot
//!
//! A Telegram bot whose handlers answer exclusively through the safe
//! responder helpers.
//!
//! ## Architecture
//!
//! - `config` - Environment configuration
//! - `bot` - Dispatcher and runtime (with Throttle for API rate limiting)
//! - `plugins` - Command and callback handlers

mod bot;
mod config;
mod plugins;

use teloxide::adaptors::throttle::Limits;
use teloxide::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file first (before anything else)
    dotenvy::dotenv().ok();

    // If RUST_LOG is not set, default to "info" level for our crates
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("interaction_responder=info,teloxide=warn")
    });

    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting responder bot...");

    let config = Config::from_env()?;
    info!("Configuration loaded successfully");

    if config.owner_ids.is_empty() {
        info!("No owner IDs configured (OWNER_IDS is empty)");
    } else {
        info!("Bot owners: {:?}", config.owner_ids);
    }

    let bot = Bot::new(&config.bot_token).throttle(Limits::default());
    info!("Bot initialized with rate limiting (Throttle)");

    let me = bot.get_me().await?;
    info!("Bot username: @{}", me.username());

    let dispatcher = bot::build_dispatcher(bot, config);
    bot::run(dispatcher).await;

    Ok(())
}
