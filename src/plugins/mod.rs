//! Plugin system for command handlers.
//!
//! Add new plugins by:
//! 1. Creating a new file in this directory
//! 2. Adding `pub mod your_plugin;` below
//! 3. Adding the handler to `command_handler()`

pub mod buttons;
pub mod fail;
pub mod ping;
pub mod start;

use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

/// All bot commands.
#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Available commands:")]
pub enum Command {
    #[command(description = "Start the bot")]
    Start,

    #[command(description = "Measure API latency")]
    Ping,

    #[command(description = "Report a simulated failure (owners only)")]
    Fail,
}

/// Build the combined command handler.
pub fn command_handler() -> UpdateHandler<anyhow::Error> {
    use dptree::case;
    teloxide::filter_command::<Command, _>()
        .branch(case![Command::Start].endpoint(start::start_handler))
        .branch(case![Command::Ping].endpoint(ping::ping_command))
        .branch(case![Command::Fail].endpoint(fail::fail_command))
}

/// Build the callback query handler.
pub fn callback_handler() -> UpdateHandler<anyhow::Error> {
    Update::filter_callback_query().branch(
        dptree::filter(|q: CallbackQuery| {
            q.data
                .as_ref()
                .map(|d| d.starts_with(buttons::CALLBACK_PREFIX))
                .unwrap_or(false)
        })
        .endpoint(buttons::callback_handler),
    )
}
