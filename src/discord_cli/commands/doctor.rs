use crate::commands::{CmdMessage, CmdResult};
use crate::context::AppContext;
use crate::error::Result;
use crate::snowflake;
use serde_json::json;

/// Reports what setup resolved. Reaching this point means setup passed, so
/// no request is sent.
pub fn run<C>(ctx: &AppContext<C>) -> Result<CmdResult> {
    let config = &ctx.config;
    let mut result = CmdResult::default().with_payload(&json!({
        "config_file": config.config_file,
        "discord_token": config.redacted_token(),
        "application_id": ctx.application_id().get(),
        "guild_id": config.guild_id,
        "user_id": config.user_id,
    }))?;

    if !snowflake::is_valid(config.guild_id) {
        result.add_message(CmdMessage::warning(
            "guild_id is not set; `guild` commands will fail",
        ));
    }
    if !snowflake::is_valid(config.user_id) {
        result.add_message(CmdMessage::info(
            "user_id is not set; `user info` shows the current user",
        ));
    }
    result.add_message(CmdMessage::success("Configuration OK"));
    Ok(result)
}
