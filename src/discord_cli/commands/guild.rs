use crate::api::DiscordApi;
use crate::commands::{CmdMessage, CmdResult};
use crate::context::AppContext;
use crate::error::{DiscordCliError, Result};
use crate::snowflake::checked_id;
use tracing::info;

pub async fn info<C: DiscordApi>(ctx: &AppContext<C>) -> Result<CmdResult> {
    let guild = ctx.client.fetch_guild(ctx.guild_id()?).await?;
    CmdResult::default().with_payload(&guild)
}

pub async fn list_commands<C: DiscordApi>(ctx: &AppContext<C>) -> Result<CmdResult> {
    let guild = ctx.guild_id()?;
    let commands = ctx
        .client
        .list_guild_commands(ctx.application_id(), guild)
        .await?;

    let mut result = CmdResult::default().with_payload(&commands)?;
    if commands.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No commands registered in guild {}.",
            guild
        )));
    }
    Ok(result)
}

pub async fn delete_command<C: DiscordApi>(
    ctx: &AppContext<C>,
    command_id: u64,
) -> Result<CmdResult> {
    let guild = ctx.guild_id()?;
    let command = checked_id(command_id).ok_or_else(|| DiscordCliError::InvalidValue {
        key: "command_id".to_string(),
        value: command_id.to_string(),
    })?;

    ctx.client
        .delete_guild_command(ctx.application_id(), guild, command)
        .await?;
    info!(%guild, %command, "deleted guild command");

    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Deleted command {} from guild {}",
        command, guild
    ))))
}
