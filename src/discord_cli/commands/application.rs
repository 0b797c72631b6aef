use crate::api::DiscordApi;
use crate::commands::{CmdMessage, CmdResult};
use crate::context::AppContext;
use crate::error::{DiscordCliError, Result};
use crate::snowflake::checked_id;
use tracing::info;

pub async fn info<C: DiscordApi>(ctx: &AppContext<C>) -> Result<CmdResult> {
    let application = ctx.client.fetch_application().await?;
    CmdResult::default().with_payload(&application)
}

pub async fn list_commands<C: DiscordApi>(ctx: &AppContext<C>) -> Result<CmdResult> {
    let commands = ctx
        .client
        .list_global_commands(ctx.application_id())
        .await?;

    let mut result = CmdResult::default().with_payload(&commands)?;
    if commands.is_empty() {
        result.add_message(CmdMessage::info("No global commands registered."));
    }
    Ok(result)
}

pub async fn delete_command<C: DiscordApi>(
    ctx: &AppContext<C>,
    command_id: u64,
) -> Result<CmdResult> {
    let command = checked_id(command_id).ok_or_else(|| DiscordCliError::InvalidValue {
        key: "command_id".to_string(),
        value: command_id.to_string(),
    })?;

    ctx.client
        .delete_global_command(ctx.application_id(), command)
        .await?;
    info!(%command, "deleted global command");

    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Deleted global command {}",
        command
    ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::mock::{block_on, context};

    #[test]
    fn info_fetches_application() {
        let ctx = context(123, 0, 0);
        let result = block_on(info(&ctx)).unwrap();

        assert_eq!(ctx.client.calls(), vec!["fetch_application"]);
        assert_eq!(result.payload.unwrap()["id"], "123");
    }

    #[test]
    fn list_uses_configured_application() {
        let ctx = context(123, 0, 0);
        let result = block_on(list_commands(&ctx)).unwrap();

        assert_eq!(ctx.client.calls(), vec!["list_global_commands 123"]);
        assert_eq!(result.payload.unwrap(), serde_json::json!([]));
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn delete_passes_command_id() {
        let ctx = context(123, 0, 0);
        let result = block_on(delete_command(&ctx, 99)).unwrap();

        assert_eq!(ctx.client.calls(), vec!["delete_global_command 123 99"]);
        assert!(result.messages[0].content.contains("99"));
    }

    #[test]
    fn delete_rejects_zero_id_without_calling_discord() {
        let ctx = context(123, 0, 0);
        let err = block_on(delete_command(&ctx, 0)).unwrap_err();

        assert!(matches!(err, DiscordCliError::InvalidValue { .. }));
        assert!(ctx.client.calls().is_empty());
    }
}
