use crate::api::DiscordApi;
use crate::commands::CmdResult;
use crate::context::AppContext;
use crate::error::Result;

/// Fetches the configured user, falling back to the token's own user.
pub async fn info<C: DiscordApi>(ctx: &AppContext<C>) -> Result<CmdResult> {
    match ctx.user_id() {
        Some(user) => {
            let user = ctx.client.fetch_user(user).await?;
            CmdResult::default().with_payload(&user)
        }
        None => {
            let user = ctx.client.fetch_current_user().await?;
            CmdResult::default().with_payload(&user)
        }
    }
}
