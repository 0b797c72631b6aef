//! # API Facade
//!
//! [`DiscordApi`] is the only door from the command layer to Discord. The
//! production implementation forwards to [`twilight_http::Client`]; tests
//! substitute a recording mock.
//!
//! The facade does not retry, cache or rate-limit on its own. Whatever
//! `twilight_http` does is what you get.

use crate::error::Result;
use async_trait::async_trait;
use twilight_http::Client;
use twilight_model::application::command::Command;
use twilight_model::guild::Guild;
use twilight_model::id::marker::{ApplicationMarker, CommandMarker, GuildMarker, UserMarker};
use twilight_model::id::Id;
use twilight_model::oauth::Application;
use twilight_model::user::{CurrentUser, User};

#[async_trait]
pub trait DiscordApi: Send + Sync {
    async fn fetch_application(&self) -> Result<Application>;

    async fn list_global_commands(&self, application: Id<ApplicationMarker>)
        -> Result<Vec<Command>>;

    async fn delete_global_command(
        &self,
        application: Id<ApplicationMarker>,
        command: Id<CommandMarker>,
    ) -> Result<()>;

    async fn fetch_guild(&self, guild: Id<GuildMarker>) -> Result<Guild>;

    async fn list_guild_commands(
        &self,
        application: Id<ApplicationMarker>,
        guild: Id<GuildMarker>,
    ) -> Result<Vec<Command>>;

    async fn delete_guild_command(
        &self,
        application: Id<ApplicationMarker>,
        guild: Id<GuildMarker>,
        command: Id<CommandMarker>,
    ) -> Result<()>;

    async fn fetch_user(&self, user: Id<UserMarker>) -> Result<User>;

    async fn fetch_current_user(&self) -> Result<CurrentUser>;
}

/// Builds the production client. Construction performs no network I/O.
pub fn connect(token: &str) -> Client {
    Client::new(token.to_string())
}

#[async_trait]
impl DiscordApi for Client {
    async fn fetch_application(&self) -> Result<Application> {
        Ok(self.current_user_application().await?.model().await?)
    }

    async fn list_global_commands(
        &self,
        application: Id<ApplicationMarker>,
    ) -> Result<Vec<Command>> {
        Ok(self
            .interaction(application)
            .global_commands()
            .await?
            .models()
            .await?)
    }

    async fn delete_global_command(
        &self,
        application: Id<ApplicationMarker>,
        command: Id<CommandMarker>,
    ) -> Result<()> {
        self.interaction(application)
            .delete_global_command(command)
            .await?;
        Ok(())
    }

    async fn fetch_guild(&self, guild: Id<GuildMarker>) -> Result<Guild> {
        Ok(Client::guild(self, guild).await?.model().await?)
    }

    async fn list_guild_commands(
        &self,
        application: Id<ApplicationMarker>,
        guild: Id<GuildMarker>,
    ) -> Result<Vec<Command>> {
        Ok(self
            .interaction(application)
            .guild_commands(guild)
            .await?
            .models()
            .await?)
    }

    async fn delete_guild_command(
        &self,
        application: Id<ApplicationMarker>,
        guild: Id<GuildMarker>,
        command: Id<CommandMarker>,
    ) -> Result<()> {
        self.interaction(application)
            .delete_guild_command(guild, command)
            .await?;
        Ok(())
    }

    async fn fetch_user(&self, user: Id<UserMarker>) -> Result<User> {
        Ok(Client::user(self, user).await?.model().await?)
    }

    async fn fetch_current_user(&self) -> Result<CurrentUser> {
        Ok(Client::current_user(self).await?.model().await?)
    }
}
