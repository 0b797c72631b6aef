//! A recording [`DiscordApi`] for command tests.

use crate::api::DiscordApi;
use crate::config::Configuration;
use crate::context::AppContext;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Mutex;
use twilight_model::application::command::Command;
use twilight_model::guild::Guild;
use twilight_model::id::marker::{ApplicationMarker, CommandMarker, GuildMarker, UserMarker};
use twilight_model::id::Id;
use twilight_model::oauth::Application;
use twilight_model::user::{CurrentUser, User};

#[derive(Default)]
pub struct MockApi {
    pub calls: Mutex<Vec<String>>,
}

impl MockApi {
    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

pub fn context(application_id: u64, guild_id: u64, user_id: u64) -> AppContext<MockApi> {
    let config = Configuration {
        discord_token: "test-token".to_string(),
        application_id,
        guild_id,
        user_id,
        ..Default::default()
    };
    AppContext::prepare(config, |_| MockApi::default()).unwrap()
}

pub fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
        .block_on(future)
}

fn user_json(id: u64, name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id.to_string(),
        "username": name,
        "discriminator": "0",
        "avatar": null,
        "bot": false,
    })
}

fn application_json() -> serde_json::Value {
    serde_json::json!({
        "id": "123",
        "name": "the-app",
        "description": "",
        "bot_public": true,
        "bot_require_code_grant": false,
        "flags": null,
        "icon": null,
        "team": null,
        "verify_key": "abc",
    })
}

fn guild_json(id: u64) -> serde_json::Value {
    serde_json::json!({
        "id": id.to_string(),
        "name": "the-guild",
        "owner_id": "1",
        "afk_timeout": 300,
        "default_message_notifications": 0,
        "explicit_content_filter": 0,
        "features": [],
        "mfa_level": 0,
        "nsfw_level": 0,
        "preferred_locale": "en-US",
        "premium_progress_bar_enabled": false,
        "roles": [],
        "system_channel_flags": 0,
        "verification_level": 0,
    })
}

#[async_trait]
impl DiscordApi for MockApi {
    async fn fetch_application(&self) -> Result<Application> {
        self.record("fetch_application".to_string());
        Ok(serde_json::from_value(application_json())?)
    }

    async fn list_global_commands(
        &self,
        application: Id<ApplicationMarker>,
    ) -> Result<Vec<Command>> {
        self.record(format!("list_global_commands {}", application));
        Ok(Vec::new())
    }

    async fn delete_global_command(
        &self,
        application: Id<ApplicationMarker>,
        command: Id<CommandMarker>,
    ) -> Result<()> {
        self.record(format!("delete_global_command {} {}", application, command));
        Ok(())
    }

    async fn fetch_guild(&self, guild: Id<GuildMarker>) -> Result<Guild> {
        self.record(format!("fetch_guild {}", guild));
        Ok(serde_json::from_value(guild_json(guild.get()))?)
    }

    async fn list_guild_commands(
        &self,
        application: Id<ApplicationMarker>,
        guild: Id<GuildMarker>,
    ) -> Result<Vec<Command>> {
        self.record(format!("list_guild_commands {} {}", application, guild));
        Ok(Vec::new())
    }

    async fn delete_guild_command(
        &self,
        application: Id<ApplicationMarker>,
        guild: Id<GuildMarker>,
        command: Id<CommandMarker>,
    ) -> Result<()> {
        self.record(format!(
            "delete_guild_command {} {} {}",
            application, guild, command
        ));
        Ok(())
    }

    async fn fetch_user(&self, user: Id<UserMarker>) -> Result<User> {
        self.record(format!("fetch_user {}", user));
        Ok(serde_json::from_value(user_json(user.get(), "someone"))?)
    }

    async fn fetch_current_user(&self) -> Result<CurrentUser> {
        self.record("fetch_current_user".to_string());
        Ok(serde_json::from_value(serde_json::json!({
            "id": "1",
            "username": "the-bot",
            "discriminator": "0",
            "avatar": null,
            "bot": true,
            "mfa_enabled": false,
        }))?)
    }
}
