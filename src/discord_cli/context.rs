//! # Invocation Context
//!
//! Every Discord subcommand runs against an [`AppContext`]: the resolved
//! [`Configuration`], the validated [`Credentials`] and the client handle. The
//! context is built by [`AppContext::prepare`], which runs [`SETUP_STEPS`] in
//! order, once, before any subcommand logic.
//!
//! Nesting depth does not matter. `discord_cli guild commands list` goes
//! through exactly the same single pass as `discord_cli doctor`.

use crate::config::Configuration;
use crate::error::{DiscordCliError, Result};
use crate::snowflake::checked_id;
use tracing::{debug, info};
use twilight_model::id::marker::{ApplicationMarker, GuildMarker, UserMarker};
use twilight_model::id::Id;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupStep {
    /// Require a token and a valid application ID.
    ValidateCredentials,
    /// Build the client handle from the token.
    ConnectClient,
}

pub const SETUP_STEPS: [SetupStep; 2] = [SetupStep::ValidateCredentials, SetupStep::ConnectClient];

/// A token and application ID that passed validation.
#[derive(Clone)]
pub struct Credentials {
    pub token: String,
    pub application_id: Id<ApplicationMarker>,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"<redacted>")
            .field("application_id", &self.application_id)
            .finish()
    }
}

impl Credentials {
    pub fn from_config(config: &Configuration) -> Result<Self> {
        let token = config.discord_token.trim();
        match checked_id(config.application_id) {
            Some(application_id) if !token.is_empty() => Ok(Self {
                token: token.to_string(),
                application_id,
            }),
            _ => Err(DiscordCliError::MissingCredentials),
        }
    }
}

pub struct AppContext<C> {
    pub config: Configuration,
    pub credentials: Credentials,
    pub client: C,
}

impl<C> AppContext<C> {
    /// Runs the setup steps and returns the context for the subcommand.
    ///
    /// `connect` is called at most once, and only after validation passed.
    pub fn prepare<F>(config: Configuration, connect: F) -> Result<Self>
    where
        F: FnOnce(&str) -> C,
    {
        let mut connect = Some(connect);
        let mut credentials: Option<Credentials> = None;
        let mut client: Option<C> = None;

        for step in SETUP_STEPS {
            debug!(?step, "running setup step");
            match step {
                SetupStep::ValidateCredentials => {
                    credentials = Some(Credentials::from_config(&config)?);
                }
                SetupStep::ConnectClient => {
                    let (Some(creds), Some(connect)) = (credentials.as_ref(), connect.take())
                    else {
                        return Err(DiscordCliError::MissingCredentials);
                    };
                    client = Some(connect(&creds.token));
                }
            }
        }

        match (credentials, client) {
            (Some(credentials), Some(client)) => {
                info!(application_id = %credentials.application_id, "client ready");
                Ok(Self {
                    config,
                    credentials,
                    client,
                })
            }
            _ => Err(DiscordCliError::MissingCredentials),
        }
    }

    pub fn application_id(&self) -> Id<ApplicationMarker> {
        self.credentials.application_id
    }

    pub fn guild_id(&self) -> Result<Id<GuildMarker>> {
        checked_id(self.config.guild_id).ok_or(DiscordCliError::MissingId { key: "guild_id" })
    }

    /// The configured user, or `None` to mean the current user.
    pub fn user_id(&self) -> Option<Id<UserMarker>> {
        checked_id(self.config.user_id)
    }
}
