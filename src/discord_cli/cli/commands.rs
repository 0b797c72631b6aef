//! Planning and dispatch.
//!
//! Setup runs in exactly one place, [`plan`], and only once per invocation no
//! matter how deep the matched subcommand is nested.

use super::logging;
use super::print::print_result;
use super::setup::{
    ApplicationCommands, Cli, CommandAction, Commands, ConfigCommands, GuildCommands,
    UserCommands,
};
use anyhow::{anyhow, Context};
use clap::Parser;
use discord_cli::api::{self, DiscordApi};
use discord_cli::commands::{self, config::ConfigAction, CmdResult};
use discord_cli::config::{write_target, Configuration};
use discord_cli::context::AppContext;
use std::path::Path;
use tokio::runtime::Runtime;
use tracing::debug;

/// How a parsed command will run.
enum Plan<C> {
    /// No Discord access needed.
    Local(ConfigAction),
    /// Setup passed; run against this context.
    Remote(AppContext<C>),
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let overrides = cli.overrides();
    let config = Configuration::resolve(&overrides)?;
    if let Some(path) = &config.config_file {
        eprintln!("Using config file: {}", path.display());
    }

    // The client may touch the runtime while it is built, so enter it first.
    let runtime = runtime()?;
    let _guard = runtime.enter();

    let result = match plan(&cli.command, &config, api::connect)? {
        Plan::Local(action) => handle_config(&config, overrides.config_file.as_deref(), action)?,
        Plan::Remote(ctx) => runtime.block_on(dispatch(&ctx, &cli.command))?,
    };

    print_result(&result)
}

/// Decides how `command` runs and performs setup when it needs Discord.
fn plan<C, F>(command: &Commands, config: &Configuration, connect: F) -> anyhow::Result<Plan<C>>
where
    F: FnOnce(&str) -> C,
{
    match command {
        Commands::Config { action } => Ok(Plan::Local(config_action(action))),
        _ => {
            let ctx = AppContext::prepare(config.clone(), connect)?;
            Ok(Plan::Remote(ctx))
        }
    }
}

fn config_action(action: &Option<ConfigCommands>) -> ConfigAction {
    match action {
        None | Some(ConfigCommands::Show) => ConfigAction::ShowAll,
        Some(ConfigCommands::Get { key }) => ConfigAction::ShowKey(key.clone()),
        Some(ConfigCommands::Set { key, value }) => ConfigAction::Set(key.clone(), value.clone()),
        Some(ConfigCommands::Path) => ConfigAction::Path,
    }
}

fn handle_config(
    config: &Configuration,
    explicit: Option<&Path>,
    action: ConfigAction,
) -> anyhow::Result<CmdResult> {
    let target = write_target(explicit, config)?;
    debug!(target = %target.display(), "running config action");
    Ok(commands::config::run(config, &target, action)?)
}

async fn dispatch<C: DiscordApi>(
    ctx: &AppContext<C>,
    command: &Commands,
) -> anyhow::Result<CmdResult> {
    let result = match command {
        Commands::Doctor => commands::doctor::run(ctx)?,
        Commands::Application { command } => match command {
            ApplicationCommands::Info => commands::application::info(ctx).await?,
            ApplicationCommands::Commands { action } => match action {
                CommandAction::List => commands::application::list_commands(ctx).await?,
                CommandAction::Delete { command_id } => {
                    commands::application::delete_command(ctx, *command_id).await?
                }
            },
        },
        Commands::Guild { command } => match command {
            GuildCommands::Info => commands::guild::info(ctx).await?,
            GuildCommands::Commands { action } => match action {
                CommandAction::List => commands::guild::list_commands(ctx).await?,
                CommandAction::Delete { command_id } => {
                    commands::guild::delete_command(ctx, *command_id).await?
                }
            },
        },
        Commands::User { command } => match command {
            UserCommands::Info => commands::user::info(ctx).await?,
        },
        Commands::Config { .. } => return Err(anyhow!("config commands run without a client")),
    };
    Ok(result)
}

/// A single-threaded runtime; exactly one command runs on it.
fn runtime() -> anyhow::Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start the async runtime")
}
