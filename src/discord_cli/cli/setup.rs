use clap::{ArgAction, Parser, Subcommand};
use discord_cli::config::ConfigOverrides;
use std::path::PathBuf;

/// Returns the version string, with the git hash appended for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "discord_cli",
    bin_name = "discord_cli",
    version = get_version(),
    arg_required_else_help = true
)]
#[command(about = "A CLI tool for interacting with the Discord REST APIs.", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Discord token.
    #[arg(short = 't', long = "discord_token", global = true, help_heading = "Options")]
    pub discord_token: Option<String>,

    /// Discord application ID.
    #[arg(short = 'a', long = "application_id", global = true, help_heading = "Options")]
    pub application_id: Option<u64>,

    // No shorthand: it would read like the `guild` command.
    /// Discord guild ID.
    #[arg(long = "guild_id", global = true, help_heading = "Options")]
    pub guild_id: Option<u64>,

    /// Discord user ID.
    #[arg(short = 'u', long = "user_id", global = true, help_heading = "Options")]
    pub user_id: Option<u64>,

    /// Config file (default is $HOME/.discord_cli)
    #[arg(long, global = true, value_name = "FILE", help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count, help_heading = "Options")]
    pub verbose: u8,
}

impl Cli {
    /// The flag layer of the configuration.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            config_file: self.config.clone(),
            discord_token: self.discord_token.clone(),
            application_id: self.application_id,
            guild_id: self.guild_id,
            user_id: self.user_id,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show or edit the persisted configuration
    #[command(display_order = 1)]
    Config {
        #[command(subcommand)]
        action: Option<ConfigCommands>,
    },

    /// Check the configuration and build a client without calling Discord
    #[command(display_order = 2)]
    Doctor,

    /// Operate on the configured application
    #[command(alias = "app", display_order = 10)]
    Application {
        #[command(subcommand)]
        command: ApplicationCommands,
    },

    /// Operate on the configured guild (--guild_id)
    #[command(display_order = 11)]
    Guild {
        #[command(subcommand)]
        command: GuildCommands,
    },

    /// Operate on the configured user (--user_id)
    #[command(display_order = 12)]
    User {
        #[command(subcommand)]
        command: UserCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration (token redacted)
    Show,
    /// Print one value
    Get { key: String },
    /// Persist one value to the config file
    Set { key: String, value: String },
    /// Print the config file in use
    Path,
}

#[derive(Subcommand, Debug)]
pub enum ApplicationCommands {
    /// Fetch the application behind the token
    Info,
    /// Manage global application commands
    Commands {
        #[command(subcommand)]
        action: CommandAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum GuildCommands {
    /// Fetch the guild
    Info,
    /// Manage the application's commands in this guild
    Commands {
        #[command(subcommand)]
        action: CommandAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum CommandAction {
    /// List registered commands
    #[command(alias = "ls")]
    List,
    /// Delete a command by ID
    #[command(alias = "rm")]
    Delete { command_id: u64 },
}

#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// Fetch the user, or the current user when no user ID is set
    Info,
}
