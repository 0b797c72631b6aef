use thiserror::Error;
use twilight_http::response::DeserializeBodyError;

#[derive(Error, Debug)]
pub enum DiscordCliError {
    #[error("Unable to determine the home directory")]
    HomeDirUnavailable,

    #[error("Required configs are not set. Either set them with `discord_cli config` or through command line flags")]
    MissingCredentials,

    #[error("No valid {key} is set. Pass --{key} or run `discord_cli config set {key} <id>`")]
    MissingId { key: &'static str },

    #[error("Unknown config key: {0}")]
    UnknownKey(String),

    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },

    #[error("Config error: {0}")]
    Config(#[from] figment::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Discord API error: {0}")]
    Http(#[from] twilight_http::Error),

    #[error("Discord response error: {0}")]
    Body(#[from] DeserializeBodyError),
}

pub type Result<T> = std::result::Result<T, DiscordCliError>;
