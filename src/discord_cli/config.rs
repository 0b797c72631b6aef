//! # Configuration
//!
//! Configuration is resolved once per invocation by layering sources with
//! [`figment`]. Later layers win:
//!
//! 1. **Compiled defaults**: empty token, all IDs `0` (unset).
//! 2. **Config file**: YAML, either the `--config` path or the first
//!    `.discord_cli` found in `$HOME` then the current directory.
//! 3. **Environment variables**: `DISCORD_TOKEN`, `APPLICATION_ID`, `GUILD_ID`,
//!    `USER_ID`, matched case-insensitively. Blank variables count as unset.
//! 4. **Command-line flags**: [`ConfigOverrides`].
//!
//! A missing config file is fine; resolution continues with env and flags.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `discord_token` | `""` | Bot token used to authenticate REST calls |
//! | `application_id` | `0` | Application the commands belong to |
//! | `guild_id` | `0` | Guild used by `guild` subcommands |
//! | `user_id` | `0` | User looked up by `user info` |
//!
//! ## CLI Usage
//!
//! - `discord_cli config`: Show the effective configuration.
//! - `discord_cli config get <key>`: Get a specific value.
//! - `discord_cli config set <key> <value>`: Persist a value to the config file.
//! - `discord_cli config path`: Show which file is read and written.

use crate::error::{DiscordCliError, Result};
use directories::BaseDirs;
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const CONFIG_FILENAME: &str = ".discord_cli";

/// Keys that may appear in the config file and the environment.
pub const KEYS: [&str; 4] = ["discord_token", "application_id", "guild_id", "user_id"];

/// The effective configuration for one invocation.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Path to the configuration file in use. Never persisted.
    #[serde(skip)]
    pub config_file: Option<PathBuf>,
    #[serde(deserialize_with = "lenient_string")]
    pub discord_token: String,
    pub application_id: u64,
    pub guild_id: u64,
    pub user_id: u64,
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("config_file", &self.config_file)
            .field("discord_token", &self.redacted_token())
            .field("application_id", &self.application_id)
            .field("guild_id", &self.guild_id)
            .field("user_id", &self.user_id)
            .finish()
    }
}

/// Values supplied on the command line. `None` leaves lower layers untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigOverrides {
    /// Explicit config file path (`--config`). Not a configuration value.
    #[serde(skip)]
    pub config_file: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discord_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
}

/// Directories searched for `.discord_cli`, in order.
#[derive(Debug, Clone)]
pub struct SearchPaths {
    pub home: PathBuf,
    pub cwd: PathBuf,
}

impl SearchPaths {
    /// Looks up the home and current directories.
    ///
    /// Fails with [`DiscordCliError::HomeDirUnavailable`] when the platform
    /// cannot tell us where home is.
    pub fn discover() -> Result<Self> {
        Self::with_home(BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf()))
    }

    /// Search paths for an already looked up home directory and the current
    /// directory.
    pub fn with_home(home: Option<PathBuf>) -> Result<Self> {
        let home = home.ok_or(DiscordCliError::HomeDirUnavailable)?;
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Ok(Self { home, cwd })
    }

    pub fn candidates(&self) -> [PathBuf; 2] {
        [
            self.home.join(CONFIG_FILENAME),
            self.cwd.join(CONFIG_FILENAME),
        ]
    }

    /// The first candidate that exists as a file.
    pub fn find(&self) -> Option<PathBuf> {
        self.candidates().into_iter().find(|p| p.is_file())
    }

    /// Where `config set` writes when no file is in use yet.
    pub fn default_file(&self) -> PathBuf {
        self.home.join(CONFIG_FILENAME)
    }
}

impl Configuration {
    /// Resolves the configuration for this process.
    ///
    /// The home directory is only consulted when no `--config` path was given.
    pub fn resolve(overrides: &ConfigOverrides) -> Result<Self> {
        Self::resolve_with(overrides, SearchPaths::discover)
    }

    /// Like [`Configuration::resolve`], with the search path lookup supplied
    /// by the caller.
    pub fn resolve_with<F>(overrides: &ConfigOverrides, search: F) -> Result<Self>
    where
        F: FnOnce() -> Result<SearchPaths>,
    {
        let file = match &overrides.config_file {
            Some(path) => Some(path.clone()),
            None => search()?.find(),
        };
        Self::resolve_from(file, overrides)
    }

    /// Resolves the configuration from an already located config file.
    pub fn resolve_from(file: Option<PathBuf>, overrides: &ConfigOverrides) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Configuration::default()));

        let mut used = None;
        if let Some(path) = file {
            if path.is_file() {
                figment = figment.merge(Yaml::file_exact(&path));
                used = Some(path);
            } else {
                warn!(path = %path.display(), "config file not found, continuing without it");
            }
        }

        let mut config: Configuration = figment
            .merge(env_layer())
            .merge(Serialized::defaults(overrides))
            .extract()?;
        config.config_file = used;

        debug!(?config, "resolved configuration");
        Ok(config)
    }

    /// Loads only the file layer, or defaults when the file does not exist.
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let mut config: Configuration = Figment::from(Serialized::defaults(Self::default()))
            .merge(Yaml::file_exact(path))
            .extract()?;
        config.config_file = Some(path.to_path_buf());
        Ok(config)
    }

    /// Writes the persisted keys as YAML. The file is created owner-only on unix.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = serde_yaml::to_string(self)?;
        fs::write(path, content)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
        }
        Ok(())
    }

    /// Reads a value by key. Hyphens are accepted in place of underscores.
    pub fn get(&self, key: &str) -> Result<String> {
        match normalize_key(key).as_str() {
            "discord_token" => Ok(self.discord_token.clone()),
            "application_id" => Ok(self.application_id.to_string()),
            "guild_id" => Ok(self.guild_id.to_string()),
            "user_id" => Ok(self.user_id.to_string()),
            _ => Err(DiscordCliError::UnknownKey(key.to_string())),
        }
    }

    /// Sets a value by key. IDs must parse as unsigned 64-bit integers.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let key = normalize_key(key);
        match key.as_str() {
            "discord_token" => self.discord_token = value.trim().to_string(),
            "application_id" => self.application_id = parse_id(&key, value)?,
            "guild_id" => self.guild_id = parse_id(&key, value)?,
            "user_id" => self.user_id = parse_id(&key, value)?,
            _ => return Err(DiscordCliError::UnknownKey(key)),
        }
        Ok(())
    }

    /// The token with everything past the first few characters masked.
    pub fn redacted_token(&self) -> String {
        redact(&self.discord_token)
    }
}

/// Picks the file `config set` writes to: the explicit `--config` path, then
/// the file that was loaded, then `$HOME/.discord_cli`.
pub fn write_target(explicit: Option<&Path>, config: &Configuration) -> Result<PathBuf> {
    if let Some(path) = explicit.or(config.config_file.as_deref()) {
        return Ok(path.to_path_buf());
    }
    Ok(SearchPaths::discover()?.default_file())
}

/// Environment variables for [`KEYS`]. Variables that are set but blank are
/// treated as unset.
fn env_layer() -> Env {
    Env::raw()
        .only(&KEYS)
        .filter(|key| Env::var(key.as_str()).is_some_and(|value| !value.is_empty()))
}

/// Accepts a token typed as a number or left empty in YAML or the
/// environment, keeping its string form.
fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct LenientString;

    impl<'de> Visitor<'de> for LenientString {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a string or a number")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<String, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u128<E: de::Error>(self, v: u128) -> std::result::Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i128<E: de::Error>(self, v: i128) -> std::result::Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_unit<E: de::Error>(self) -> std::result::Result<String, E> {
            Ok(String::new())
        }

        fn visit_none<E: de::Error>(self) -> std::result::Result<String, E> {
            Ok(String::new())
        }
    }

    deserializer.deserialize_any(LenientString)
}

pub fn normalize_key(key: &str) -> String {
    key.trim().to_ascii_lowercase().replace('-', "_")
}

fn parse_id(key: &str, value: &str) -> Result<u64> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| DiscordCliError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        })
}

fn redact(token: &str) -> String {
    if token.is_empty() {
        return String::new();
    }
    if token.chars().count() <= 8 {
        return "*".repeat(8);
    }
    let visible: String = token.chars().take(4).collect();
    format!("{}{}", visible, "*".repeat(8))
}
