use crate::commands::{CmdMessage, CmdResult};
use crate::config::{normalize_key, Configuration};
use crate::error::Result;
use serde_json::json;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
    Path,
}

/// Runs a config action against the effective configuration.
///
/// `target` is the file `Set` writes to; only the file layer is rewritten, so
/// values coming from flags or the environment never end up on disk.
pub fn run(config: &Configuration, target: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => CmdResult::default().with_payload(&json!({
            "config_file": config.config_file,
            "discord_token": config.redacted_token(),
            "application_id": config.application_id,
            "guild_id": config.guild_id,
            "user_id": config.user_id,
        })),
        ConfigAction::ShowKey(key) => {
            let value = config.get(&key)?;
            Ok(CmdResult::default().with_message(CmdMessage::info(value)))
        }
        ConfigAction::Set(key, value) => {
            let mut stored = Configuration::load_file(target)?;
            stored.set(&key, &value)?;
            stored.save(target)?;

            let key = normalize_key(&key);
            info!(key = %key, path = %target.display(), "config value saved");

            let shown = if key == "discord_token" {
                stored.redacted_token()
            } else {
                stored.get(&key)?
            };
            Ok(CmdResult::default().with_message(CmdMessage::success(format!(
                "{} set to {} in {}",
                key,
                shown,
                target.display()
            ))))
        }
        ConfigAction::Path => {
            let mut result = CmdResult::default();
            match &config.config_file {
                Some(path) => result.add_message(CmdMessage::info(path.display().to_string())),
                None => result.add_message(CmdMessage::warning(format!(
                    "No config file in use; `config set` writes to {}",
                    target.display()
                ))),
            }
            Ok(result)
        }
    }
}
