use std::{fmt, path::PathBuf};

use crate::{
    constants::*,
    utils::{mask_token, ConfigError},
};

/// Everything a run needs, resolved once at process start.
#[derive(Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bot_token: String,
    pub chat_id: String,
    pub reminders_file: PathBuf,
    pub backup_dir: Option<PathBuf>,
    pub api_base: String,
}

impl AppConfig {
    pub fn new(bot_token: &str, chat_id: &str) -> Self {
        Self {
            bot_token: bot_token.to_string(),
            chat_id: chat_id.to_string(),
            reminders_file: PathBuf::from(DEFAULT_REMINDERS_FILE),
            backup_dir: Some(PathBuf::from(DEFAULT_BACKUP_DIR)),
            api_base: TELEGRAM_API_BASE.to_string(),
        }
    }

    /// Read the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key/value source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bot_token = required(&lookup, ENV_BOT_TOKEN)?;
        let chat_id = required(&lookup, ENV_CHAT_ID)?;
        let mut config = Self::new(&bot_token, &chat_id);
        if let Some(file) = optional(&lookup, ENV_REMINDERS_FILE) {
            config.reminders_file = PathBuf::from(file);
        }
        // an explicitly empty value turns backups off
        if let Some(dir) = lookup(ENV_BACKUP_DIR) {
            let dir = dir.trim();
            config.backup_dir = (!dir.is_empty()).then(|| PathBuf::from(dir));
        }
        if let Some(base) = optional(&lookup, ENV_API_BASE) {
            config.api_base = base.trim_end_matches('/').to_string();
        }
        Ok(config)
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("bot_token", &mask_token(&self.bot_token))
            .field("chat_id", &self.chat_id)
            .field("reminders_file", &self.reminders_file)
            .field("backup_dir", &self.backup_dir)
            .field("api_base", &self.api_base)
            .finish()
    }
}

fn required<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let val = lookup(key).ok_or(ConfigError::Missing(key))?;
    let val = val.trim();
    if val.is_empty() {
        return Err(ConfigError::Empty(key));
    }
    Ok(val.to_string())
}

fn optional<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}
