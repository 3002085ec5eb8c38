use crate::core::phrases::DEFAULT_PHRASES;
use crate::core::reply::{LONG_PHRASE, SHORT_PHRASE};
use eyre::{Context, eyre};
use figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::io::AsyncWriteExt;

const BASE_CONFIG_PATH: &str = "config/app_config.toml";
const ENV_PREFIX: &str = "CHROMACHIP_";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Platform id of the bot account. Statuses replying to it are answered
    /// and mentions of it are never notified.
    pub bot_id: Option<u64>,
    pub long_phrase: String,
    pub short_phrase: String,
    pub replies: Vec<String>,
    pub idle_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bot_id: None,
            long_phrase: LONG_PHRASE.to_string(),
            short_phrase: SHORT_PHRASE.to_string(),
            replies: DEFAULT_PHRASES.iter().map(|s| s.to_string()).collect(),
            idle_timeout_secs: 90,
        }
    }
}

impl Config {
    pub fn from_figment(figment: Figment) -> Result<Self, eyre::Report> {
        figment.extract().context("Could not load config")
    }

    pub fn require_bot_id(&self) -> Result<u64, eyre::Report> {
        self.bot_id
            .ok_or_else(|| eyre!("No bot id configured; set {}BOT_ID", ENV_PREFIX))
    }
}

fn get_config_path() -> Result<PathBuf, eyre::Report> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| eyre!("Could not find a config directory"))?
        .join(env!("CARGO_PKG_NAME"));

    Ok(config_dir.join("app_config.toml"))
}

pub async fn load() -> Result<Config, eyre::Report> {
    let user_config_path = get_config_path()?;
    tracing::info!("Loading user config from {:?}", user_config_path);
    tracing::info!("Loading base config from {:?}", BASE_CONFIG_PATH);

    let config = Config::from_figment(
        Figment::new()
            .merge(Toml::file(BASE_CONFIG_PATH))
            .merge(Toml::file(&user_config_path))
            .merge(Env::prefixed(ENV_PREFIX)),
    )?;

    if !user_config_path.exists() {
        if let Err(e) = save(&config).await {
            tracing::warn!("Failed to save initial config: {}", e);
        }
    }

    Ok(config)
}

pub async fn save(config: &Config) -> Result<(), eyre::Report> {
    let path = get_config_path()?;
    tracing::info!("Saving config to {:?}", path);

    let bytes = toml::to_string_pretty(config).context("Failed to serialize config")?;

    if let Some(parent) = path.parent() {
        if !parent.exists() {
            tokio::fs::create_dir_all(parent)
                .await
                .context("Failed to create config directory")?;
        }
    }

    let mut file = tokio::fs::File::create(path)
        .await
        .context("Failed to create config file")?;

    file.write_all(bytes.as_bytes())
        .await
        .context("Failed to write config to file")?;

    Ok(())
}
