use std::{fs::File, time::Duration};

use anyhow::{anyhow, Context, Result};
use coursedesk_client::ApiToken;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use xdg::BaseDirectories;

const APP_PREFIX: &str = "coursedesk";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the admin API lives
    pub api_base: String,

    /// Where the admin site lives, for opening the create/edit pages
    pub admin_base: String,

    pub token: Option<ApiToken>,
    pub timeout_secs: u64,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: "http://localhost:5000".to_string(),
            admin_base: "http://localhost:3000".to_string(),
            token: None,
            timeout_secs: 30,
            log_level: "debug".to_string(),
        }
    }
}

impl Config {
    /// Load the config file, or `None` if there isn't one yet
    pub fn load() -> Result<Option<Self>> {
        let Some(path) = BaseDirectories::with_prefix(APP_PREFIX)?.find_config_file(CONFIG_FILE)
        else {
            return Ok(None);
        };

        let file = File::open(&path).context("error opening config file")?;
        let config = serde_json::from_reader(&file).context("error deserialising config file")?;

        Ok(Some(config))
    }

    /// Write out the defaults, so there's a config file to edit next time
    pub fn init() -> Result<Self> {
        let config = Self::default();
        config.save().context("error writing default config")?;

        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = BaseDirectories::with_prefix(APP_PREFIX)?.place_config_file(CONFIG_FILE)?;

        let mut file = File::create(path).context("error opening config file")?;
        serde_json::to_writer_pretty(&mut file, &self).context("error serialising config file")?;

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn log_level(&self) -> Result<LevelFilter> {
        self.log_level
            .parse()
            .map_err(|_| anyhow!("invalid log level in config: {}", self.log_level))
    }
}
