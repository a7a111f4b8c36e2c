use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::aliases::AliasTable;
use crate::helpers::url::normalize_server_url;
use crate::interactive::Prompter;
use crate::output;

/// Overrides the default config location
pub const CONFIG_ENV: &str = "ZLI_CONFIG";

/// Server connection details
#[derive(Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct ServerProfile {
    /// Always ends with `/`
    #[serde(rename = "ServerURL", default)]
    pub server_url: String,
    #[serde(rename = "User", default)]
    pub user: String,
    #[serde(rename = "APIToken", default)]
    pub api_token: String,
}

impl fmt::Debug for ServerProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerProfile")
            .field("server_url", &self.server_url)
            .field("user", &self.user)
            .field("api_token", &"<redacted>")
            .finish()
    }
}

impl ServerProfile {
    pub fn is_complete(&self) -> bool {
        !self.server_url.trim().is_empty() && !self.user.trim().is_empty() && !self.api_token.trim().is_empty()
    }
}

/// The persisted document: server profile plus alias table
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(flatten)]
    pub profile: ServerProfile,
    #[serde(rename = "Jobs", default)]
    pub jobs: AliasTable,
}

impl Config {
    /// Prompt for every blank profile field. Returns whether anything changed.
    pub fn complete(&mut self, prompter: &dyn Prompter) -> Result<bool> {
        if self.profile.is_complete() && self.profile.server_url.ends_with('/') {
            return Ok(false);
        }

        let mut changed = false;

        if self.profile.server_url.trim().is_empty() {
            let url = prompter.text("Please enter your Jenkins URL", Some("e.g. https://jenkins.example.com/"))?;
            if url.trim().is_empty() {
                bail!("Jenkins URL cannot be empty");
            }
            self.profile.server_url = normalize_server_url(&url);
            changed = true;
        } else if !self.profile.server_url.ends_with('/') {
            self.profile.server_url = normalize_server_url(&self.profile.server_url);
            changed = true;
        }

        if self.profile.user.trim().is_empty() {
            let user = prompter.text("Please enter your Jenkins username", None)?;
            if user.trim().is_empty() {
                bail!("Jenkins username cannot be empty");
            }
            self.profile.user = user.trim().to_string();
            changed = true;
        }

        if self.profile.api_token.trim().is_empty() {
            let help = format!(
                "Generate here: {}user/{}/configure",
                self.profile.server_url, self.profile.user
            );
            let token = prompter.secret("Please enter your Jenkins API token", Some(&help))?;
            if token.trim().is_empty() {
                bail!("Jenkins API token cannot be empty");
            }
            self.profile.api_token = token.trim().to_string();
            changed = true;
        }

        Ok(changed)
    }
}

/// Reads and writes the config document at a fixed path
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `$ZLI_CONFIG`, or `~/.config/zli.yml`
    pub fn locate() -> Result<Self> {
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
            return Ok(Self::new(path));
        }

        let home = dirs::home_dir().context("Failed to get home directory")?;
        Ok(Self::new(home.join(".config").join("zli.yml")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the document; anything unreadable counts as an empty config
    pub fn read(&self) -> Config {
        if !self.path.exists() {
            debug!("No config file at {}", self.path.display());
            return Config::default();
        }

        let parsed = fs::read_to_string(&self.path)
            .context("Failed to read config file")
            .and_then(|content| serde_yaml::from_str::<Config>(&content).context("Failed to parse config file"));

        match parsed {
            Ok(mut config) => {
                debug!("Loaded config from {}", self.path.display());
                config.jobs.sort();
                config
            }
            Err(e) => {
                output::warning(&format!("Error reading config file, {:#}", e));
                Config::default()
            }
        }
    }

    /// Read the document and fill in missing profile fields, saving if prompted
    pub fn load(&self, prompter: &dyn Prompter) -> Result<Config> {
        let mut config = self.read();

        if config.complete(prompter)? {
            self.save(&config)?;
        }

        Ok(config)
    }

    /// Overwrite the document with `config`
    pub fn save(&self, config: &Config) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .context("Failed to create config directory")?;
        }

        let mut config = config.clone();
        config.jobs.sort();

        let content = serde_yaml::to_string(&config)
            .context("Failed to serialize config")?;

        let tmp_path = self.path.with_extension("yml.tmp");
        fs::write(&tmp_path, content)
            .context("Failed to write config file")?;
        fs::rename(&tmp_path, &self.path)
            .context("Failed to write config file")?;

        debug!("Saved config to {}", self.path.display());
        Ok(())
    }
}
