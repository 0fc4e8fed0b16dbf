/*
[INPUT]:  YAML configuration file, DAYBOARD_* environment variables
[OUTPUT]: Parsed dashboard configuration
[POS]:    Configuration layer - backend, session and panel defaults
[UPDATE]: When adding new configuration options
*/

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, bail};
use config::{Config, Environment, File, Map};
use dayboard_adapter::{ClientConfig, Credentials};
use serde::{Deserialize, Serialize};

use crate::assign::AssignSettings;
use crate::dashboard::GmailSettings;

/// Top-level configuration for the dashboard
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DashboardConfig {
    /// Origin of the dashboard backend
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Whole-request timeout; unset waits indefinitely
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    /// Session tokens forwarded as cookies
    #[serde(default)]
    pub credentials: Option<CredentialsConfig>,
    #[serde(default)]
    pub gmail: GmailConfig,
    #[serde(default)]
    pub assign: AssignConfig,
    /// Directory for rolling log files in TUI mode
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CredentialsConfig {
    pub id_token: String,
    pub access_token: String,
}

/// Mail panel windows
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GmailConfig {
    /// Days of unread mail to count
    #[serde(default = "default_n_days")]
    pub n_days: u32,
    /// Hours of unread mail to count
    #[serde(default = "default_m_hours")]
    pub m_hours: u32,
}

/// Assign panel defaults
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AssignConfig {
    #[serde(default = "default_n_days")]
    pub n_days: u32,
    #[serde(default)]
    pub unread_only: bool,
    /// Subject-line phrases that mark an email as actionable
    #[serde(default)]
    pub phrases: Vec<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: None,
            credentials: None,
            gmail: GmailConfig::default(),
            assign: AssignConfig::default(),
            log_dir: None,
        }
    }
}

impl Default for GmailConfig {
    fn default() -> Self {
        Self {
            n_days: default_n_days(),
            m_hours: default_m_hours(),
        }
    }
}

impl Default for AssignConfig {
    fn default() -> Self {
        Self {
            n_days: default_n_days(),
            unread_only: false,
            phrases: Vec::new(),
        }
    }
}

fn default_base_url() -> String {
    dayboard_adapter::http::DEFAULT_BASE_URL.to_string()
}

fn default_n_days() -> u32 {
    7
}

fn default_m_hours() -> u32 {
    3
}

impl DashboardConfig {
    /// `<config dir>/dayboard/config.yaml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("dayboard").join("config.yaml"))
    }

    /// Load the optional YAML file, overridden by `DAYBOARD_*` variables
    ///
    /// Nested keys use a double underscore, e.g. `DAYBOARD_GMAIL__N_DAYS`.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        Self::load_with_env(path, None)
    }

    fn load_with_env(
        path: Option<&Path>,
        env: Option<Map<String, String>>,
    ) -> anyhow::Result<Self> {
        let path = path.map(Path::to_path_buf).or_else(Self::default_path);

        let mut builder = Config::builder();
        if let Some(path) = &path {
            builder = builder.add_source(File::from(path.as_path()).required(false));
        }
        let config: Self = builder
            .add_source(
                Environment::with_prefix("DAYBOARD")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .build()
            .context("build configuration")?
            .try_deserialize()
            .context("deserialize configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file only
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Write the sample config; refuses to overwrite
    pub fn write_sample(path: &Path) -> anyhow::Result<()> {
        if path.exists() {
            bail!("{} already exists", path.display());
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create {}", parent.display()))?;
        }
        let yaml = serde_yaml::to_string(&Self::sample())?;
        std::fs::write(path, yaml).with_context(|| format!("write {}", path.display()))?;
        Ok(())
    }

    pub fn sample() -> Self {
        Self {
            credentials: Some(CredentialsConfig {
                id_token: "<google id token>".to_string(),
                access_token: "<google access token>".to_string(),
            }),
            assign: AssignConfig {
                phrases: vec!["action required".to_string(), "deadline".to_string()],
                ..AssignConfig::default()
            },
            ..Self::default()
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        url::Url::parse(&self.base_url)
            .with_context(|| format!("invalid base_url {:?}", self.base_url))?;
        if self.gmail.n_days == 0 || self.assign.n_days == 0 {
            bail!("n_days must be at least 1");
        }
        Ok(())
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: self.request_timeout_secs.map(Duration::from_secs),
            connect_timeout: None,
        }
    }

    pub fn credentials(&self) -> Option<Credentials> {
        self.credentials.as_ref().map(|credentials| Credentials {
            id_token: credentials.id_token.clone(),
            access_token: credentials.access_token.clone(),
        })
    }

    pub fn gmail_settings(&self) -> GmailSettings {
        GmailSettings {
            n_days: self.gmail.n_days,
            m_hours: self.gmail.m_hours,
        }
    }

    pub fn assign_settings(&self) -> AssignSettings {
        AssignSettings {
            n_days: self.assign.n_days,
            unread_only: self.assign.unread_only,
            subject_line_phrases: self.assign.phrases.clone(),
        }
    }
}
