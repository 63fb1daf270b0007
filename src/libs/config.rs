//! Configuration for a tempi run.
//!
//! Everything environment-derived is read once at startup into a [`Config`]
//! value that is then passed explicitly to whatever needs it. Nothing below the
//! command layer reads the process environment.
//!
//! ## Sources
//!
//! - **`JIRA_ADDR`**: Jira/Tempo base URL
//! - **`JIRA_TOKEN`**: bearer token used for every Tempo request
//! - **`TEMPI_WORKER`** (falls back to `LOGNAME`, then `USER`): worker key the
//!   worklogs belong to
//! - **`TEMPI_HOME`**: directory whose `config/` folder holds the alias tables;
//!   defaults to the platform data directory
//!
//! The only state tempi persists itself is the default declaration file, kept
//! in `.tempi.json` in the working directory (see [`LocalSettings`]).
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use tempi::libs::config::{Config, LocalSettings};
//!
//! let config = Config::from_env();
//! let token = config.jira.require_token()?;
//!
//! let settings = LocalSettings::read(&std::env::current_dir()?)?;
//! let file = settings.require_default_file()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use super::data_storage::DataStorage;
use super::error::{Result, TempiError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// File in the working directory holding [`LocalSettings`].
pub const LOCAL_SETTINGS_FILE: &str = ".tempi.json";

/// Optional override of the activity code table, read from the config directory.
pub const ACTIVITY_CODES_FILE: &str = "activity-codes.json";

pub const DEFAULT_JIRA_URL: &str = "https://jira.myfuncompany.com";

/// Request timeout for Tempo calls, in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Activity names as shown to users mapped to the `_ActivityType_` attribute
/// values Tempo stores.
pub const DEFAULT_ACTIVITY_CODES: [(&str, &str); 4] = [
    ("Design", "Requirements"),
    ("Development", "Design"),
    ("Testing - Pre Deployment", "Development"),
    ("Non-Project meeting", "Non-Projectmeeting"),
];

/// Connection parameters for the Jira server hosting Tempo.
#[derive(Clone, Debug, PartialEq)]
pub struct JiraConfig {
    pub api_url: String,
    /// Bearer token; only required once a request is about to be made.
    pub token: Option<String>,
    pub activity_codes: HashMap<String, String>,
}

impl JiraConfig {
    pub fn require_token(&self) -> Result<&str> {
        self.token
            .as_deref()
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| TempiError::config("JIRA_TOKEN is not set; export a Jira personal access token"))
    }
}

impl Default for JiraConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_JIRA_URL.to_string(),
            token: None,
            activity_codes: default_activity_codes(),
        }
    }
}

pub fn default_activity_codes() -> HashMap<String, String> {
    DEFAULT_ACTIVITY_CODES
        .iter()
        .map(|(name, code)| (name.to_string(), code.to_string()))
        .collect()
}

/// Process-wide settings, built once at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub jira: JiraConfig,
    /// Worker key the worklogs are recorded for.
    pub worker: Option<String>,
    /// Root of the alias configuration (`<home>/config/*.json`).
    pub home: PathBuf,
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let jira = JiraConfig {
            api_url: non_empty("JIRA_ADDR")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_JIRA_URL.to_string()),
            token: non_empty("JIRA_TOKEN"),
            activity_codes: default_activity_codes(),
        };
        let worker = non_empty("TEMPI_WORKER")
            .or_else(|| non_empty("LOGNAME"))
            .or_else(|| non_empty("USER"));
        let home = non_empty("TEMPI_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| DataStorage::from_lookup(&non_empty).base_path().to_path_buf());

        Self { jira, worker, home }
    }

    /// Replaces the default activity codes with `<home>/config/activity-codes.json` when present.
    ///
    /// Codes are mapped back to names on fetch, so no two names may share a code.
    pub fn load_activity_codes(mut self) -> Result<Self> {
        let path = self.config_dir().join(ACTIVITY_CODES_FILE);
        if path.exists() {
            let text = fs::read_to_string(&path)?;
            let codes: HashMap<String, String> =
                serde_json::from_str(&text).map_err(|e| TempiError::config(format!("failed to parse {}: {}", path.display(), e)))?;

            let mut names_by_code: HashMap<&str, &str> = HashMap::new();
            for (name, code) in &codes {
                if let Some(other) = names_by_code.insert(code, name) {
                    return Err(TempiError::config(format!(
                        "{}: activities '{}' and '{}' share the code '{}'",
                        path.display(),
                        other,
                        name,
                        code
                    )));
                }
            }
            self.jira.activity_codes = codes;
        }
        Ok(self)
    }

    pub fn config_dir(&self) -> PathBuf {
        self.home.join("config")
    }

    pub fn require_worker(&self) -> Result<&str> {
        self.worker
            .as_deref()
            .ok_or_else(|| TempiError::config("no worker configured; set TEMPI_WORKER"))
    }
}

/// Settings persisted in the working directory.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct LocalSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_file: Option<PathBuf>,
}

impl LocalSettings {
    /// Reads the settings from `dir`; a missing file yields the defaults.
    pub fn read(dir: &Path) -> Result<Self> {
        let path = dir.join(LOCAL_SETTINGS_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(&path)?;
        serde_json::from_str(&text).map_err(|e| TempiError::config(format!("failed to parse {}: {}", path.display(), e)))
    }

    pub fn save(&self, dir: &Path) -> Result<()> {
        let file = File::create(dir.join(LOCAL_SETTINGS_FILE))?;
        serde_json::to_writer_pretty(&file, self)?;
        Ok(())
    }

    pub fn require_default_file(&self) -> Result<&Path> {
        self.default_file
            .as_deref()
            .ok_or_else(|| TempiError::config("no default file configured; run `tempi config --file <path>` or `tempi create`"))
    }
}
