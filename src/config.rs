// src/config.rs

use crate::notifier::DeliveryPolicy;
use serde::Deserialize;
use serde_json::json;
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

pub const DEFAULT_CONFIG_PATH: &str = "config.json";

const MODIFICATION_PLACEHOLDER: &str = "MODIFICATION_NAMESPACE";
const WEBHOOK_PLACEHOLDER: &str = "DISCORD_WEBHOOK_URL";

#[derive(Debug)]
pub enum ConfigError {
    Io(String),
    Parse(String),
    Missing(&'static str),
    InvalidUrl(String),
    /// No config existed, so a template was written for the user to fill in.
    Created(PathBuf),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "Config I/O error: {msg}"),
            ConfigError::Parse(msg) => write!(f, "Failed to decode config file: {msg}"),
            ConfigError::Missing(what) => write!(f, "Please enter a {what}"),
            ConfigError::InvalidUrl(msg) => write!(f, "Invalid URL: {msg}"),
            ConfigError::Created(path) => write!(
                f,
                "Created {}, fill in the modification and webhook url and run again",
                path.display()
            ),
        }
    }
}

impl Error for ConfigError {}

/// Everything one poll cycle needs to know, passed explicitly to the
/// components that use it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Namespace of the tracked modification.
    #[serde(default)]
    pub modification: String,
    #[serde(default)]
    pub webhook_url: String,
    #[serde(default = "default_baseline_path")]
    pub baseline_path: PathBuf,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_site_base_url")]
    pub site_base_url: String,
    #[serde(default)]
    pub delivery_policy: DeliveryPolicy,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_baseline_path() -> PathBuf {
    PathBuf::from("latest.json")
}

fn default_api_base_url() -> String {
    "https://flintmc.net/api".to_string()
}

fn default_site_base_url() -> String {
    "https://flintmc.net".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Config {
    /// Reads the config file, applying `TRACKER_MODIFICATION` and
    /// `TRACKER_WEBHOOK_URL` from the environment on top.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::load_with(path, |key| std::env::var(key).ok())
    }

    pub fn load_with<F>(path: &Path, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if !path.exists() {
            write_template(path)?;
            return Err(ConfigError::Created(path.to_path_buf()));
        }

        let raw = fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        let mut config: Config =
            serde_json::from_str(&raw).map_err(|e| ConfigError::Parse(e.to_string()))?;

        if let Some(modification) = env("TRACKER_MODIFICATION") {
            config.modification = modification;
        }
        if let Some(webhook_url) = env("TRACKER_WEBHOOK_URL") {
            config.webhook_url = webhook_url;
        }
        config.modification = config.modification.trim().to_string();
        config.webhook_url = config.webhook_url.trim().to_string();

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if is_unset(&self.modification, MODIFICATION_PLACEHOLDER) {
            return Err(ConfigError::Missing("modification"));
        }
        if is_unset(&self.webhook_url, WEBHOOK_PLACEHOLDER) {
            return Err(ConfigError::Missing("webhook url"));
        }

        check_http_url("webhookUrl", &self.webhook_url)?;
        check_http_url("apiBaseUrl", &self.api_base_url)?;
        check_http_url("siteBaseUrl", &self.site_base_url)?;
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn is_unset(value: &str, placeholder: &str) -> bool {
    value.is_empty() || value == placeholder
}

fn check_http_url(key: &str, value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value).map_err(|e| ConfigError::InvalidUrl(format!("{key}: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::InvalidUrl(format!(
            "{key}: unsupported scheme '{other}'"
        ))),
    }
}

fn write_template(path: &Path) -> Result<(), ConfigError> {
    let template = json!({
        "modification": MODIFICATION_PLACEHOLDER,
        "webhookUrl": WEBHOOK_PLACEHOLDER,
        "baselinePath": "latest.json",
        "deliveryPolicy": "fail_fast",
    });
    let text = serde_json::to_string_pretty(&template)
        .map_err(|e| ConfigError::Io(format!("failed to create config: {e}")))?;
    fs::write(path, text).map_err(|e| ConfigError::Io(format!("failed to create config: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn write_config(dir: &TempDir, body: serde_json::Value) -> PathBuf {
        let path = dir.path().join("config.json");
        fs::write(&path, body.to_string()).unwrap();
        path
    }

    #[test]
    fn missing_file_writes_template_and_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");

        let err = Config::load_with(&path, no_env).unwrap_err();
        assert!(matches!(err, ConfigError::Created(_)));

        // The template itself is still not runnable.
        let err = Config::load_with(&path, no_env).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("modification")));
    }

    #[test]
    fn reads_required_settings_and_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(
            &temp_dir,
            json!({
                "modification": "worldedit",
                "webhookUrl": "https://discord.com/api/webhooks/1/abc"
            }),
        );

        let config = Config::load_with(&path, no_env).unwrap();
        assert_eq!(config.modification, "worldedit");
        assert_eq!(config.baseline_path, PathBuf::from("latest.json"));
        assert_eq!(config.api_base_url, "https://flintmc.net/api");
        assert_eq!(config.delivery_policy, DeliveryPolicy::FailFast);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn placeholder_webhook_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(
            &temp_dir,
            json!({ "modification": "worldedit", "webhookUrl": "DISCORD_WEBHOOK_URL" }),
        );

        let err = Config::load_with(&path, no_env).unwrap_err();
        assert_eq!(err.to_string(), "Please enter a webhook url");
    }

    #[test]
    fn environment_overrides_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, json!({ "deliveryPolicy": "best_effort" }));

        let config = Config::load_with(&path, |key| match key {
            "TRACKER_MODIFICATION" => Some("labychat".to_string()),
            "TRACKER_WEBHOOK_URL" => Some("https://discord.com/api/webhooks/2/def".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.modification, "labychat");
        assert_eq!(config.delivery_policy, DeliveryPolicy::BestEffort);
    }

    #[test]
    fn surrounding_whitespace_is_dropped() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(
            &temp_dir,
            json!({
                "modification": " worldedit ",
                "webhookUrl": "https://discord.com/api/webhooks/1/abc\n"
            }),
        );

        let config = Config::load_with(&path, no_env).unwrap();
        assert_eq!(config.modification, "worldedit");
        assert_eq!(config.webhook_url, "https://discord.com/api/webhooks/1/abc");

        let config = Config::load_with(&path, |key| match key {
            "TRACKER_MODIFICATION" => Some("  labychat\t".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.modification, "labychat");
    }

    #[test]
    fn blank_modification_is_missing() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(
            &temp_dir,
            json!({
                "modification": "   ",
                "webhookUrl": "https://discord.com/api/webhooks/1/abc"
            }),
        );

        let err = Config::load_with(&path, no_env).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("modification")));
    }

    #[test]
    fn non_http_webhook_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(
            &temp_dir,
            json!({ "modification": "worldedit", "webhookUrl": "ftp://example.com/hook" }),
        );

        let err = Config::load_with(&path, no_env).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl(_)));
    }

    #[test]
    fn broken_json_is_a_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, "{ modification: ").unwrap();

        let err = Config::load_with(&path, no_env).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
