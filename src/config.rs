use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::TrackerError;

const SETTINGS_DIR: &str = "lol-cd-tracker";
const SETTINGS_FILE: &str = "settings.json";

/// Patch value that asks Data Dragon for the newest release instead of a pinned one.
pub const LATEST_PATCH: &str = "latest";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    pub api_key: String,
    /// Platform routing value, e.g. `na1` or `euw1`.
    pub platform: String,
    pub patch: String,
    pub locale: String,
    pub max_concurrent_fetches: usize,
    pub request_timeout_secs: u64,
    /// Overrides `https://{platform}.api.riotgames.com`.
    pub platform_base_url: Option<String>,
    pub ddragon_base_url: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            platform: "na1".to_string(),
            patch: "12.6.1".to_string(),
            locale: "en_US".to_string(),
            max_concurrent_fetches: 4,
            request_timeout_secs: 10,
            platform_base_url: None,
            ddragon_base_url: "https://ddragon.leagueoflegends.com".to_string(),
        }
    }
}

impl TrackerConfig {
    /// Defaults, then the settings file if present, then environment overrides.
    pub fn load() -> Result<Self, TrackerError> {
        let mut config = match settings_path() {
            Some(path) if path.exists() => {
                tracing::debug!("Loading settings from {}", path.display());
                let contents = std::fs::read_to_string(&path).map_err(|e| {
                    TrackerError::Config(format!("Failed to read {}: {}", path.display(), e))
                })?;
                serde_json::from_str(&contents)?
            }
            _ => Self::default(),
        };

        config.apply_env(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(key) = var("RIOT_API_KEY") {
            self.api_key = key;
        }
        if let Some(platform) = var("RIOT_PLATFORM") {
            self.platform = platform.to_lowercase();
        }
        if let Some(patch) = var("DDRAGON_PATCH") {
            self.patch = patch;
        }
        if let Some(locale) = var("DDRAGON_LOCALE") {
            self.locale = locale;
        }
        if let Some(limit) = var("TRACKER_MAX_CONCURRENT").and_then(|v| v.parse().ok()) {
            self.max_concurrent_fetches = limit;
        }
    }

    pub fn validate(&self) -> Result<(), TrackerError> {
        if self.api_key.trim().is_empty() {
            return Err(TrackerError::Config(
                "no API key; set RIOT_API_KEY or api_key in settings.json".into(),
            ));
        }
        if self.max_concurrent_fetches == 0 {
            return Err(TrackerError::Config(
                "max_concurrent_fetches must be at least 1".into(),
            ));
        }
        Ok(())
    }

    pub fn platform_url(&self) -> String {
        self.platform_base_url
            .clone()
            .unwrap_or_else(|| format!("https://{}.api.riotgames.com", self.platform))
    }

    pub fn wants_latest_patch(&self) -> bool {
        self.patch.eq_ignore_ascii_case(LATEST_PATCH)
    }
}

pub fn settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(SETTINGS_DIR).join(SETTINGS_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn env_overrides_defaults() {
        let env: HashMap<&str, &str> = [
            ("RIOT_API_KEY", "RGAPI-test"),
            ("RIOT_PLATFORM", "EUW1"),
            ("TRACKER_MAX_CONCURRENT", "2"),
        ]
        .into_iter()
        .collect();

        let mut config = TrackerConfig::default();
        config.apply_env(|k| env.get(k).map(|v| v.to_string()));

        assert_eq!(config.api_key, "RGAPI-test");
        assert_eq!(config.platform, "euw1");
        assert_eq!(config.max_concurrent_fetches, 2);
        assert_eq!(config.patch, "12.6.1");
        assert_eq!(config.platform_url(), "https://euw1.api.riotgames.com");
    }

    #[test]
    fn missing_key_is_rejected() {
        let config = TrackerConfig::default();
        assert!(matches!(config.validate(), Err(TrackerError::Config(_))));
    }

    #[test]
    fn partial_settings_file_keeps_defaults() {
        let config: TrackerConfig =
            serde_json::from_str(r#"{"api_key":"k","patch":"latest"}"#).unwrap();
        assert!(config.wants_latest_patch());
        assert_eq!(config.locale, "en_US");
        assert!(config.validate().is_ok());
    }
}
