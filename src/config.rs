use crate::model::DateLocale;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// JSON file holding the audit log entries
    pub audit_log_path: String,
    pub scenario_name: String,
    /// External seed for the pricing form's LTV field
    #[serde(default)]
    pub current_ltv: String,
    /// External seed for the pricing form's closing date field
    #[serde(default)]
    pub current_closing_date: String,
    #[serde(default)]
    pub date_locale: DateLocale,
    /// Tracing filter, overridden by RUST_LOG
    #[serde(default)]
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        let audit_log_path = Self::config_dir()
            .map(|dir| dir.join("audit_logs.json").to_string_lossy().to_string())
            .unwrap_or_else(|| "audit_logs.json".to_string());

        Self {
            audit_log_path,
            scenario_name: "Untitled scenario".to_string(),
            current_ltv: String::new(),
            current_closing_date: String::new(),
            date_locale: DateLocale::default(),
            log_level: None,
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".scenario-desk"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    pub fn load() -> Option<Config> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            return None;
        }

        let contents = fs::read_to_string(&config_path).ok()?;
        match serde_json::from_str(&contents) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!(path = %config_path.display(), error = %e, "Ignoring unreadable config");
                None
            }
        }
    }

    /// Load the config, writing defaults on first run
    pub fn load_or_create() -> Config {
        if let Some(config) = Self::load() {
            return config;
        }

        let config = Config::default();
        if let Err(e) = config.save() {
            tracing::warn!(error = %e, "Could not write default config");
        }
        config
    }

    /// Save the config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        // Create config directory if it doesn't exist
        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }

        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        tracing::info!(path = %config_path.display(), "Saved config");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_missing_optional_fields_use_defaults() {
        let json = r#"{ "audit_log_path": "/tmp/logs.json", "scenario_name": "Refi" }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.current_ltv, "");
        assert_eq!(config.current_closing_date, "");
        assert_eq!(config.date_locale, DateLocale::EnUs);
        assert!(config.log_level.is_none());
    }

    #[test]
    fn test_config_reads_locale() {
        let json = r#"{
            "audit_log_path": "/tmp/logs.json",
            "scenario_name": "Refi",
            "current_ltv": "75",
            "current_closing_date": "2024-06-01",
            "date_locale": "en-GB"
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.current_ltv, "75");
        assert_eq!(config.date_locale, DateLocale::EnGb);
    }
}
