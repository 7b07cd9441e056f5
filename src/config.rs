use crate::error::{HealthReportError, Result};
use health_report_common::gemini::DEFAULT_MODEL;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// APIキーの環境変数名（.env からも読み込まれる）
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_key: Option<String>,
    pub model: String,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.into(),
            timeout_seconds: 120,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| HealthReportError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("health-report-ai").join("config.json"))
    }

    pub fn get_api_key(&self) -> Result<String> {
        // 環境変数を優先
        resolve_api_key(std::env::var(API_KEY_ENV).ok(), self.api_key.as_deref())
    }

    pub fn set_api_key(&mut self, key: String) -> Result<()> {
        self.api_key = Some(key);
        self.save()
    }

    pub fn set_model(&mut self, model: String) -> Result<()> {
        self.model = model;
        self.save()
    }
}

fn resolve_api_key(env_key: Option<String>, stored: Option<&str>) -> Result<String> {
    env_key
        .filter(|k| !k.trim().is_empty())
        .or_else(|| stored.filter(|k| !k.trim().is_empty()).map(str::to_string))
        .ok_or(HealthReportError::MissingApiKey)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.api_key.is_none());
        assert_eq!(config.model, "gemini-2.0-flash");
        assert_eq!(config.timeout_seconds, 120);
    }

    #[test]
    fn test_env_key_wins() {
        let key = resolve_api_key(Some("env-key".into()), Some("stored-key")).unwrap();
        assert_eq!(key, "env-key");
    }

    #[test]
    fn test_stored_key_fallback() {
        let key = resolve_api_key(Some("  ".into()), Some("stored-key")).unwrap();
        assert_eq!(key, "stored-key");
    }

    #[test]
    fn test_missing_key() {
        let err = resolve_api_key(None, None).unwrap_err();
        assert!(matches!(err, HealthReportError::MissingApiKey));
    }
}
