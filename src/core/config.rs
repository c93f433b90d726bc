use anyhow::{Context, Result, bail};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

/// Environment variable that overrides `api_key` from the config file.
pub const API_KEY_ENV: &str = "FXCONV_API_KEY";

pub const DEFAULT_EXCHANGERATE_API_URL: &str = "https://v6.exchangerate-api.com/v6";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ExchangeRateApiConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProvidersConfig {
    pub exchangerate_api: Option<ExchangeRateApiConfig>,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        ProvidersConfig {
            exchangerate_api: Some(ExchangeRateApiConfig {
                base_url: DEFAULT_EXCHANGERATE_API_URL.to_string(),
            }),
        }
    }
}

#[derive(Debug, Default, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    pub api_key: Option<String>,
    #[serde(default)]
    pub providers: ProvidersConfig,
}

impl AppConfig {
    /// Loads the config at `path`, or the default location when `None`.
    ///
    /// A missing file at the default location yields the defaults; an explicit
    /// path must exist.
    pub fn load(path: Option<&str>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load_from_path(path);
        }

        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(path = %config_path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("in", "codito", "fxconv")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    pub fn exchangerate_api_url(&self) -> &str {
        self.providers
            .exchangerate_api
            .as_ref()
            .map_or(DEFAULT_EXCHANGERATE_API_URL, |p| &p.base_url)
    }

    /// Picks the API credential, preferring `env_key` over the file's `api_key`.
    ///
    /// Blank values count as missing.
    pub fn resolve_api_key(&self, env_key: Option<String>) -> Result<String> {
        let from_env = env_key.filter(|k| !k.trim().is_empty());
        let from_file = self.api_key.clone().filter(|k| !k.trim().is_empty());

        match from_env.or(from_file) {
            Some(key) => Ok(key.trim().to_string()),
            None => bail!(
                "No API key configured. Set the {API_KEY_ENV} environment variable or add \
                 `api_key` to the config file (see `fxconv setup`)"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
api_key: "abc123"
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.api_key.as_deref(), Some("abc123"));
        assert!(config.providers.exchangerate_api.is_some());
        assert_eq!(config.exchangerate_api_url(), DEFAULT_EXCHANGERATE_API_URL);

        let yaml_str_with_providers = r#"
providers:
  exchangerate_api:
    base_url: "http://example.com/v6"
        "#;
        let config_with_providers: AppConfig =
            serde_yaml::from_str(yaml_str_with_providers).unwrap();
        assert!(config_with_providers.api_key.is_none());
        assert_eq!(
            config_with_providers.exchangerate_api_url(),
            "http://example.com/v6"
        );
    }

    #[test]
    fn test_empty_providers_falls_back_to_default_url() {
        let config: AppConfig = serde_yaml::from_str("providers: {}").unwrap();
        assert!(config.providers.exchangerate_api.is_none());
        assert_eq!(config.exchangerate_api_url(), DEFAULT_EXCHANGERATE_API_URL);
    }

    #[test]
    fn test_resolve_api_key_prefers_environment() {
        let config = AppConfig {
            api_key: Some("from-file".to_string()),
            ..Default::default()
        };

        assert_eq!(
            config.resolve_api_key(Some("from-env".to_string())).unwrap(),
            "from-env"
        );
        assert_eq!(config.resolve_api_key(None).unwrap(), "from-file");
        assert_eq!(
            config.resolve_api_key(Some("  ".to_string())).unwrap(),
            "from-file"
        );
    }

    #[test]
    fn test_resolve_api_key_fails_when_missing() {
        let config = AppConfig {
            api_key: Some(String::new()),
            ..Default::default()
        };

        let err = config.resolve_api_key(None).unwrap_err();
        assert!(err.to_string().contains(API_KEY_ENV));
        assert!(err.to_string().contains("api_key"));
    }

    #[test]
    fn test_load_explicit_path() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.yaml");
        fs::write(&config_path, "api_key: secret\n")?;

        let config = AppConfig::load(config_path.to_str())?;
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        Ok(())
    }

    #[test]
    fn test_load_missing_explicit_path_fails() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("missing.yaml");

        let err = AppConfig::load(config_path.to_str()).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
        Ok(())
    }
}
