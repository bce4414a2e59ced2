//! Configuration types and loading

use std::fs;
use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Model provider configuration
    pub llm: LlmConfig,

    /// Prompt template configuration
    pub prompts: PromptsConfig,
}

impl Config {
    /// Validate configuration before use
    ///
    /// Checks the API key environment variable eagerly so startup fails with
    /// a clear message instead of the first model call. Optional: flows built
    /// from an unvalidated config fail at the first call instead.
    pub fn validate(&self) -> Result<()> {
        if std::env::var(&self.llm.api_key_env).is_err() {
            return Err(eyre::eyre!(
                "API key not found. Set the {} environment variable.",
                self.llm.api_key_env
            ));
        }
        Ok(())
    }

    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try project-local config: foodguide.yml
        let local_config = PathBuf::from("foodguide.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        // Try user config: ~/.config/foodguide/foodguide.yml
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("foodguide").join("foodguide.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        // No config file found, use defaults
        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

/// Model provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Model identifier
    pub model: String,

    /// Environment variable containing the API key
    #[serde(rename = "api-key-env")]
    pub api_key_env: String,

    /// API base URL
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Maximum tokens per response
    #[serde(rename = "max-tokens")]
    pub max_tokens: u32,

    /// Request timeout in milliseconds, applied to the HTTP client
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: u64,
}

impl LlmConfig {
    /// Read the API key from the configured environment variable
    pub fn get_api_key(&self) -> Result<String> {
        std::env::var(&self.api_key_env).context(format!("{} environment variable not set", self.api_key_env))
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o-2024-08-06".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            base_url: "https://api.openai.com".to_string(),
            max_tokens: 4096,
            timeout_ms: 120_000,
        }
    }
}

/// Prompt template configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptsConfig {
    /// Directory holding template overrides
    pub dir: PathBuf,
}

impl Default for PromptsConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("prompt_templates"),
        }
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.llm.model, "gpt-4o-2024-08-06");
        assert_eq!(config.llm.api_key_env, "OPENAI_API_KEY");
        assert_eq!(config.llm.base_url, "https://api.openai.com");
        assert_eq!(config.llm.max_tokens, 4096);
        assert_eq!(config.prompts.dir, PathBuf::from("prompt_templates"));
    }

    #[test]
    fn test_parse_yaml_overrides() {
        let yaml = r#"
llm:
  model: gpt-4o-mini
  api-key-env: MY_API_KEY
  max-tokens: 1024
prompts:
  dir: custom_templates
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.llm.model, "gpt-4o-mini");
        assert_eq!(config.llm.api_key_env, "MY_API_KEY");
        assert_eq!(config.llm.max_tokens, 1024);
        // Unspecified fields keep their defaults
        assert_eq!(config.llm.base_url, "https://api.openai.com");
        assert_eq!(config.prompts.dir, PathBuf::from("custom_templates"));
    }

    #[test]
    #[serial]
    fn test_validate_without_api_key() {
        let mut config = Config::default();
        config.llm.api_key_env = "NONEXISTENT_TEST_API_KEY_12345".to_string();

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("NONEXISTENT_TEST_API_KEY_12345"));
    }

    #[test]
    #[serial]
    fn test_validate_with_api_key() {
        // SAFETY: serialized test, no concurrent env access
        unsafe {
            std::env::set_var("OPENAI_API_KEY", "test-key");
        }

        let config = Config::default();
        let result = config.validate();

        // SAFETY: serialized test, no concurrent env access
        unsafe {
            std::env::remove_var("OPENAI_API_KEY");
        }

        assert!(result.is_ok());
    }

    #[test]
    #[serial]
    fn test_get_api_key() {
        // SAFETY: serialized test, no concurrent env access
        unsafe {
            std::env::set_var("FOODGUIDE_TEST_KEY", "sk-test");
        }

        let mut config = LlmConfig::default();
        config.api_key_env = "FOODGUIDE_TEST_KEY".to_string();
        let key = config.get_api_key();

        // SAFETY: serialized test, no concurrent env access
        unsafe {
            std::env::remove_var("FOODGUIDE_TEST_KEY");
        }

        assert_eq!(key.unwrap(), "sk-test");
    }

    #[test]
    fn test_load_missing_file_errors() {
        let path = PathBuf::from("/nonexistent/foodguide.yml");
        assert!(Config::load(Some(&path)).is_err());
    }
}
