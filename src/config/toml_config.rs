use crate::config::ClientConfig;
use crate::utils::error::{ApiError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk configuration.
///
/// ```toml
/// [client]
/// base_url = "${CONTENT_SEARCH_URL}"
/// timeout_secs = 10
/// send_cors_headers = false
///
/// [logging]
/// format = "json"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub client: ClientSection,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientSection {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
    pub send_cors_headers: Option<bool>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
    #[serde(default)]
    pub verbose: bool,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content)
            .map_err(|e| ApiError::config(format!("TOML parsing error: {}", e)))
    }

    /// Replaces `${VAR}` with the variable's value. Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| ApiError::config(format!("Invalid substitution pattern: {}", e)))?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Layers the `[client]` table over `base`.
    pub fn apply_to(&self, mut base: ClientConfig) -> ClientConfig {
        if let Some(url) = &self.client.base_url {
            base.base_url = url.clone();
        }
        if let Some(timeout_secs) = self.client.timeout_secs {
            base.timeout_secs = timeout_secs;
        }
        if let Some(user_agent) = &self.client.user_agent {
            base.user_agent = user_agent.clone();
        }
        if let Some(enabled) = self.client.send_cors_headers {
            base.send_cors_headers = enabled;
        }
        base
    }

    pub fn client_config(&self) -> Result<ClientConfig> {
        let config = self.apply_to(ClientConfig::default());
        config.validate()?;
        Ok(config)
    }

    pub fn logging(&self) -> LoggingConfig {
        self.logging.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_file() {
        let config = TomlConfig::from_toml_str(
            r#"
[client]
base_url = "https://bff.example.com"
timeout_secs = 10
user_agent = "marketplace-web"
send_cors_headers = false

[logging]
format = "json"
verbose = true
"#,
        )
        .unwrap();

        let client = config.client_config().unwrap();
        assert_eq!(client.base_url, "https://bff.example.com");
        assert_eq!(client.timeout_secs, 10);
        assert_eq!(client.user_agent, "marketplace-web");
        assert!(!client.send_cors_headers);

        let logging = config.logging();
        assert_eq!(logging.format, LogFormat::Json);
        assert!(logging.verbose);
    }

    #[test]
    fn test_missing_tables_fall_back_to_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        let client = config.client_config().unwrap();
        assert_eq!(client, ClientConfig::default());
        assert_eq!(config.logging().format, LogFormat::Compact);
    }

    #[test]
    fn test_env_substitution() {
        std::env::set_var("CSC_TOML_TEST_URL", "https://from-env.example.com");
        let config = TomlConfig::from_toml_str(
            r#"
[client]
base_url = "${CSC_TOML_TEST_URL}"
"#,
        )
        .unwrap();
        assert_eq!(
            config.client.base_url.as_deref(),
            Some("https://from-env.example.com")
        );
        std::env::remove_var("CSC_TOML_TEST_URL");
    }

    #[test]
    fn test_unset_variable_is_left_in_place() {
        let config = TomlConfig::from_toml_str(
            r#"
[client]
base_url = "${CSC_SURELY_NOT_SET_ANYWHERE}"
"#,
        )
        .unwrap();
        assert_eq!(
            config.client.base_url.as_deref(),
            Some("${CSC_SURELY_NOT_SET_ANYWHERE}")
        );
        assert!(config.client_config().is_err());
    }

    #[test]
    fn test_invalid_toml() {
        let err = TomlConfig::from_toml_str("[client\nbase_url = 1").unwrap_err();
        assert!(matches!(err, ApiError::ConfigError { .. }));
    }
}
