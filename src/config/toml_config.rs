use crate::config::ServerConfig;
use crate::utils::error::{ContentError, Result};
use crate::utils::logger::LogFormat;
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 設定檔格式；每個欄位都可省略，省略時沿用命令列或預設值
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub server: ServerSection,
    pub content: ContentSection,
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub bind_address: Option<String>,
    pub serve_fallbacks: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentSection {
    pub base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub format: Option<LogFormat>,
    pub verbose: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ContentError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ContentError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${STRAPI_API_URL})；未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ContentError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        if let Some(base_url) = &self.content.base_url {
            validation::validate_origin("content.base_url", base_url)?;
        }

        if let Some(bind_address) = &self.server.bind_address {
            validation::validate_socket_address("server.bind_address", bind_address)?;
        }

        if let Some(timeout) = self.content.timeout_seconds {
            validation::validate_range("content.timeout_seconds", timeout, 1, 120)?;
        }

        Ok(())
    }

    /// 將檔案中有設定的值寫入 `ServerConfig`
    pub fn apply_to(&self, config: &mut ServerConfig) {
        if let Some(base_url) = &self.content.base_url {
            config.content_base_url = base_url.clone();
        }
        if let Some(timeout) = self.content.timeout_seconds {
            config.request_timeout_secs = timeout;
        }
        if let Some(bind_address) = &self.server.bind_address {
            config.bind_address = bind_address.clone();
        }
        if let Some(serve_fallbacks) = self.server.serve_fallbacks {
            config.serve_fallbacks = serve_fallbacks;
        }
        if let Some(format) = self.logging.format {
            config.log_format = format;
        }
        if let Some(verbose) = self.logging.verbose {
            config.verbose = verbose;
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[server]
bind_address = "127.0.0.1:4000"
serve_fallbacks = true

[content]
base_url = "https://cms.example.com"
timeout_seconds = 5

[logging]
format = "json"
verbose = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(
            config.content.base_url.as_deref(),
            Some("https://cms.example.com")
        );
        assert_eq!(config.content.timeout_seconds, Some(5));
        assert_eq!(config.logging.format, Some(LogFormat::Json));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_sections_are_optional() {
        let config = TomlConfig::from_toml_str("[content]\ntimeout_seconds = 3\n").unwrap();
        assert_eq!(config.server.bind_address, None);

        let mut server = ServerConfig::default();
        config.apply_to(&mut server);
        assert_eq!(server.request_timeout_secs, 3);
        assert_eq!(server.bind_address, crate::config::DEFAULT_BIND_ADDRESS);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("LAKESIDE_TEST_CMS_URL", "https://cms.test.example.com");

        let toml_content = r#"
[content]
base_url = "${LAKESIDE_TEST_CMS_URL}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.content.base_url.as_deref(),
            Some("https://cms.test.example.com")
        );

        std::env::remove_var("LAKESIDE_TEST_CMS_URL");
    }

    #[test]
    fn test_unset_env_var_is_kept_and_fails_validation() {
        let toml_content = r#"
[content]
base_url = "${LAKESIDE_SURELY_UNSET_VARIABLE}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.content.base_url.as_deref(),
            Some("${LAKESIDE_SURELY_UNSET_VARIABLE}")
        );
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str("[content]\ntimeout_seconds = 0\n").unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str("[server]\nbind_address = \"nowhere\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[content\nbase_url = 1").unwrap_err();
        assert!(matches!(err, ContentError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[content]
base_url = "http://cms.internal:1337"

[server]
serve_fallbacks = true
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = ServerConfig {
            config: Some(temp_file.path().to_path_buf()),
            ..ServerConfig::default()
        }
        .resolve()
        .unwrap();

        assert_eq!(config.content_base_url, "http://cms.internal:1337");
        assert!(config.serve_fallbacks);
    }
}
