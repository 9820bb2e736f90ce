pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use toml_config::TomlConfig;

pub const DEFAULT_CONTENT_BASE_URL: &str = "http://localhost:1337";
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "lakeside-content")]
#[command(about = "Content proxy for the lakeside resort site")]
pub struct ServerConfig {
    /// 內容服務的 base origin
    #[arg(long, env = "STRAPI_API_URL", default_value = DEFAULT_CONTENT_BASE_URL)]
    pub content_base_url: String,

    #[arg(long, env = "BIND_ADDRESS", default_value = DEFAULT_BIND_ADDRESS)]
    pub bind_address: String,

    /// 對內容服務每次請求的逾時秒數
    #[arg(long, default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    pub request_timeout_secs: u64,

    /// 沒有資料時改回傳內建的預設內容
    #[arg(long)]
    pub serve_fallbacks: bool,

    #[arg(long, default_value = "compact")]
    pub log_format: LogFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// TOML 設定檔；檔案中有設定的值會覆蓋命令列預設值
    #[arg(short, long)]
    #[serde(skip)]
    pub config: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            content_base_url: DEFAULT_CONTENT_BASE_URL.to_string(),
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            serve_fallbacks: false,
            log_format: LogFormat::default(),
            verbose: false,
            config: None,
        }
    }
}

impl ServerConfig {
    /// 指向特定內容服務的設定，其餘使用預設值
    pub fn for_origin(content_base_url: impl Into<String>) -> Self {
        Self {
            content_base_url: content_base_url.into(),
            ..Self::default()
        }
    }

    /// 若指定了設定檔，載入並套用
    pub fn resolve(mut self) -> Result<Self> {
        if let Some(path) = self.config.clone() {
            let file = TomlConfig::from_file(&path)?;
            file.validate()?;
            file.apply_to(&mut self);
            tracing::debug!("📁 Applied configuration file {}", path.display());
        }
        Ok(self)
    }
}

impl ConfigProvider for ServerConfig {
    fn content_base_url(&self) -> &str {
        &self.content_base_url
    }

    fn bind_address(&self) -> &str {
        &self.bind_address
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    fn serve_fallbacks(&self) -> bool {
        self.serve_fallbacks
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_origin("content_base_url", &self.content_base_url)?;
        validation::validate_socket_address("bind_address", &self.bind_address)?;
        validation::validate_range("request_timeout_secs", self.request_timeout_secs, 1, 120)?;
        Ok(())
    }
}
