//! 配置服务
//!
//! 配置文件位于 `<config_dir>/domain-inventory/config.json`，所有字段可省略。
//! 环境变量 `DOMAIN_INVENTORY_URL` / `DOMAIN_INVENTORY_TOKEN` 优先于文件。

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use domain_inventory_core::types::InventorySettings;
use domain_inventory_store::HttpStoreConfig;
use serde::{Deserialize, Serialize};

use crate::view::theme::Theme;

const APP_DIR: &str = "domain-inventory";
const CONFIG_FILE: &str = "config.json";
const LOG_FILE: &str = "tui.log";

pub const ENV_URL: &str = "DOMAIN_INVENTORY_URL";
pub const ENV_TOKEN: &str = "DOMAIN_INVENTORY_TOKEN";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub support_validation_delay_ms: u64,
    pub theme: Theme,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        let store = HttpStoreConfig::default();
        Self {
            base_url: store.base_url,
            api_token: None,
            request_timeout_secs: store.request_timeout.as_secs(),
            connect_timeout_secs: store.connect_timeout.as_secs(),
            support_validation_delay_ms: 800,
            theme: Theme::Dark,
            log_file: None,
        }
    }
}

impl AppConfig {
    /// 用环境变量覆盖（空值忽略）
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(ENV_URL).filter(|v| !v.trim().is_empty()) {
            self.base_url = url.trim().to_string();
        }
        if let Some(token) = lookup(ENV_TOKEN).filter(|v| !v.trim().is_empty()) {
            self.api_token = Some(token.trim().to_string());
        }
    }

    pub fn store_config(&self) -> HttpStoreConfig {
        HttpStoreConfig {
            base_url: self.base_url.clone(),
            api_token: self.api_token.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }

    pub fn inventory_settings(&self) -> InventorySettings {
        InventorySettings {
            support_validation_delay: Duration::from_millis(self.support_validation_delay_ms),
        }
    }

    /// 日志文件路径，未配置时放在数据目录下
    pub fn log_file_path(&self) -> PathBuf {
        self.log_file.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APP_DIR)
                .join(LOG_FILE)
        })
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 本地 JSON 文件配置服务
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    pub fn new() -> Self {
        Self::with_path(default_config_path())
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 只读文件，不应用环境变量
    fn read_file(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            return Ok(AppConfig::default());
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Malformed config file {}", self.path.display()))
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        let mut config = self.read_file()?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }

        let content = serde_json::to_string_pretty(config)?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;

        Ok(())
    }
}

/// 获取配置文件路径
fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(CONFIG_FILE)
}
