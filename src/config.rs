//! 配置模块
//!
//! 配置文件使用 TOML 格式，所有配置段都有默认值，可以只写需要覆盖的部分。

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// 指定配置文件路径的环境变量
pub const CONFIG_ENV: &str = "SHOPFRONT_CONFIG";

/// 系统配置结构
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP 服务配置
    pub http: HttpConfig,
    /// 日志配置
    pub logging: LoggingConfig,
    /// 存储配置
    pub storage: StorageConfig,
    /// 商店定价配置
    pub shop: ShopConfig,
    /// 支付配置
    pub payment: PaymentConfig,
}

/// HTTP 服务配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// 绑定地址
    pub bind_address: String,
    /// HTTP 服务端口
    pub port: u16,
    /// 请求超时时间（秒）
    pub timeout_seconds: u64,
    /// 允许跨域的来源，空列表表示允许任意来源
    pub cors_origins: Vec<String>,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别 (trace, debug, info, warn, error)
    pub level: String,
    /// 日志目录，未设置时只输出到控制台
    pub log_dir: Option<PathBuf>,
    /// 日志文件名前缀
    pub file_prefix: String,
    /// 是否启用控制台输出
    pub console_output: bool,
}

/// 存储配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// JSON 快照文件，启动时加载，退出时写回
    pub snapshot_path: Option<PathBuf>,
}

/// 商店定价配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    /// 货币代码
    pub currency: String,
    /// 税率
    pub tax_rate: f64,
    /// 运费
    pub shipping_fee: f64,
    /// 折后金额超过该值免运费
    pub free_shipping_threshold: f64,
}

/// 支付配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentConfig {
    /// 返回给前端的支付网关公钥
    pub key_id: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 8000,
            timeout_seconds: 30,
            cors_origins: vec!["http://localhost:3000".to_string()],
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_dir: None,
            file_prefix: "shopfront".to_string(),
            console_output: true,
        }
    }
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            currency: "INR".to_string(),
            tax_rate: 0.18,
            shipping_fee: 99.0,
            free_shipping_threshold: 5000.0,
        }
    }
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            key_id: "YOUR_TEST_KEY_ID".to_string(),
        }
    }
}

impl HttpConfig {
    /// 监听地址，例如 `127.0.0.1:8000`
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

impl Config {
    /// 从配置文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileRead(e.to_string()))?;

        let config: Config =
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        Ok(config)
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;

        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::FileWrite(e.to_string()))?;
        }

        fs::write(path.as_ref(), content).map_err(|e| ConfigError::FileWrite(e.to_string()))?;

        Ok(())
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.port == 0 {
            return Err(ConfigError::Validation("HTTP port must be greater than 0".to_string()));
        }
        if self.http.bind_address.is_empty() {
            return Err(ConfigError::Validation("bind address must not be empty".to_string()));
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "invalid log level: {}, expected one of {:?}",
                self.logging.level, valid_levels
            )));
        }

        if !(0.0..=1.0).contains(&self.shop.tax_rate) {
            return Err(ConfigError::Validation(format!(
                "tax rate must be within [0, 1], got {}",
                self.shop.tax_rate
            )));
        }
        if self.shop.shipping_fee < 0.0 || self.shop.free_shipping_threshold < 0.0 {
            return Err(ConfigError::Validation(
                "shipping fee and free shipping threshold must not be negative".to_string(),
            ));
        }
        if self.shop.currency.is_empty() {
            return Err(ConfigError::Validation("currency must not be empty".to_string()));
        }

        Ok(())
    }
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    FileRead(String),
    #[error("failed to write config file: {0}")]
    FileWrite(String),
    #[error("failed to parse config: {0}")]
    Parse(String),
    #[error("failed to serialize config: {0}")]
    Serialize(String),
    #[error("invalid config: {0}")]
    Validation(String),
}

/// 从文件或默认值加载配置并验证
///
/// 查找顺序：`$SHOPFRONT_CONFIG`、`config.toml`、`config/config.toml`。
pub fn load_config() -> Result<Config, ConfigError> {
    let config = match std::env::var(CONFIG_ENV) {
        Ok(path) => {
            info!("loading config from {} ({})", path, CONFIG_ENV);
            Config::load_from_file(&path)?
        }
        Err(_) => load_from_default_paths()?,
    };

    config.validate()?;
    Ok(config)
}

fn load_from_default_paths() -> Result<Config, ConfigError> {
    let config_paths = ["config.toml", "./config/config.toml"];

    for path in &config_paths {
        if Path::new(path).exists() {
            info!("loading config from {}", path);
            return Config::load_from_file(path);
        }
    }

    info!("no config file found, using defaults");
    Ok(Config::default())
}
