use crate::config::{
    AppConfig, PaymentConfig, StorageConfig, DEFAULT_QUERY_TIMEOUT, DEFAULT_REQUEST_TIMEOUT,
    DEFAULT_STRIPE_API_BASE,
};
use crate::domain::plan::PlanCatalog;
use crate::utils::error::{Result, ServiceError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static ENV_VAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub storage: TomlStorageConfig,
    pub payment: TomlPaymentConfig,
    pub plans: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlStorageConfig {
    pub table: String,
    pub region: String,
    pub endpoint_url: Option<String>,
    pub query_timeout_ms: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlPaymentConfig {
    pub api_base: Option<String>,
    pub secret_key: String,
    pub request_timeout_ms: Option<u64>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ServiceError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${STRIPE_SECRET_KEY})，未設定的保留原文
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_RE
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn into_app_config(self) -> AppConfig {
        let plans = match self.plans {
            Some(prices) if !prices.is_empty() => PlanCatalog::new(prices),
            _ => PlanCatalog::default(),
        };

        AppConfig {
            storage: StorageConfig {
                table: self.storage.table,
                region: self.storage.region,
                endpoint_url: self.storage.endpoint_url.filter(|url| !url.is_empty()),
                query_timeout: self
                    .storage
                    .query_timeout_ms
                    .map(Duration::from_millis)
                    .unwrap_or(DEFAULT_QUERY_TIMEOUT),
            },
            payment: PaymentConfig {
                api_base: self
                    .payment
                    .api_base
                    .unwrap_or_else(|| DEFAULT_STRIPE_API_BASE.to_string()),
                secret_key: self.payment.secret_key,
                request_timeout: self
                    .payment
                    .request_timeout_ms
                    .map(Duration::from_millis)
                    .unwrap_or(DEFAULT_REQUEST_TIMEOUT),
            },
            plans,
        }
    }
}

impl AppConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(TomlConfig::from_file(path)?.into_app_config())
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(TomlConfig::from_toml_str(content)?.into_app_config())
    }
}
