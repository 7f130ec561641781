#[cfg(feature = "cli")]
pub mod cli;
pub mod env;
pub mod toml_config;

use crate::domain::plan::PlanCatalog;
use crate::utils::error::{Result, ServiceError};
use crate::utils::validation::{
    validate_non_empty_string, validate_range, validate_url, Validate,
};
use std::fmt;
use std::time::Duration;

pub const DEFAULT_STRIPE_API_BASE: &str = "https://api.stripe.com";
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(5);
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const MAX_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub storage: StorageConfig,
    pub payment: PaymentConfig,
    pub plans: PlanCatalog,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StorageConfig {
    pub table: String,
    pub region: String,
    /// Overrides the DynamoDB endpoint, e.g. for DynamoDB Local.
    pub endpoint_url: Option<String>,
    pub query_timeout: Duration,
}

#[derive(Clone, PartialEq)]
pub struct PaymentConfig {
    pub api_base: String,
    pub secret_key: String,
    pub request_timeout: Duration,
}

// 不輸出金鑰
impl fmt::Debug for PaymentConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentConfig")
            .field("api_base", &self.api_base)
            .field("secret_key", &"***")
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

fn validate_timeout(field_name: &str, timeout: Duration) -> Result<()> {
    validate_range(
        field_name,
        timeout.as_millis(),
        1,
        MAX_TIMEOUT.as_millis(),
    )
}

impl Validate for StorageConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("storage.table", &self.table)?;
        validate_non_empty_string("storage.region", &self.region)?;
        if let Some(endpoint) = &self.endpoint_url {
            validate_url("storage.endpoint_url", endpoint)?;
        }
        validate_timeout("storage.query_timeout", self.query_timeout)
    }
}

impl Validate for PaymentConfig {
    fn validate(&self) -> Result<()> {
        validate_url("payment.api_base", &self.api_base)?;
        validate_non_empty_string("payment.secret_key", &self.secret_key)?;
        validate_timeout("payment.request_timeout", self.request_timeout)
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        self.storage.validate()?;
        self.payment.validate()?;

        if self.plans.is_empty() {
            return Err(ServiceError::ConfigError {
                message: "at least one plan must be configured".to_string(),
            });
        }
        for plan in self.plans.plans() {
            validate_non_empty_string("plans", plan)?;
            let price = self.plans.price_for(plan)?;
            validate_non_empty_string(&format!("plans.{}", plan), price)?;
        }

        tracing::debug!("Configuration validation passed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> AppConfig {
        AppConfig {
            storage: StorageConfig {
                table: "subscriptions".to_string(),
                region: "eu-west-1".to_string(),
                endpoint_url: None,
                query_timeout: DEFAULT_QUERY_TIMEOUT,
            },
            payment: PaymentConfig {
                api_base: DEFAULT_STRIPE_API_BASE.to_string(),
                secret_key: "sk_test_123".to_string(),
                request_timeout: DEFAULT_REQUEST_TIMEOUT,
            },
            plans: PlanCatalog::default(),
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(sample_config().validate().is_ok());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let mut config = sample_config();
        config.storage.table = " ".to_string();
        assert!(config.validate().is_err());

        let mut config = sample_config();
        config.storage.endpoint_url = Some("localhost:8000".to_string());
        assert!(config.validate().is_err());

        let mut config = sample_config();
        config.payment.request_timeout = Duration::from_secs(600);
        assert!(config.validate().is_err());

        let mut config = sample_config();
        config.plans = PlanCatalog::new(Vec::<(String, String)>::new());
        assert!(matches!(
            config.validate(),
            Err(ServiceError::ConfigError { .. })
        ));

        let mut config = sample_config();
        config.plans = PlanCatalog::new([("Core", "")]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_hides_secret_key() {
        let rendered = format!("{:?}", sample_config().payment);
        assert!(!rendered.contains("sk_test_123"));
        assert!(rendered.contains("***"));
    }
}
