use crate::config::{
    AppConfig, PaymentConfig, StorageConfig, DEFAULT_REQUEST_TIMEOUT, DEFAULT_STRIPE_API_BASE,
};
use crate::domain::plan::PlanCatalog;
use crate::utils::error::{Result, ServiceError};
use crate::utils::validation::parse_duration;

pub const AWS_REGION: &str = "AWS_REGION";
pub const DYNAMO_ENDPOINT: &str = "DYNAMO_ENDPOINT";
pub const DYNAMO_SUBSCRIPTION_TABLE: &str = "DYNAMO_SUBSCRIPTION_TABLE";
pub const DYNAMO_SUBSCRIPTION_TIMEOUT: &str = "DYNAMO_SUBSCRIPTION_TIMEOUT";
pub const STRIPE_SECRET_KEY: &str = "STRIPE_SECRET_KEY";
pub const STRIPE_API_BASE: &str = "STRIPE_API_BASE";
pub const STRIPE_TIMEOUT: &str = "STRIPE_TIMEOUT";

impl AppConfig {
    /// Reads configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &str| {
            optional(key).ok_or_else(|| ServiceError::MissingConfigError {
                field: key.to_string(),
            })
        };

        let query_timeout = parse_duration(
            DYNAMO_SUBSCRIPTION_TIMEOUT,
            &required(DYNAMO_SUBSCRIPTION_TIMEOUT)?,
        )?;
        let request_timeout = match optional(STRIPE_TIMEOUT) {
            Some(raw) => parse_duration(STRIPE_TIMEOUT, &raw)?,
            None => DEFAULT_REQUEST_TIMEOUT,
        };

        Ok(Self {
            storage: StorageConfig {
                table: required(DYNAMO_SUBSCRIPTION_TABLE)?,
                region: required(AWS_REGION)?,
                endpoint_url: optional(DYNAMO_ENDPOINT),
                query_timeout,
            },
            payment: PaymentConfig {
                api_base: optional(STRIPE_API_BASE)
                    .unwrap_or_else(|| DEFAULT_STRIPE_API_BASE.to_string()),
                secret_key: required(STRIPE_SECRET_KEY)?,
                request_timeout,
            },
            plans: PlanCatalog::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::time::Duration;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    const BASE: [(&str, &str); 4] = [
        (AWS_REGION, "eu-west-1"),
        (DYNAMO_SUBSCRIPTION_TABLE, "subscriptions"),
        (DYNAMO_SUBSCRIPTION_TIMEOUT, "3s"),
        (STRIPE_SECRET_KEY, "sk_test_env"),
    ];

    #[test]
    fn test_from_lookup_with_required_vars() {
        let config = AppConfig::from_lookup(lookup(&BASE)).unwrap();

        assert_eq!(config.storage.region, "eu-west-1");
        assert_eq!(config.storage.table, "subscriptions");
        assert_eq!(config.storage.query_timeout, Duration::from_secs(3));
        assert_eq!(config.storage.endpoint_url, None);
        assert_eq!(config.payment.api_base, DEFAULT_STRIPE_API_BASE);
        assert_eq!(config.payment.request_timeout, DEFAULT_REQUEST_TIMEOUT);
    }

    #[test]
    fn test_optional_vars_override_defaults() {
        let mut vars = BASE.to_vec();
        vars.push((DYNAMO_ENDPOINT, "http://localhost:8000"));
        vars.push((STRIPE_API_BASE, "http://localhost:12111"));
        vars.push((STRIPE_TIMEOUT, "750ms"));

        let config = AppConfig::from_lookup(lookup(&vars)).unwrap();

        assert_eq!(
            config.storage.endpoint_url.as_deref(),
            Some("http://localhost:8000")
        );
        assert_eq!(config.payment.api_base, "http://localhost:12111");
        assert_eq!(config.payment.request_timeout, Duration::from_millis(750));
    }

    #[test]
    fn test_missing_required_var() {
        let vars: Vec<_> = BASE
            .iter()
            .copied()
            .filter(|(k, _)| *k != STRIPE_SECRET_KEY)
            .collect();

        let err = AppConfig::from_lookup(lookup(&vars)).unwrap_err();
        assert!(matches!(
            err,
            ServiceError::MissingConfigError { ref field } if field == STRIPE_SECRET_KEY
        ));
    }

    #[test]
    fn test_invalid_timeout() {
        let mut vars = BASE.to_vec();
        vars.retain(|(k, _)| *k != DYNAMO_SUBSCRIPTION_TIMEOUT);
        vars.push((DYNAMO_SUBSCRIPTION_TIMEOUT, "soon"));

        let err = AppConfig::from_lookup(lookup(&vars)).unwrap_err();
        assert!(matches!(err, ServiceError::InvalidConfigValueError { .. }));
    }
}
