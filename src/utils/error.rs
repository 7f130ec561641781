use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("customer '{customer_id}' not found")]
    CustomerNotFound { customer_id: String },

    #[error("subscription '{subscription_id}' not found")]
    SubscriptionNotFound { subscription_id: String },

    #[error("unknown plan: {plan}")]
    UnknownPlan { plan: String },

    #[error("record already exists: {partition} / {sort}")]
    Conflict { partition: String, sort: String },

    #[error("Payment provider error ({status}): {message}")]
    PaymentProviderError { status: u16, message: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Storage error: {message}")]
    StorageError { message: String },

    #[error("Storage operation '{operation}' timed out after {timeout:?}")]
    StorageTimeout {
        operation: &'static str,
        timeout: Duration,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    NotFound,
    Validation,
    Conflict,
    Transport,
    Configuration,
}

impl ServiceError {
    pub fn storage(message: impl Into<String>) -> Self {
        Self::StorageError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::CustomerNotFound { .. } | Self::SubscriptionNotFound { .. } => {
                ErrorCategory::NotFound
            }
            Self::UnknownPlan { .. } | Self::ValidationError { .. } => ErrorCategory::Validation,
            Self::Conflict { .. } => ErrorCategory::Conflict,
            Self::PaymentProviderError { .. }
            | Self::ApiError(_)
            | Self::StorageError { .. }
            | Self::StorageTimeout { .. }
            | Self::SerializationError(_) => ErrorCategory::Transport,
            Self::IoError(_)
            | Self::ConfigError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.category() == ErrorCategory::NotFound
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::CustomerNotFound { .. } => "Check the customer id or create the customer first",
            Self::SubscriptionNotFound { .. } => {
                "Check that the subscription id belongs to this customer"
            }
            Self::UnknownPlan { .. } => "Use one of the configured plans (Core, Growth, Premium)",
            Self::Conflict { .. } => "A record with this id already exists; retry with a new id",
            Self::PaymentProviderError { .. } | Self::ApiError(_) => {
                "Check the payment provider key and its status page, then retry"
            }
            Self::StorageError { .. } | Self::StorageTimeout { .. } => {
                "Check table availability and the configured query timeout"
            }
            Self::SerializationError(_) => "The stored record has an unexpected shape",
            Self::IoError(_) => "Check that the file exists and is readable",
            Self::ConfigError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. } => {
                "Fix the configuration file or environment variables"
            }
            Self::ValidationError { .. } => "Correct the request and send it again",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::NotFound | ErrorCategory::Validation | ErrorCategory::Conflict => {
                self.to_string()
            }
            ErrorCategory::Transport => format!("Upstream service failure: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_messages() {
        let err = ServiceError::CustomerNotFound {
            customer_id: "c1".to_string(),
        };
        assert_eq!(err.to_string(), "customer 'c1' not found");
        assert!(err.is_not_found());

        let err = ServiceError::SubscriptionNotFound {
            subscription_id: "s1".to_string(),
        };
        assert_eq!(err.to_string(), "subscription 's1' not found");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_categories() {
        let plan = ServiceError::UnknownPlan {
            plan: "Gold".to_string(),
        };
        assert_eq!(plan.category(), ErrorCategory::Validation);
        assert!(!plan.is_not_found());

        let conflict = ServiceError::Conflict {
            partition: "CUSTOMER#a".to_string(),
            sort: "CUSTOMER#a".to_string(),
        };
        assert_eq!(conflict.category(), ErrorCategory::Conflict);

        let timeout = ServiceError::StorageTimeout {
            operation: "get_customer",
            timeout: Duration::from_millis(10),
        };
        assert_eq!(timeout.category(), ErrorCategory::Transport);
        assert!(timeout.user_friendly_message().starts_with("Upstream"));
    }
}
