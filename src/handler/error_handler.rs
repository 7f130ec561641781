use crate::utils::error::ServiceError;
use serde::{Deserialize, Serialize};

pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_NOT_FOUND: u16 = 404;
pub const STATUS_CONFLICT: u16 = 409;
pub const STATUS_INTERNAL_ERROR: u16 = 500;
pub const STATUS_BAD_GATEWAY: u16 = 502;
pub const STATUS_GATEWAY_TIMEOUT: u16 = 504;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: u16,
    pub message: String,
}

/// Status code for each error kind the core can return.
pub fn status_code(err: &ServiceError) -> u16 {
    match err {
        ServiceError::CustomerNotFound { .. } | ServiceError::SubscriptionNotFound { .. } => {
            STATUS_NOT_FOUND
        }
        ServiceError::UnknownPlan { .. } | ServiceError::ValidationError { .. } => {
            STATUS_BAD_REQUEST
        }
        ServiceError::Conflict { .. } => STATUS_CONFLICT,
        ServiceError::PaymentProviderError { .. } | ServiceError::ApiError(_) => {
            STATUS_BAD_GATEWAY
        }
        ServiceError::StorageTimeout { .. } => STATUS_GATEWAY_TIMEOUT,
        ServiceError::StorageError { .. }
        | ServiceError::SerializationError(_)
        | ServiceError::IoError(_)
        | ServiceError::ConfigError { .. }
        | ServiceError::MissingConfigError { .. }
        | ServiceError::InvalidConfigValueError { .. } => STATUS_INTERNAL_ERROR,
    }
}

pub fn handle_error(err: &ServiceError) -> ErrorResponse {
    let code = status_code(err);
    if code >= STATUS_INTERNAL_ERROR {
        tracing::error!("Request failed ({}): {}", code, err);
    } else {
        tracing::debug!("Request rejected ({}): {}", code, err);
    }

    ErrorResponse {
        code,
        message: err.to_string(),
    }
}
