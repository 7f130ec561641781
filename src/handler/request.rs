use crate::utils::error::{Result, ServiceError};
use crate::utils::validation::{validate_email, Validate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCustomerRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscribeCustomerRequest {
    pub plan: String,
}

impl Validate for CreateCustomerRequest {
    fn validate(&self) -> Result<()> {
        validate_email(self.email.trim())
    }
}

impl Validate for SubscribeCustomerRequest {
    fn validate(&self) -> Result<()> {
        // 方案名稱由 PlanCatalog 檢查
        if self.plan.is_empty() {
            return Err(ServiceError::ValidationError {
                message: "plan is required".to_string(),
            });
        }
        Ok(())
    }
}

/// One call into the service, as carried by a Lambda event or built by the CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "action",
    rename_all = "snake_case",
    rename_all_fields = "camelCase"
)]
pub enum ApiRequest {
    CreateCustomer {
        email: String,
    },
    SubscribeCustomer {
        customer_id: String,
        plan: String,
    },
    SubscriptionStatus {
        customer_id: String,
        subscription_id: String,
    },
}

pub(crate) fn require_path_param(name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ServiceError::ValidationError {
            message: format!("{} is required", name),
        });
    }
    Ok(())
}
