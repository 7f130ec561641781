use crate::domain::model::{Customer, Subscription};
use crate::domain::ports::Item;
use crate::utils::error::{Result, ServiceError};
use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

// 資料表欄位沿用 PascalCase 命名
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomerEntity {
    pub customer_id: String,
    pub external_customer_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SubscriptionEntity {
    pub subscription_id: String,
    pub customer_id: String,
    pub external_subscription_id: String,
    pub plan: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Customer> for CustomerEntity {
    fn from(customer: &Customer) -> Self {
        Self {
            customer_id: customer.customer_id.clone(),
            external_customer_id: customer.external_customer_id.clone(),
            created_at: customer.created_at,
            updated_at: customer.updated_at,
        }
    }
}

impl From<CustomerEntity> for Customer {
    fn from(entity: CustomerEntity) -> Self {
        Self {
            customer_id: entity.customer_id,
            external_customer_id: entity.external_customer_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

impl From<&Subscription> for SubscriptionEntity {
    fn from(subscription: &Subscription) -> Self {
        Self {
            subscription_id: subscription.subscription_id.clone(),
            customer_id: subscription.customer_id.clone(),
            external_subscription_id: subscription.external_subscription_id.clone(),
            plan: subscription.plan.clone(),
            status: subscription.status.clone(),
            created_at: subscription.created_at,
            updated_at: subscription.updated_at,
        }
    }
}

impl From<SubscriptionEntity> for Subscription {
    fn from(entity: SubscriptionEntity) -> Self {
        Self {
            subscription_id: entity.subscription_id,
            customer_id: entity.customer_id,
            external_subscription_id: entity.external_subscription_id,
            plan: entity.plan,
            status: entity.status,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

pub fn to_item<T: Serialize>(entity: &T) -> Result<Item> {
    match serde_json::to_value(entity)? {
        serde_json::Value::Object(map) => Ok(map),
        other => Err(ServiceError::storage(format!(
            "entity did not serialize to an object: {}",
            other
        ))),
    }
}

pub fn from_item<T: DeserializeOwned>(item: Item) -> Result<T> {
    Ok(serde_json::from_value(serde_json::Value::Object(item))?)
}
