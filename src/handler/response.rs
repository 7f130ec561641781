use crate::domain::model::{Customer, Subscription};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerResponse {
    pub customer_id: String,
    pub external_customer_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscribeCustomerResponse {
    pub subscription_id: String,
    pub external_subscription_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionStatusResponse {
    pub subscription_id: String,
    pub external_subscription_id: String,
    pub plan: String,
    pub status: String,
}

impl From<Customer> for CreateCustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            customer_id: customer.customer_id,
            external_customer_id: customer.external_customer_id,
        }
    }
}

impl From<Subscription> for SubscribeCustomerResponse {
    fn from(subscription: Subscription) -> Self {
        Self {
            subscription_id: subscription.subscription_id,
            external_subscription_id: subscription.external_subscription_id,
        }
    }
}

impl From<Subscription> for SubscriptionStatusResponse {
    fn from(subscription: Subscription) -> Self {
        Self {
            subscription_id: subscription.subscription_id,
            external_subscription_id: subscription.external_subscription_id,
            plan: subscription.plan,
            status: subscription.status,
        }
    }
}

/// Transport-neutral envelope: a status code and a JSON body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub status_code: u16,
    pub body: serde_json::Value,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}
