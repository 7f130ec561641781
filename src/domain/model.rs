use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status seeded on a freshly created subscription, before the provider is asked.
pub const SUBSCRIPTION_STATUS_NEW: &str = "new";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: String,
    pub external_customer_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    pub fn new(customer_id: String, external_customer_id: String) -> Self {
        let now = Utc::now();
        Self {
            customer_id,
            external_customer_id,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub subscription_id: String,
    pub customer_id: String,
    pub external_subscription_id: String,
    pub plan: String,
    /// Provider-reported state. Only the value returned by a status query is current.
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Subscription {
    pub fn new(
        subscription_id: String,
        customer_id: String,
        external_subscription_id: String,
        plan: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            subscription_id,
            customer_id,
            external_subscription_id,
            plan,
            status: SUBSCRIPTION_STATUS_NEW.to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}
