use crate::domain::model::{Customer, Subscription};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::fmt;

/// Composite address of a record in the single table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemKey {
    pub partition: String,
    pub sort: String,
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.partition, self.sort)
    }
}

/// A stored record: attribute name to value, without the key attributes.
pub type Item = serde_json::Map<String, serde_json::Value>;

/// Raw key/value table with conditional puts.
///
/// `put` with `must_not_exist` fails with `ServiceError::Conflict` when the key
/// is taken. `get` returns `Ok(None)` for a missing key; `Err` is reserved for
/// transport failures.
pub trait KeyValueStore: Send + Sync + 'static {
    fn put(
        &self,
        key: ItemKey,
        item: Item,
        must_not_exist: bool,
    ) -> impl std::future::Future<Output = Result<()>> + Send;

    fn get(&self, key: ItemKey) -> impl std::future::Future<Output = Result<Option<Item>>> + Send;
}

/// Storage port used by the orchestration service.
#[async_trait]
pub trait SubscriptionStore: Send + Sync {
    async fn create_customer(&self, customer: &Customer) -> Result<()>;

    async fn get_customer(&self, customer_id: &str) -> Result<Option<Customer>>;

    async fn create_subscription(&self, subscription: &Subscription) -> Result<()>;

    /// Scoped to the customer: a subscription owned by someone else is `None`.
    async fn get_subscription(
        &self,
        customer_id: &str,
        subscription_id: &str,
    ) -> Result<Option<Subscription>>;
}

/// Payment capability backed by the external billing provider.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Returns the provider's customer id.
    async fn create_customer(&self, email: &str) -> Result<String>;

    /// Returns the provider's subscription id. Unknown plans fail before any provider call.
    async fn subscribe_customer(&self, customer: &Customer, plan: &str) -> Result<String>;

    async fn subscription_status(&self, external_subscription_id: &str) -> Result<String>;
}
