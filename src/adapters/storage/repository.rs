use crate::adapters::storage::entity::{from_item, to_item, CustomerEntity, SubscriptionEntity};
use crate::adapters::storage::keys::{customer_key, subscription_key};
use crate::domain::model::{Customer, Subscription};
use crate::domain::ports::{KeyValueStore, SubscriptionStore};
use crate::utils::error::{Result, ServiceError};
use async_trait::async_trait;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// Storage port over a single key/value table.
///
/// Every call runs on its own task under a fresh `query_timeout`. Dropping the
/// caller's future does not cancel a write that has already been handed to
/// the store; the task keeps running until it finishes or times out.
pub struct SubscriptionRepository<K: KeyValueStore> {
    store: Arc<K>,
    query_timeout: Duration,
}

impl<K: KeyValueStore> SubscriptionRepository<K> {
    pub fn new(store: Arc<K>, query_timeout: Duration) -> Self {
        Self {
            store,
            query_timeout,
        }
    }

    pub fn store(&self) -> &Arc<K> {
        &self.store
    }

    async fn detached<T, F, Fut>(&self, operation: &'static str, call: F) -> Result<T>
    where
        F: FnOnce(Arc<K>) -> Fut,
        Fut: Future<Output = Result<T>> + Send + 'static,
        T: Send + 'static,
    {
        let timeout = self.query_timeout;
        let fut = call(Arc::clone(&self.store));
        let handle = tokio::spawn(async move { tokio::time::timeout(timeout, fut).await });

        match handle.await {
            Ok(Ok(result)) => result,
            Ok(Err(_elapsed)) => {
                tracing::error!("{} timed out after {:?}", operation, timeout);
                Err(ServiceError::StorageTimeout { operation, timeout })
            }
            Err(join_err) => Err(ServiceError::storage(format!(
                "{} task failed: {}",
                operation, join_err
            ))),
        }
    }
}

#[async_trait]
impl<K: KeyValueStore> SubscriptionStore for SubscriptionRepository<K> {
    async fn create_customer(&self, customer: &Customer) -> Result<()> {
        let key = customer_key(&customer.customer_id);
        let item = to_item(&CustomerEntity::from(customer))?;
        tracing::debug!("Putting customer row {}", key);

        self.detached("create_customer", move |store| async move {
            store.put(key, item, true).await
        })
        .await
    }

    async fn get_customer(&self, customer_id: &str) -> Result<Option<Customer>> {
        let key = customer_key(customer_id);
        tracing::debug!("Getting customer row {}", key);

        let item = self
            .detached("get_customer", move |store| async move { store.get(key).await })
            .await?;

        item.map(|item| from_item::<CustomerEntity>(item).map(Customer::from))
            .transpose()
    }

    async fn create_subscription(&self, subscription: &Subscription) -> Result<()> {
        let key = subscription_key(&subscription.customer_id, &subscription.subscription_id);
        let item = to_item(&SubscriptionEntity::from(subscription))?;
        tracing::debug!("Putting subscription row {}", key);

        self.detached("create_subscription", move |store| async move {
            store.put(key, item, true).await
        })
        .await
    }

    async fn get_subscription(
        &self,
        customer_id: &str,
        subscription_id: &str,
    ) -> Result<Option<Subscription>> {
        let key = subscription_key(customer_id, subscription_id);
        tracing::debug!("Getting subscription row {}", key);

        let item = self
            .detached("get_subscription", move |store| async move {
                store.get(key).await
            })
            .await?;

        let subscription = item
            .map(|item| from_item::<SubscriptionEntity>(item).map(Subscription::from))
            .transpose()?;

        Ok(subscription.filter(|s| s.customer_id == customer_id))
    }
}
