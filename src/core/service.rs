use crate::domain::model::{Customer, Subscription};
use crate::domain::ports::{PaymentProvider, SubscriptionStore};
use crate::utils::error::{Result, ServiceError};
use crate::utils::id::generate_id;

/// Sequences the payment provider and the store for the three use cases.
///
/// The provider is always called first; storage only ever records what the
/// provider has already confirmed. A storage failure after a successful
/// provider create is reported as-is and leaves the external record orphaned.
pub struct SubscriptionService<S: SubscriptionStore, P: PaymentProvider> {
    store: S,
    payment: P,
}

impl<S: SubscriptionStore, P: PaymentProvider> SubscriptionService<S, P> {
    pub fn new(store: S, payment: P) -> Self {
        Self { store, payment }
    }

    pub async fn create_customer(&self, email: &str) -> Result<Customer> {
        let external_customer_id =
            require_external_id(self.payment.create_customer(email).await?, "customer")?;
        tracing::debug!("Provider created customer {}", external_customer_id);

        let customer = Customer::new(generate_id(), external_customer_id);
        if let Err(e) = self.store.create_customer(&customer).await {
            tracing::warn!(
                "Customer {} exists at the provider but was not stored: {}",
                customer.external_customer_id,
                e
            );
            return Err(e);
        }

        tracing::info!(
            "Created customer {} (external {})",
            customer.customer_id,
            customer.external_customer_id
        );
        Ok(customer)
    }

    pub async fn subscribe_customer(&self, customer_id: &str, plan: &str) -> Result<Subscription> {
        let customer = self.require_customer(customer_id).await?;

        let external_subscription_id = require_external_id(
            self.payment.subscribe_customer(&customer, plan).await?,
            "subscription",
        )?;
        tracing::debug!(
            "Provider created subscription {} on plan {}",
            external_subscription_id,
            plan
        );

        let subscription = Subscription::new(
            generate_id(),
            customer.customer_id,
            external_subscription_id,
            plan.to_string(),
        );
        if let Err(e) = self.store.create_subscription(&subscription).await {
            tracing::warn!(
                "Subscription {} exists at the provider but was not stored: {}",
                subscription.external_subscription_id,
                e
            );
            return Err(e);
        }

        tracing::info!(
            "Subscribed customer {} to {} (subscription {})",
            subscription.customer_id,
            subscription.plan,
            subscription.subscription_id
        );
        Ok(subscription)
    }

    /// Returns the stored subscription with its status replaced by the provider's live value.
    /// The refreshed status is not written back.
    pub async fn subscription_status(
        &self,
        customer_id: &str,
        subscription_id: &str,
    ) -> Result<Subscription> {
        self.require_customer(customer_id).await?;

        let mut subscription = self
            .store
            .get_subscription(customer_id, subscription_id)
            .await?
            .ok_or_else(|| ServiceError::SubscriptionNotFound {
                subscription_id: subscription_id.to_string(),
            })?;

        subscription.status = self
            .payment
            .subscription_status(&subscription.external_subscription_id)
            .await?;
        tracing::debug!(
            "Subscription {} is {}",
            subscription.subscription_id,
            subscription.status
        );

        Ok(subscription)
    }

    async fn require_customer(&self, customer_id: &str) -> Result<Customer> {
        self.store
            .get_customer(customer_id)
            .await?
            .ok_or_else(|| ServiceError::CustomerNotFound {
                customer_id: customer_id.to_string(),
            })
    }
}

// 回應成功但內容無效，視同上游錯誤
const EMPTY_ID_STATUS: u16 = 502;

/// Stored records must always point at a real provider object.
fn require_external_id(external_id: String, kind: &str) -> Result<String> {
    if external_id.trim().is_empty() {
        tracing::error!("Provider returned an empty {} id", kind);
        return Err(ServiceError::PaymentProviderError {
            status: EMPTY_ID_STATUS,
            message: format!("provider returned an empty {} id", kind),
        });
    }
    Ok(external_id)
}
