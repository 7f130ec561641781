use crate::adapters::payment::stripe::StripeApi;
use crate::domain::model::Customer;
use crate::domain::plan::PlanCatalog;
use crate::domain::ports::PaymentProvider;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Payment capability over the Stripe API, with plan names resolved through the catalog.
pub struct StripePaymentProvider<A: StripeApi> {
    api: A,
    catalog: PlanCatalog,
}

impl<A: StripeApi> StripePaymentProvider<A> {
    pub fn new(api: A, catalog: PlanCatalog) -> Self {
        Self { api, catalog }
    }
}

#[async_trait]
impl<A: StripeApi> PaymentProvider for StripePaymentProvider<A> {
    async fn create_customer(&self, email: &str) -> Result<String> {
        self.api.create_customer(email).await
    }

    async fn subscribe_customer(&self, customer: &Customer, plan: &str) -> Result<String> {
        let price = self.catalog.price_for(plan)?;
        tracing::debug!("Plan {} resolved to price {}", plan, price);
        self.api
            .create_subscription(&customer.external_customer_id, price)
            .await
    }

    async fn subscription_status(&self, external_subscription_id: &str) -> Result<String> {
        self.api.get_subscription_status(external_subscription_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ServiceError;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct RecordingApi {
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl RecordingApi {
        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl StripeApi for RecordingApi {
        async fn create_customer(&self, email: &str) -> Result<String> {
            self.calls.lock().unwrap().push(format!("customer:{}", email));
            Ok("cus_1".to_string())
        }

        async fn create_subscription(
            &self,
            external_customer_id: &str,
            price_id: &str,
        ) -> Result<String> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("subscription:{}:{}", external_customer_id, price_id));
            Ok("sub_1".to_string())
        }

        async fn get_subscription_status(&self, external_subscription_id: &str) -> Result<String> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("status:{}", external_subscription_id));
            Err(ServiceError::PaymentProviderError {
                status: 500,
                message: "boom".to_string(),
            })
        }
    }

    fn customer() -> Customer {
        Customer::new("cust_1".to_string(), "cus_ext".to_string())
    }

    #[tokio::test]
    async fn test_subscribe_resolves_price_from_catalog() {
        let api = RecordingApi::default();
        let provider = StripePaymentProvider::new(api.clone(), PlanCatalog::default());

        let id = provider.subscribe_customer(&customer(), "Premium").await.unwrap();

        assert_eq!(id, "sub_1");
        assert_eq!(
            api.calls(),
            vec!["subscription:cus_ext:price_1QtWcWIGaC2gk9ooNnWu1RJi".to_string()]
        );
    }

    #[tokio::test]
    async fn test_unknown_plan_never_reaches_provider() {
        let api = RecordingApi::default();
        let provider = StripePaymentProvider::new(api.clone(), PlanCatalog::default());

        let err = provider
            .subscribe_customer(&customer(), "Enterprise")
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::UnknownPlan { ref plan } if plan == "Enterprise"));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_provider_errors_pass_through() {
        let api = RecordingApi::default();
        let provider = StripePaymentProvider::new(api.clone(), PlanCatalog::default());

        let err = provider.subscription_status("sub_x").await.unwrap_err();

        assert!(matches!(
            err,
            ServiceError::PaymentProviderError { status: 500, .. }
        ));
        assert_eq!(api.calls(), vec!["status:sub_x".to_string()]);
    }
}
