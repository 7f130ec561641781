use crate::adapters::payment::{StripeClient, StripePaymentProvider};
use crate::adapters::storage::{DynamoStore, SubscriptionRepository};
use crate::config::AppConfig;
use crate::core::service::SubscriptionService;
use crate::handler::SubscriptionHandler;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::sync::Arc;

pub type LiveService =
    SubscriptionService<SubscriptionRepository<DynamoStore>, StripePaymentProvider<StripeClient>>;

pub type LiveHandler =
    SubscriptionHandler<SubscriptionRepository<DynamoStore>, StripePaymentProvider<StripeClient>>;

/// Validates the configuration and connects the DynamoDB and Stripe adapters.
pub async fn build_service(config: &AppConfig) -> Result<LiveService> {
    config.validate()?;

    let store = DynamoStore::connect(&config.storage).await;
    let repository = SubscriptionRepository::new(Arc::new(store), config.storage.query_timeout);

    let stripe = StripeClient::new(&config.payment)?;
    let payment = StripePaymentProvider::new(stripe, config.plans.clone());

    tracing::info!(
        "Service wired (table: {}, plans: {})",
        config.storage.table,
        config.plans.plans().collect::<Vec<_>>().join(", ")
    );
    Ok(SubscriptionService::new(repository, payment))
}

pub async fn build_handler(config: &AppConfig) -> Result<LiveHandler> {
    Ok(SubscriptionHandler::new(build_service(config).await?))
}
