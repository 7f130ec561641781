pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod handler;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliArgs, Command};

pub use adapters::payment::{StripeClient, StripePaymentProvider};
pub use adapters::storage::{DynamoStore, MemoryStore, SubscriptionRepository};
pub use config::AppConfig;
pub use core::service::SubscriptionService;
pub use domain::model::{Customer, Subscription};
pub use domain::plan::PlanCatalog;
pub use handler::{ApiRequest, ApiResponse, SubscriptionHandler};
pub use utils::error::{Result, ServiceError};
