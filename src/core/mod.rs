pub mod service;

pub use crate::domain::model::{Customer, Subscription};
pub use crate::domain::ports::{KeyValueStore, PaymentProvider, SubscriptionStore};
pub use crate::utils::error::Result;
pub use service::SubscriptionService;
