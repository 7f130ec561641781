pub mod provider;
pub mod stripe;

pub use provider::StripePaymentProvider;
pub use stripe::{StripeApi, StripeClient};
