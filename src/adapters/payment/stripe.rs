use crate::config::PaymentConfig;
use crate::utils::error::{Result, ServiceError};
use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;

const PAYMENT_BEHAVIOR_DEFAULT_INCOMPLETE: &str = "default_incomplete";

/// Raw provider calls. Price resolution happens one layer up.
#[async_trait]
pub trait StripeApi: Send + Sync {
    async fn create_customer(&self, email: &str) -> Result<String>;

    async fn create_subscription(&self, external_customer_id: &str, price_id: &str)
        -> Result<String>;

    async fn get_subscription_status(&self, external_subscription_id: &str) -> Result<String>;
}

#[derive(Debug, Deserialize)]
struct StripeObject {
    id: String,
}

#[derive(Debug, Deserialize)]
struct StripeSubscriptionObject {
    status: String,
}

#[derive(Debug, Deserialize)]
struct StripeErrorEnvelope {
    error: StripeErrorBody,
}

#[derive(Debug, Deserialize)]
struct StripeErrorBody {
    message: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    code: Option<String>,
}

#[derive(Debug, Clone)]
pub struct StripeClient {
    client: Client,
    api_base: String,
    secret_key: String,
}

impl StripeClient {
    pub fn new(config: &PaymentConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            secret_key: config.secret_key.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/v1/{}", self.api_base, path)
    }

    /// The id is pushed as a single encoded path segment.
    fn subscription_url(&self, external_subscription_id: &str) -> Result<Url> {
        let mut url = Url::parse(&self.url("subscriptions")).map_err(|e| {
            ServiceError::ConfigError {
                message: format!("invalid Stripe API base '{}': {}", self.api_base, e),
            }
        })?;
        url.path_segments_mut()
            .map_err(|_| ServiceError::ConfigError {
                message: format!("Stripe API base '{}' cannot hold a path", self.api_base),
            })?
            .push(external_subscription_id);
        Ok(url)
    }

    async fn decode<T: DeserializeOwned>(response: Response, operation: &str) -> Result<T> {
        let status = response.status();
        tracing::debug!("Stripe {} responded with {}", operation, status);

        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let body = response.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<StripeErrorEnvelope>(&body) {
            Ok(envelope) => {
                let err = envelope.error;
                let mut message = err.message.unwrap_or_else(|| "unknown error".to_string());
                if let Some(code) = err.code.or(err.kind) {
                    message = format!("{} ({})", message, code);
                }
                message
            }
            Err(_) => body,
        };

        tracing::error!("Stripe {} failed ({}): {}", operation, status, message);
        Err(ServiceError::PaymentProviderError {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl StripeApi for StripeClient {
    async fn create_customer(&self, email: &str) -> Result<String> {
        let response = self
            .client
            .post(self.url("customers"))
            .bearer_auth(&self.secret_key)
            .form(&[("email", email)])
            .send()
            .await?;

        let customer: StripeObject = Self::decode(response, "create customer").await?;
        Ok(customer.id)
    }

    async fn create_subscription(
        &self,
        external_customer_id: &str,
        price_id: &str,
    ) -> Result<String> {
        let response = self
            .client
            .post(self.url("subscriptions"))
            .bearer_auth(&self.secret_key)
            .form(&[
                ("customer", external_customer_id),
                ("items[0][price]", price_id),
                ("payment_behavior", PAYMENT_BEHAVIOR_DEFAULT_INCOMPLETE),
            ])
            .send()
            .await?;

        let subscription: StripeObject = Self::decode(response, "create subscription").await?;
        Ok(subscription.id)
    }

    async fn get_subscription_status(&self, external_subscription_id: &str) -> Result<String> {
        let response = self
            .client
            .get(self.subscription_url(external_subscription_id)?)
            .bearer_auth(&self.secret_key)
            .send()
            .await?;

        let subscription: StripeSubscriptionObject =
            Self::decode(response, "retrieve subscription").await?;
        Ok(subscription.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use std::time::Duration;

    fn client(server: &MockServer) -> StripeClient {
        StripeClient::new(&PaymentConfig {
            api_base: server.base_url(),
            secret_key: "sk_test_123".to_string(),
            request_timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_customer() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/v1/customers")
                .header("Authorization", "Bearer sk_test_123")
                .x_www_form_urlencoded_tuple("email", "jane@example.com");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"id": "cus_123", "object": "customer"}));
        });

        let id = client(&server)
            .create_customer("jane@example.com")
            .await
            .unwrap();

        api_mock.assert();
        assert_eq!(id, "cus_123");
    }

    #[tokio::test]
    async fn test_create_subscription_sends_price_and_incomplete_behavior() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/v1/subscriptions")
                .x_www_form_urlencoded_tuple("customer", "cus_123")
                .x_www_form_urlencoded_tuple("items[0][price]", "price_abc")
                .x_www_form_urlencoded_tuple("payment_behavior", "default_incomplete");
            then.status(200)
                .json_body(serde_json::json!({"id": "sub_456", "status": "incomplete"}));
        });

        let id = client(&server)
            .create_subscription("cus_123", "price_abc")
            .await
            .unwrap();

        api_mock.assert();
        assert_eq!(id, "sub_456");
    }

    #[tokio::test]
    async fn test_get_subscription_status() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/v1/subscriptions/sub_456");
            then.status(200)
                .json_body(serde_json::json!({"id": "sub_456", "status": "active"}));
        });

        let status = client(&server)
            .get_subscription_status("sub_456")
            .await
            .unwrap();

        api_mock.assert();
        assert_eq!(status, "active");
    }

    #[test]
    fn test_subscription_id_is_a_single_path_segment() {
        let client = StripeClient::new(&PaymentConfig {
            api_base: "https://api.stripe.com/".to_string(),
            secret_key: "sk_test_123".to_string(),
            request_timeout: Duration::from_secs(5),
        })
        .unwrap();

        let url = client.subscription_url("sub_1/cancel?x=1").unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.stripe.com/v1/subscriptions/sub_1%2Fcancel%3Fx=1"
        );
        assert_eq!(
            client.subscription_url("sub_456").unwrap().as_str(),
            "https://api.stripe.com/v1/subscriptions/sub_456"
        );
    }

    #[tokio::test]
    async fn test_provider_error_envelope_is_decoded() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/v1/subscriptions/sub_missing");
            then.status(404).json_body(serde_json::json!({
                "error": {
                    "message": "No such subscription: 'sub_missing'",
                    "type": "invalid_request_error",
                    "code": "resource_missing"
                }
            }));
        });

        let err = client(&server)
            .get_subscription_status("sub_missing")
            .await
            .unwrap_err();

        match err {
            ServiceError::PaymentProviderError { status, message } => {
                assert_eq!(status, 404);
                assert!(message.contains("No such subscription"));
                assert!(message.contains("resource_missing"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_non_json_error_body_is_kept() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/v1/customers");
            then.status(502).body("bad gateway");
        });

        let err = client(&server)
            .create_customer("jane@example.com")
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ServiceError::PaymentProviderError { status: 502, ref message } if message == "bad gateway"
        ));
    }
}
