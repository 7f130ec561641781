use crate::core::service::SubscriptionService;
use crate::domain::ports::{PaymentProvider, SubscriptionStore};
use crate::handler::error_handler::{handle_error, ErrorResponse};
use crate::handler::request::{
    require_path_param, ApiRequest, CreateCustomerRequest, SubscribeCustomerRequest,
};
use crate::handler::response::{
    ApiResponse, CreateCustomerResponse, SubscribeCustomerResponse, SubscriptionStatusResponse,
};
use crate::utils::error::{Result, ServiceError};
use crate::utils::validation::Validate;
use serde::Serialize;

pub const STATUS_OK: u16 = 200;
pub const STATUS_CREATED: u16 = 201;

pub type HandlerResult<T> = std::result::Result<T, ErrorResponse>;

pub struct SubscriptionHandler<S: SubscriptionStore, P: PaymentProvider> {
    service: SubscriptionService<S, P>,
}

impl<S: SubscriptionStore, P: PaymentProvider> SubscriptionHandler<S, P> {
    pub fn new(service: SubscriptionService<S, P>) -> Self {
        Self { service }
    }

    pub async fn create_customer(
        &self,
        request: CreateCustomerRequest,
    ) -> HandlerResult<CreateCustomerResponse> {
        let result: Result<_> = async {
            request.validate()?;
            self.service.create_customer(request.email.trim()).await
        }
        .await;

        result
            .map(CreateCustomerResponse::from)
            .map_err(|e| handle_error(&e))
    }

    pub async fn subscribe_customer(
        &self,
        customer_id: &str,
        request: SubscribeCustomerRequest,
    ) -> HandlerResult<SubscribeCustomerResponse> {
        let result: Result<_> = async {
            require_path_param("customerId", customer_id)?;
            request.validate()?;
            self.service
                .subscribe_customer(customer_id, &request.plan)
                .await
        }
        .await;

        result
            .map(SubscribeCustomerResponse::from)
            .map_err(|e| handle_error(&e))
    }

    pub async fn subscription_status(
        &self,
        customer_id: &str,
        subscription_id: &str,
    ) -> HandlerResult<SubscriptionStatusResponse> {
        let result: Result<_> = async {
            require_path_param("customerId", customer_id)?;
            require_path_param("subscriptionId", subscription_id)?;
            self.service
                .subscription_status(customer_id, subscription_id)
                .await
        }
        .await;

        result
            .map(SubscriptionStatusResponse::from)
            .map_err(|e| handle_error(&e))
    }

    /// Routes one request and wraps the outcome in a status-coded envelope.
    pub async fn dispatch(&self, request: ApiRequest) -> ApiResponse {
        match request {
            ApiRequest::CreateCustomer { email } => {
                let result = self.create_customer(CreateCustomerRequest { email }).await;
                respond(STATUS_CREATED, result)
            }
            ApiRequest::SubscribeCustomer { customer_id, plan } => {
                let result = self
                    .subscribe_customer(&customer_id, SubscribeCustomerRequest { plan })
                    .await;
                respond(STATUS_CREATED, result)
            }
            ApiRequest::SubscriptionStatus {
                customer_id,
                subscription_id,
            } => {
                let result = self
                    .subscription_status(&customer_id, &subscription_id)
                    .await;
                respond(STATUS_OK, result)
            }
        }
    }
}

fn respond<T: Serialize>(success_code: u16, result: HandlerResult<T>) -> ApiResponse {
    let (status_code, body) = match result {
        Ok(body) => (success_code, serde_json::to_value(body)),
        Err(err) => (err.code, serde_json::to_value(&err)),
    };

    match body {
        Ok(body) => ApiResponse { status_code, body },
        Err(e) => {
            let err = handle_error(&ServiceError::from(e));
            ApiResponse {
                status_code: err.code,
                body: serde_json::json!({ "code": err.code, "message": err.message }),
            }
        }
    }
}
