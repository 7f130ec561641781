// Presentation boundary: request/response DTOs and the error → status mapping.
// The binaries (CLI, Lambda) are thin shells around `SubscriptionHandler`.

pub mod error_handler;
pub mod request;
pub mod response;
pub mod subscription_handler;

pub use error_handler::{handle_error, ErrorResponse};
pub use request::ApiRequest;
pub use response::ApiResponse;
pub use subscription_handler::SubscriptionHandler;
