#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use subscription_service::app::{build_handler, LiveHandler};
#[cfg(feature = "lambda")]
use subscription_service::utils::logger;
#[cfg(feature = "lambda")]
use subscription_service::{ApiRequest, ApiResponse, AppConfig};

#[cfg(feature = "lambda")]
async fn function_handler(
    handler: &LiveHandler,
    event: LambdaEvent<ApiRequest>,
) -> Result<ApiResponse, Error> {
    tracing::info!(request_id = %event.context.request_id, "Handling request");

    let response = handler.dispatch(event.payload).await;

    tracing::info!("Responded with status {}", response.status_code);
    Ok(response)
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    // 冷啟動時建立一次，之後的呼叫共用
    let config = AppConfig::from_env()?;
    let handler = build_handler(&config).await?;
    let handler = &handler;

    run(service_fn(move |event: LambdaEvent<ApiRequest>| async move {
        function_handler(handler, event).await
    }))
    .await
}
