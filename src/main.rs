use clap::Parser;
use subscription_service::app::build_handler;
use subscription_service::utils::logger;
use subscription_service::CliArgs;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);
    tracing::info!("Starting subscription-service CLI");

    let handler = match args.load_config() {
        Ok(config) => build_handler(&config).await,
        Err(e) => Err(e),
    };
    let handler = match handler {
        Ok(handler) => handler,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(3);
        }
    };

    let response = handler.dispatch(args.command.into()).await;
    println!("{}", serde_json::to_string_pretty(&response.body)?);

    if !response.is_success() {
        tracing::error!("❌ Request failed with status {}", response.status_code);
        // 4xx 是呼叫端錯誤，5xx 是下游或系統錯誤
        let exit_code = match response.status_code {
            400..=499 => 1,
            _ => 2,
        };
        std::process::exit(exit_code);
    }

    Ok(())
}
