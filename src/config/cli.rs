use crate::config::AppConfig;
use crate::handler::ApiRequest;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "subscription-service")]
#[command(about = "Create customers and manage their plan subscriptions")]
pub struct CliArgs {
    /// TOML config file; environment variables are used when omitted
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Register a customer with the payment provider and store it
    CreateCustomer {
        #[arg(long)]
        email: String,
    },
    /// Subscribe an existing customer to a plan
    Subscribe {
        #[arg(long)]
        customer_id: String,
        #[arg(long)]
        plan: String,
    },
    /// Show a subscription with its live status
    Status {
        #[arg(long)]
        customer_id: String,
        #[arg(long)]
        subscription_id: String,
    },
}

impl CliArgs {
    pub fn load_config(&self) -> Result<AppConfig> {
        match &self.config {
            Some(path) => {
                tracing::debug!("Loading config from {}", path.display());
                AppConfig::from_file(path)
            }
            None => AppConfig::from_env(),
        }
    }
}

impl From<Command> for ApiRequest {
    fn from(command: Command) -> Self {
        match command {
            Command::CreateCustomer { email } => ApiRequest::CreateCustomer { email },
            Command::Subscribe { customer_id, plan } => {
                ApiRequest::SubscribeCustomer { customer_id, plan }
            }
            Command::Status {
                customer_id,
                subscription_id,
            } => ApiRequest::SubscriptionStatus {
                customer_id,
                subscription_id,
            },
        }
    }
}
