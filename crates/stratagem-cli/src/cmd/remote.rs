use clap::Args;
use serde_json::Value;
use std::process;
use stratagem_core::config::ClientConfig;
use stratagem_client::{ClientResult, SimulationClient};
use stratagem_protocol::algo::Algorithm;
use tracing::{error, info};

#[derive(Args, Debug, Clone)]
pub struct InfoArgs {
    /// Algorithm name as listed by `list`, or a raw service slug
    pub algorithm: String,
}

fn connect(config: &ClientConfig) -> SimulationClient {
    SimulationClient::new(config).unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(1);
    })
}

fn unwrap_or_exit(result: ClientResult<Value>) -> Value {
    result.unwrap_or_else(|e| {
        error!("❌ {}", e);
        process::exit(1);
    })
}

pub async fn health(config: &ClientConfig) {
    let client = connect(config);
    let body = unwrap_or_exit(client.health().await);

    let status = body["status"].as_str().unwrap_or("unknown");
    let message = body["message"].as_str().unwrap_or("");
    if status == "healthy" {
        info!("✅ {} - {}", status, message);
    } else {
        info!("⚠️  {} - {}", status, message);
    }
    if let Some(count) = body["algorithms_available"].as_i64() {
        info!("   {} algorithms available", count);
    }
}

pub async fn algorithms(config: &ClientConfig) {
    let client = connect(config);
    let body = unwrap_or_exit(client.algorithms().await);

    println!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
}

pub async fn info(args: InfoArgs, config: &ClientConfig) {
    // Accept the catalog name, falling back to a raw slug for anything
    // the service knows but the catalog does not.
    let slug = match Algorithm::parse(&args.algorithm) {
        Some(algo) => algo.slug().to_string(),
        None => args.algorithm.clone(),
    };

    let client = connect(config);
    let body = unwrap_or_exit(client.algorithm_info(&slug).await);

    println!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
}
