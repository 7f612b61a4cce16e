use clap::Args;
use std::process;
use stratagem_core::config::ClientConfig;
use stratagem_core::schema::{resolve, FieldValues};
use stratagem_client::{Dispatcher, SimulationClient};
use tracing::{error, info, warn};

use crate::{presets, reports};

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Algorithm name as listed by `list`
    pub algorithm: String,

    /// Field values, repeatable: -f array=1,2,3 -f target=2
    #[arg(short = 'f', long = "field", value_name = "NAME=VALUE")]
    pub fields: Vec<String>,

    /// Start from a curated example (index from `describe`); -f overrides apply on top
    #[arg(long, value_name = "INDEX")]
    pub example: Option<usize>,

    /// Play the step sequence instead of only the final result
    #[arg(long, default_value_t = false)]
    pub play: bool,

    /// Milliseconds between frames during playback
    #[arg(long, default_value_t = 350)]
    pub step_ms: u64,
}

pub async fn run(args: RunArgs, config: &ClientConfig) {
    let name = &args.algorithm;
    let schema = resolve(name);
    let mut values = FieldValues::for_schema(&schema);

    if let Some(idx) = args.example {
        match presets::for_algorithm(name).get(idx) {
            Some(p) => {
                info!("⚡ Using example '{}'", p.label);
                for (k, v) in p.values {
                    values.set(k, *v);
                }
            }
            None => {
                error!("'{}' has no example #{}, see `stratagem describe`", name, idx);
                process::exit(1);
            }
        }
    }

    for pair in &args.fields {
        let Some((key, value)) = pair.split_once('=') else {
            error!("Field '{}' is not NAME=VALUE", pair);
            process::exit(1);
        };
        let key = key.trim();
        if !values.set(key, value) {
            warn!("⚠️  '{}' has no field named '{}', ignoring it", name, key);
        }
    }

    let client = SimulationClient::new(config).unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(1);
    });
    info!("📡 Simulation service: {}", client.base_url());

    let dispatcher = Dispatcher::new(client);
    match dispatcher.execute(name, &values).await {
        Some(data) => reports::render(name, &data, args.play, args.step_ms),
        None => {
            let state = dispatcher.snapshot();
            error!(
                "{}",
                state.error.unwrap_or_else(|| "Unknown error".to_string())
            );
            process::exit(1);
        }
    }
}
