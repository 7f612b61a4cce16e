use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use stratagem_core::config::ClientConfig;
use tracing::{error, info};

mod cmd;
mod presets;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Terminal client for the algorithm simulation service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    connection: ClientConfig,

    /// JSON config file; typed flags override its values
    #[arg(global = true, long)]
    config_file: Option<PathBuf>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the strategy/algorithm catalog (offline)
    List,
    /// Show an algorithm's input schema and curated examples (offline)
    Describe(cmd::describe::DescribeArgs),
    /// Execute an algorithm remotely and render the result
    Run(cmd::run::RunArgs),
    /// Check the simulation service's health endpoint
    Health,
    /// List the algorithms the remote service reports
    Remote,
    /// Fetch the service's description of one algorithm
    Info(cmd::remote::InfoArgs),
}

#[tokio::main]
async fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let mut config = if let Some(path) = &cli.config_file {
        info!("📂 Loading config: {}", path.display());
        ClientConfig::load_from_file(path).unwrap_or_else(|e| {
            error!("{}", e);
            process::exit(1);
        })
    } else {
        ClientConfig::default()
    };
    config.merge_from_cli(&cli.connection, &matches);

    match cli.command {
        Commands::List => cmd::list::run(),
        Commands::Describe(args) => cmd::describe::run(args),
        Commands::Run(args) => cmd::run::run(args, &config).await,
        Commands::Health => cmd::remote::health(&config).await,
        Commands::Remote => cmd::remote::algorithms(&config).await,
        Commands::Info(args) => cmd::remote::info(args, &config).await,
    }
}
