use anyhow::Result;
use clap::Parser;
use resume_enhancer::config::AppConfig;
use resume_enhancer::environment::EnvironmentConfig;
use resume_enhancer::start_web_server;
use std::path::PathBuf;
use tracing::info;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "resumeforge")]
#[command(about = "ATS resume enhancement API server")]
struct Cli {
    /// Override the listen port (default: ROCKET_PORT or 5000)
    #[arg(long)]
    port: Option<u16>,

    /// Override the portfolio storage file
    #[arg(long)]
    storage: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("resume_enhancer=info,rocket::server=off")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load()?;
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(storage) = cli.storage {
        config.storage_path = storage;
    }

    EnvironmentConfig {
        storage_path: config.storage_path.clone(),
    }
    .ensure_directories()
    .await?;

    info!("Starting ATS Resume Builder API");
    info!(
        "Environment: {}",
        std::env::var("ENVIRONMENT").unwrap_or_else(|_| "local".to_string())
    );
    info!("Server: http://0.0.0.0:{}", config.port);
    info!("Portfolio storage: {}", config.storage_path.display());

    start_web_server(config).await
}
