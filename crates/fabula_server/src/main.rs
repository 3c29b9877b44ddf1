use anyhow::Result;
use clap::Parser;
use fabula_server::{build_driver, ServerConfig};
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Fabula story concept service", long_about = None)]
struct Args {
    /// Bind host (overrides FABULA_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Bind port (overrides FABULA_PORT)
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    let driver = build_driver(&config)?;
    let app = fabula_server::app(driver);

    let addr = format!("{}:{}", config.host, config.port);
    info!(backend = %config.backend, addr = %addr, "Starting fabula server");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
