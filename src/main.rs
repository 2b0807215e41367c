use std::path::PathBuf;

use anyhow::Context;
use api::serve;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;
use util::Config;

#[derive(Debug, Parser)]
#[command(about = "Extracts calendar event fields from free text with a local LLM")]
struct Args {
    /// TOML config file; defaults apply when it does not exist
    #[arg(long, env = util::config::CONFIG_PATH_ENV, default_value = util::config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Print the OpenAPI document and exit
    #[arg(long)]
    openapi: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.openapi {
        println!("{}", api::openapi().to_pretty_json()?);
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut config = Config::from_file(&args.config)?;
    config.apply_env(|key| std::env::var(key).ok())?;

    let router = serve(&config).await?;

    let address = config.server.address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    info!(task = "listen", %address);

    Ok(axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if tokio::signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(
            tokio::signal::unix::SignalKind::terminate(),
        ) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!(task = "shutdown", signal = "SIGINT"),
        _ = terminate => info!(task = "shutdown", signal = "SIGTERM"),
    }
}
