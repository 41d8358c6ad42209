use clap::Parser;
use ludoforge::{LudoError, LudoServer, ServerConfig};
use tracing_subscriber::EnvFilter;

/// Ludoforge - HTTP server for turn-based Ludo sessions
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Address to listen on
    #[arg(short, long, default_value = ludoforge::DEFAULT_BIND_ADDR)]
    bind: String,
}

#[tokio::main]
async fn main() -> Result<(), LudoError> {
    init_tracing();
    let cli = Cli::parse();

    let server = LudoServer::builder()
        .config(ServerConfig { bind_addr: cli.bind })
        .build()
        .await?;

    let result = server.run_until(shutdown_signal()).await;
    if let Err(e) = &result {
        tracing::error!(error = %e, "server exited with error");
    }
    result
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
