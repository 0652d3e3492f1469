use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vaultgraph_core::VaultConfig;
use vaultgraph_server::api;

/// VaultGraph - serve a link graph extracted from a markdown vault
#[derive(Parser)]
#[command(name = "vaultgraph")]
#[command(version)] // Auto-pull version from Cargo.toml
#[command(about = "Extract and serve the link graph of a note vault", long_about = None)]
struct Cli {
    /// Root directory of the note vault
    #[arg(long)]
    vault: PathBuf,

    /// Path of the persisted graph snapshot
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Port for the HTTP API
    #[arg(short, long, default_value = "5001")]
    port: u16,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| {
            "vaultgraph_core=debug,vaultgraph_server=debug,tower_http=debug".into()
        }),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = VaultConfig::new(cli.vault);
    if let Some(snapshot) = cli.snapshot {
        config = config.with_snapshot(snapshot);
    }

    tracing::info!(vault = %config.vault.display(), "starting VaultGraph server");

    let app = api::create_router(config);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", cli.port)).await?;
    tracing::info!("VaultGraph server listening on http://127.0.0.1:{}", cli.port);

    axum::serve(listener, app).await?;

    Ok(())
}
