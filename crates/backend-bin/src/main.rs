// ============================
// radvault-backend-bin/src/main.rs
// ============================
//! Binary entry point for the `RadVault` credential backend.

use clap::Parser;
use radvault_backend_lib::{config, db, router, AppState};
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "radvault", about = "RADIUS credential management backend")]
struct Cli {
    /// Path to a TOML config file (defaults to ./config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => config::load_settings_from(path)?,
        None => config::load_settings()?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_level.clone())),
        )
        .init();

    let pool = db::connect(&settings.database_url).await?;
    db::init_schema(&pool).await?;

    let state = AppState::new(pool);
    let app = router::create_router(state);

    let listener = TcpListener::bind(settings.bind_addr).await?;
    tracing::info!("listening on {}", settings.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
