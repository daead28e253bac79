//! lawvely-api - HTTP read API for legislation summaries
//!
//! Serves the records produced by lawvely-seed. Read-mostly: the only
//! writes are per-user preference rows. Permissive CORS, since the
//! browser client is served from a different origin.

use anyhow::Result;
use clap::Parser;
use lawvely_api::{build_router, AppState};
use lawvely_common::{config, db};
use tower_http::cors::CorsLayer;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "lawvely-api", about = "Legislation summaries HTTP API")]
struct Args {
    /// Root folder holding the lawvely database
    #[arg(long)]
    root_folder: Option<String>,

    /// Bind address
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Bind port
    #[arg(long, default_value_t = 3001)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    info!("Starting lawvely-api v{}", env!("CARGO_PKG_VERSION"));

    let root_folder = config::resolve_root_folder(args.root_folder.as_deref());
    let db_path = config::database_path(&root_folder)?;
    info!("Database: {}", db_path.display());

    let pool = db::init_database(&db_path).await?;

    let state = AppState::new(pool);
    let app = build_router(state).layer(CorsLayer::permissive());

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("lawvely-api listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
