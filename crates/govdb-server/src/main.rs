//! # govdb-server — Binary Entry Point
//!
//! Environment:
//! - `PORT` — listen port (default 8080)
//! - `GOVDB_DATA` — dataset path (default: the dataset bundled with govdb-core)
//! - `RUST_LOG` — tracing filter (default `info`)

use govdb_server::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    let state = match std::env::var("GOVDB_DATA") {
        Ok(path) => AppState::from_path(&path),
        Err(_) => AppState::bundled(),
    }
    .map_err(|e| {
        tracing::error!("Dataset load failed: {e}");
        e
    })?;

    let app = govdb_server::app(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("govdb server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
