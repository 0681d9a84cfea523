//! Webshop backend server binary.
//!
//! Configuration comes from the environment: `SHOP_PORT` (default 3000),
//! `SHOP_PUBLIC_DIR` (default `public`), `RUST_LOG` (default `info`).

use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use shop_api::{app, AppConfig, AppState};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = AppState::with_config(config);
    let app = app(state);

    tracing::info!("shop-api listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind listener");
    axum::serve(listener, app.into_make_service())
        .await
        .expect("server error");
}
