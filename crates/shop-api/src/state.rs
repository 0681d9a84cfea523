//! Application state and environment configuration.

use std::path::PathBuf;

use tower_http::services::ServeDir;

use shop_store::{OrderStore, ProductStore, UserStore};

/// Environment-derived configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Listening port (`SHOP_PORT`, default 3000).
    pub port: u16,
    /// Directory served for non-API GET paths (`SHOP_PUBLIC_DIR`,
    /// default `public`).
    pub public_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            port: std::env::var("SHOP_PORT")
                .ok()
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(defaults.port),
            public_dir: std::env::var("SHOP_PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.public_dir),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            public_dir: PathBuf::from("public"),
        }
    }
}

/// Shared application state: the injected store handles, the static file
/// service, and the startup configuration.
///
/// Cheaply cloneable — store handles share their data across clones. The
/// dispatch core itself keeps no per-request state here; every decision is
/// a function of one request's facts plus store reads.
#[derive(Clone)]
pub struct AppState {
    pub users: UserStore,
    pub products: ProductStore,
    pub orders: OrderStore,
    pub assets: ServeDir,
    pub config: AppConfig,
}

impl AppState {
    /// Fresh empty stores with default configuration. The integration
    /// tests start here and seed accounts through the store handles.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self {
            users: UserStore::new(),
            products: ProductStore::new(),
            orders: OrderStore::new(),
            assets: ServeDir::new(&config.public_dir),
            config,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
