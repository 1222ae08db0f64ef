use std::{env, future::Future, net::SocketAddr};

use axum::Router;
use configs::AppConfig;
use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::{errors::StartupError, routes, state::ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Settings from `config.toml` (or `CONFIG_PATH`), falling back to env vars.
fn load_config() -> (String, u16, DatabaseConfig) {
    match AppConfig::load_and_validate() {
        Ok(cfg) => (cfg.server.host.clone(), cfg.server.port, DatabaseConfig::from(&cfg.database)),
        Err(e) => {
            warn!(error = %e, "config file unavailable, using environment");
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8080);
            (host, port, DatabaseConfig::from_env())
        }
    }
}

/// Connect, migrate and build the router.
pub async fn build_app(db_cfg: &DatabaseConfig) -> Result<Router, StartupError> {
    common::env::ensure_sqlite_dir(&db_cfg.url).await?;
    let db = connect_with_config(db_cfg)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    migration::Migrator::up(&db, None)
        .await
        .map_err(|e| StartupError::Database(format!("migrations failed: {e}")))?;
    Ok(routes::build_router(ServerState::new(db), build_cors()))
}

/// Build the app and serve until `shutdown` resolves, draining in-flight requests.
///
/// Expects `.env` and logging to be set up by the caller.
pub async fn run_until<F>(shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let (host, port, db_cfg) = load_config();
    let app = build_app(&db_cfg).await?;

    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address {host}:{port}: {e}")))?;
    info!(%addr, "starting autos server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    info!("server stopped");
    Ok(())
}
