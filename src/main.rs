//! Service entrypoint: load config, resolve credentials, build the pool,
//! mount routes, serve.

use policy_service::{app_routes, AppConfig, AppState, Database, PolicyStore};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("policy_service=info")),
        )
        .init();

    tracing::info!("starting up the policy service");

    let config = AppConfig::from_env()?;
    let db = Database::connect(&config.database).await?;
    let store = PolicyStore::new(db);
    store.ensure_policies_table().await?;

    let app = app_routes(AppState { store });

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("shutting down the policy service");
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
