use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::{app_config::AppConfig, database_config};
use persistence::product::in_memory::ProductRepositoryInMemory;
use setup::{
    dependency_injection::{DependencyContainer, ProductStore},
    server::Server,
};

/// REST API Entry Point
///
/// Initializes the application, wires dependencies, and starts the HTTP server.
///
/// - config/: Application configuration (server, CORS, database)
/// - setup/: Dependency injection and server lifecycle
/// - api/: Route handlers, DTOs, error mapping and response rendering
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Open the product store
    let store = match database_config::init_database(&config.database).await? {
        Some(pool) => ProductStore::Postgres(pool),
        None => {
            tracing::warn!("DATABASE_URL not set, products are kept in memory");
            ProductStore::InMemory(ProductRepositoryInMemory::new())
        }
    };

    // 5. Wire dependencies
    let container = DependencyContainer::new(store);
    let pool = container.pool();

    // 6. Run server
    Server::run(config, container).await?;

    // 7. Release store connections
    if let Some(pool) = pool {
        pool.close().await;
        tracing::info!("Database connections closed");
    }

    Ok(())
}
