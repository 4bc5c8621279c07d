use std::time::Duration;

use poem::{EndpointExt, Route, Server as PoemServer, listener::TcpListener, middleware::Tracing};
use poem_openapi::OpenApiService;

use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

pub struct Server;

impl Server {
    /// Builds the routing tree: the API at the root, Swagger UI and the spec beside it.
    pub fn routes(container: DependencyContainer, server_url: &str) -> Route {
        let api_service = OpenApiService::new(
            (container.health_api, container.product_api),
            "Product Service API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(server_url.to_string());
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();

        Route::new()
            .nest("/", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
    }

    /// Serves until Ctrl-C, then drains in-flight requests.
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = Self::routes(container, &format!("http://{}", addr))
            .with(config.cors)
            .with(Tracing);

        tracing::info!("Server running at http://{}", addr);
        tracing::info!("Swagger UI at http://{}/docs", addr);
        tracing::info!("OpenAPI JSON at http://{}/openapi.json", addr);

        PoemServer::new(TcpListener::bind(&addr))
            .run_with_graceful_shutdown(
                app,
                async {
                    if let Err(e) = tokio::signal::ctrl_c().await {
                        tracing::error!(error = %e, "Failed to listen for shutdown signal");
                    }
                    tracing::info!("Shutdown signal received");
                },
                Some(SHUTDOWN_GRACE),
            )
            .await?;
        Ok(())
    }
}
