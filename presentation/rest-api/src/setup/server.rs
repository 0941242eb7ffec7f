use std::time::Duration;

use poem::{EndpointExt, Route, Server as PoemServer, listener::TcpListener, middleware::Tracing};
use poem_openapi::OpenApiService;

use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    /// Serves the API, Swagger UI (`/docs`) and the OpenAPI document
    /// (`/openapi.json`) until Ctrl-C.
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let api_service = OpenApiService::new(
            (
                container.health_api,
                container.product_api,
                container.supplier_api,
            ),
            "iShop API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(format!("http://{}", addr));
        let docs = api_service.swagger_ui();
        let openapi_json = api_service.spec_endpoint();

        let app = Route::new()
            .nest("/", api_service)
            .nest("/docs", docs)
            .nest("/openapi.json", openapi_json)
            .with(config.cors)
            .with(Tracing);

        tracing::info!("iShop API listening on http://{}", addr);
        PoemServer::new(TcpListener::bind(&addr))
            .run_with_graceful_shutdown(
                app,
                async {
                    let _ = tokio::signal::ctrl_c().await;
                    tracing::info!("Shutdown requested");
                },
                Some(Duration::from_secs(5)),
            )
            .await?;
        Ok(())
    }
}
