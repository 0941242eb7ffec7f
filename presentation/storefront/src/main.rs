use std::sync::Arc;

use dotenvy::dotenv;
use tokio::io::{self, AsyncBufReadExt, BufReader};

use business::application::storefront::listing::ProductListing;
use business::domain::cart::store::CartStore;
use business::domain::logger::Logger;
use catalog_client::client::CatalogClient;
use catalog_client::product_catalog::ProductCatalogHttp;
use local_storage::FileKeyValueStore;
use logger::TracingLogger;

mod commands;
mod config;
mod session;

use commands::Command;
use config::StorefrontConfig;
use session::{Flow, Session};

/// Terminal storefront: pages through the catalog and keeps a cart on disk.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    dotenv().ok();
    let config = StorefrontConfig::from_env();

    let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
    let storage = Arc::new(FileKeyValueStore::open(&config.storage_path)?);
    let cart = CartStore::new(storage, logger.clone());
    let catalog = Arc::new(ProductCatalogHttp::new(CatalogClient::new(
        config.api_url.clone(),
        config.http_timeout,
    )));

    let mut session = Session::new(ProductListing::new(catalog, cart, logger));
    for line in session.start().await {
        println!("{line}");
    }

    let mut lines = BufReader::new(io::stdin()).lines();
    while let Some(input) = lines.next_line().await? {
        if input.trim().is_empty() {
            continue;
        }
        let (flow, output) = match input.parse::<Command>() {
            Ok(command) => session.handle(command).await,
            Err(e) => (Flow::Continue, vec![format!("{e}. Type `help` for commands.")]),
        };
        for line in output {
            println!("{line}");
        }
        if flow == Flow::Quit {
            break;
        }
    }

    Ok(())
}
