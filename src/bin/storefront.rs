//! Serves the storefront collection routes.
//!
//! Configuration comes from the environment; see
//! [`StorefrontConfig::from_lookup`](shopify_storefront::StorefrontConfig::from_lookup).
//! `STOREFRONT_BIND` sets the listen address and `RUST_LOG` the log filter.

use std::net::SocketAddr;
use std::sync::Arc;

use shopify_storefront::routes::build_router;
use shopify_storefront::{StorefrontClient, StorefrontConfig};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

const BIND_VAR: &str = "STOREFRONT_BIND";
const DEFAULT_BIND: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let config = StorefrontConfig::from_env()?;
    let client = StorefrontClient::new(&config);
    info!(
        shop = config.shop_domain().as_ref(),
        api_version = %client.api_version(),
        "storefront client ready"
    );
    let app = build_router(Arc::new(client));

    let addr: SocketAddr = std::env::var(BIND_VAR)
        .unwrap_or_else(|_| DEFAULT_BIND.to_string())
        .parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "storefront listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("storefront stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(%error, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
