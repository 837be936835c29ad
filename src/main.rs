//! Nikolaus Tours - static site host
//!
//! Serves the booking funnel's pages, fragments and dictionaries.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nikolaus_tours::{
    api,
    config::AppConfig,
    models::LanguageCode,
    repository::Repository,
    services::{clock::SystemClock, fetch::FsFetcher, Services},
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("nikolaus_tours={},tower_http=debug", config.logging.level).into()
    });
    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting Nikolaus Tours v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Serving site from {}", config.site.root.display());

    let services = Services::new(
        Repository::in_memory(),
        Arc::new(FsFetcher::new(&config.site.root)),
        Arc::new(SystemClock),
        config.site.clone(),
        &config.locale,
    )
    .context("Failed to create services")?;

    let languages: Vec<LanguageCode> = config
        .locale
        .languages
        .iter()
        .filter_map(|code| match LanguageCode::new(code) {
            Ok(lang) => Some(lang),
            Err(e) => {
                tracing::warn!("Ignoring configured language: {}", e);
                None
            }
        })
        .collect();
    let missing = services.locale.verify(&languages).await;
    if !missing.is_empty() {
        tracing::warn!("{} configured language(s) have no dictionary", missing.len());
    }

    let addr = SocketAddr::new(
        config.server.host.parse().context("Invalid host address")?,
        config.server.port,
    );

    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };
    let app = api::create_router(state);

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
