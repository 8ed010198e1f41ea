mod config;
mod errors;
mod llm_client;
mod models;
mod outreach;
mod routes;
mod scoring;
mod search;
mod sourcing;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::outreach::composer::OutreachComposer;
use crate::routes::build_router;
use crate::search::finder::ProfileFinder;
use crate::search::serpapi::SerpApiClient;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Sourcing Agent v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = LlmClient::new(
        config.gemini_api_key.clone(),
        &config.gemini_base_url,
        &config.gemini_model,
        config.http_timeout,
    )
    .context("Failed to initialize LLM client")?;
    info!("LLM client initialized (model: {})", llm.model());

    // Initialize search client + finder (owns the query cache)
    if config.serpapi_key.is_none() {
        warn!("SERPAPI_KEY is not set; every search will return zero candidates");
    }
    let search = SerpApiClient::new(
        config.serpapi_key.clone(),
        &config.serpapi_base_url,
        config.http_timeout,
    )
    .context("Failed to initialize search client")?;
    let finder = Arc::new(ProfileFinder::new(
        search,
        config.search_cache_capacity,
        config.search_cache_ttl,
    ));
    info!(
        "Search cache: capacity {}, ttl {}s",
        config.search_cache_capacity,
        config.search_cache_ttl.as_secs()
    );

    // Initialize fit scorer (heuristic by default, swap via SCORER_BACKEND)
    let fit_scorer = config.scorer_backend.build();
    info!("Fit scorer: {}", fit_scorer.backend());

    // Build app state
    let state = AppState {
        finder,
        fit_scorer,
        composer: OutreachComposer::new(llm),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
