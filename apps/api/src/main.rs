mod chat;
mod config;
mod errors;
mod graph;
mod llm_client;
mod pipeline;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::chat::SessionStore;
use crate::config::Config;
use crate::graph::Neo4jRunner;
use crate::llm_client::{GroqClient, TextGenerator};
use crate::pipeline::executor::GraphExecutor;
use crate::pipeline::Pipeline;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Symptom Graph API v{}", env!("CARGO_PKG_VERSION"));

    // Connect to Neo4j and probe it once. A failed probe disables graph
    // queries for the whole run instead of aborting startup, so the chat
    // surface can still answer with guidance.
    let executor = match graph::connect(
        &config.neo4j_uri,
        &config.neo4j_user,
        &config.neo4j_password,
    )
    .await
    {
        Ok(g) => GraphExecutor::new(Arc::new(Neo4jRunner::new(g))),
        Err(e) => {
            error!("Failed to connect to Neo4j: {e}. Graph queries disabled for this run.");
            GraphExecutor::disabled()
        }
    };

    // Initialize LLM client
    let llm: Arc<dyn TextGenerator> = Arc::new(GroqClient::new(
        config.groq_api_url.clone(),
        config.groq_api_key.clone(),
        config.groq_model.clone(),
    ));
    info!("LLM client initialized (model: {})", config.groq_model);

    let pipeline = Arc::new(Pipeline::new(
        llm,
        executor,
        config.graph_schema.clone(),
        config.validate_generated_query,
    ));

    // Build app state
    let state = AppState {
        pipeline,
        sessions: Arc::new(SessionStore::new()),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
