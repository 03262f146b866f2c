//! HTTP API server for the Scribe transcript summarizer.
//!
//! Request flow: transcript in, pipeline-generated summary out, records
//! persisted in SQLite, optional email sharing behind a lazy public token.

mod config;
mod error;
mod routes;
mod state;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use database::Database;
use groq_summarizer::GroqSummarizer;
use mailer::{Mailer, MailerConfig};
use pipeline::{PipelineConfig, SummarizationPipeline};
use summarizer_core::Summarizer;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::config::Config;
use crate::state::{AppState, Capabilities, ShareLinks};

/// Maximum accepted request body size (transcripts can be large).
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;
    info!(addr = %config.addr, "Starting Scribe API server");

    // Connect to database
    let db = Database::connect(&config.database_url).await?;
    db.migrate().await?;

    // Capability report: probe optional backends once, at startup. The
    // pipeline and share flow receive their capability as a value and
    // never read the environment themselves.
    let backend: Option<Arc<dyn Summarizer>> = match GroqSummarizer::from_env() {
        Ok(summarizer) => Some(Arc::new(summarizer)),
        Err(err) => {
            warn!(error = %err, "Summarizer backend not configured; using local fallback");
            None
        }
    };

    let mailer = match MailerConfig::from_env() {
        Ok(mail_config) => Mailer::new(mail_config)?,
        Err(err) => {
            warn!(error = %err, "Mailer not configured; share emails will be mocked");
            Mailer::disabled()
        }
    };

    let capabilities = Capabilities {
        summarizer: backend.is_some(),
        mailer: mailer.is_enabled(),
    };
    info!(
        summarizer = capabilities.summarizer,
        mailer = capabilities.mailer,
        "Capability report"
    );

    let summarization = SummarizationPipeline::new(backend, PipelineConfig::default());

    // Build application state
    let state = AppState::new(db, summarization, mailer, ShareLinks::from_config(&config));

    // Build router
    let app = routes::router()
        .layer(CorsLayer::permissive())
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state);

    // Start server
    info!(addr = %config.addr, "Scribe API listening");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
