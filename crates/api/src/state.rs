//! Application state shared across handlers.

use std::sync::Arc;

use database::Database;
use mailer::Mailer;
use pipeline::SummarizationPipeline;

use crate::config::Config;

/// Which optional external capabilities are configured for this process.
///
/// Built once at startup; components receive their capability as an
/// injected value instead of probing the environment themselves.
#[derive(Debug, Clone, Copy)]
pub struct Capabilities {
    /// A remote summarizer backend is configured.
    pub summarizer: bool,
    /// A real SMTP transport is configured.
    pub mailer: bool,
}

/// Share-link construction.
///
/// Prefers the frontend base URL when configured; otherwise links point at
/// this backend's public token endpoint.
#[derive(Debug, Clone)]
pub struct ShareLinks {
    frontend_base: Option<String>,
    backend_base: String,
}

impl ShareLinks {
    /// Create share links with explicit bases.
    pub fn new(frontend_base: Option<String>, backend_base: String) -> Self {
        Self {
            frontend_base,
            backend_base,
        }
    }

    /// Derive share links from the server configuration.
    pub fn from_config(config: &Config) -> Self {
        let backend_base = config
            .public_base_url
            .clone()
            .unwrap_or_else(|| format!("http://{}", config.addr));
        Self::new(config.frontend_base_url.clone(), backend_base)
    }

    /// Public view URL for a share token.
    pub fn view_url(&self, token: &str) -> String {
        match &self.frontend_base {
            Some(base) => format!("{}/shared/{}", base.trim_end_matches('/'), token),
            None => format!(
                "{}/api/summary/shared/{}",
                self.backend_base.trim_end_matches('/'),
                token
            ),
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Database connection.
    pub db: Database,
    /// Summarization pipeline.
    pub pipeline: Arc<SummarizationPipeline>,
    /// Outbound mail client.
    pub mailer: Arc<Mailer>,
    /// Share-link builder.
    pub links: ShareLinks,
}

impl AppState {
    /// Create new application state.
    pub fn new(
        db: Database,
        pipeline: SummarizationPipeline,
        mailer: Mailer,
        links: ShareLinks,
    ) -> Self {
        Self {
            db,
            pipeline: Arc::new(pipeline),
            mailer: Arc::new(mailer),
            links,
        }
    }
}
