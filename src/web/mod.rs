//! Web layer module
//!
//! HTTP interface for the zip lookup service. Handlers are thin and
//! delegate to the service layer; cross-cutting concerns such as request
//! logging and the CORS header live in middleware layers applied here.

use anyhow::{Context, Result};
use axum::{
    Router,
    http::{HeaderValue, header::ACCESS_CONTROL_ALLOW_ORIGIN},
    routing::get,
};
use chrono::{DateTime, Utc};
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::info;

use crate::{config::Config, services::ZipLookupService};

pub mod handlers;
pub mod middleware;
pub mod responses;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub zip_lookup: ZipLookupService,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(zip_lookup: ZipLookupService) -> Self {
        Self {
            zip_lookup,
            started_at: Utc::now(),
        }
    }
}

/// Web server configuration and setup
pub struct WebServer {
    app: Router,
    addr: String,
}

impl WebServer {
    pub fn new(config: &Config, state: AppState) -> Result<Self> {
        let addr = config.bind_addr()?.to_string();
        let app = Self::create_router(state, config.web.request_logging);
        Ok(Self { app, addr })
    }

    /// Build the router with all routes and middleware
    pub fn create_router(state: AppState, request_logging: bool) -> Router {
        let router = Router::new()
            .route("/hello", get(handlers::hello::hello))
            .route("/health", get(handlers::health::health_check))
            .merge(Self::zip_routes())
            .with_state(state);

        if request_logging {
            router.layer(axum::middleware::from_fn(
                middleware::request_logging_middleware,
            ))
        } else {
            router
        }
    }

    /// City lookup routes, every response carrying an open CORS header
    fn zip_routes() -> Router<AppState> {
        Router::new()
            .route("/zips/city/", get(handlers::zips::city_root))
            .route("/zips/city/{*city}", get(handlers::zips::city_lookup))
            .layer(SetResponseHeaderLayer::overriding(
                ACCESS_CONTROL_ALLOW_ORIGIN,
                HeaderValue::from_static("*"),
            ))
    }

    pub fn addr(&self) -> &str {
        &self.addr
    }

    /// Bind and serve until SIGINT or SIGTERM
    pub async fn serve(self) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(&self.addr)
            .await
            .with_context(|| format!("Failed to bind to {}", self.addr))?;

        info!("server is listening at http://{}", self.addr);

        axum::serve(listener, self.app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let (mut sigterm, mut sigint) = match (
            signal(SignalKind::terminate()),
            signal(SignalKind::interrupt()),
        ) {
            (Ok(term), Ok(int)) => (term, int),
            (Err(e), _) | (_, Err(e)) => {
                tracing::error!("failed to install signal handlers: {}", e);
                std::future::pending::<()>().await;
                return;
            }
        };

        tokio::select! {
            _ = sigterm.recv() => {
                info!("Received SIGTERM, shutting down gracefully");
            }
            _ = sigint.recv() => {
                info!("Received SIGINT (Ctrl+C), shutting down gracefully");
            }
        }
    }

    #[cfg(not(unix))]
    {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down gracefully");
    }
}
