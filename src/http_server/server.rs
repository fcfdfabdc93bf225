//! # HTTP Server
//!
//! Binds the movies router behind the cross-origin policy.

use std::sync::Arc;

use axum::{middleware, Router};
use tokio::net::TcpListener;

use crate::observability::Logger;
use crate::rest_api::{InMemoryMovieHandler, MovieHandler, RestServer};
use crate::store::MovieStore;

use super::config::HttpServerConfig;
use super::cors::{enforce_origin, OriginPolicy};

/// HTTP Server for the movie catalogue
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over an in-memory store
    pub fn new(config: HttpServerConfig, store: MovieStore) -> Self {
        Self::with_handler(config, Arc::new(InMemoryMovieHandler::new(store)))
    }

    /// Create a server over any handler; the caller may keep a clone
    pub fn with_handler<H: MovieHandler + 'static>(
        config: HttpServerConfig,
        handler: Arc<H>,
    ) -> Self {
        let router = Self::build_router(&config, handler);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router<H: MovieHandler + 'static>(
        config: &HttpServerConfig,
        handler: Arc<H>,
    ) -> Router {
        let policy = Arc::new(OriginPolicy::new(&config.cors_origins));

        RestServer::from_shared(handler)
            .router()
            // CORS headers for allowed origins and preflights
            .layer(policy.layer())
            // Outermost: refuse unknown origins before anything else runs
            .layer(middleware::from_fn_with_state(policy, enforce_origin))
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let listener = TcpListener::bind(self.config.socket_addr()).await?;
        let addr = listener.local_addr()?;

        let bound = addr.to_string();
        let origins = self.config.cors_origins.join(",");
        let url = format!("http://localhost:{}", addr.port());
        Logger::info(
            "SERVER_LISTENING",
            &[
                ("addr", bound.as_str()),
                ("cors_origins", origins.as_str()),
                ("url", url.as_str()),
            ],
        );

        axum::serve(listener, self.router).await?;

        Ok(())
    }
}
