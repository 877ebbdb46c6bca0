//! ServerBuilder for fluent API to build HTTP servers

use super::handlers::AppState;
use super::router::{build_employee_routes, build_health_routes};
use crate::config::ServerConfig;
use crate::core::error::panic_response;
use crate::core::service::EmployeeService;
use crate::storage::InMemoryEmployeeStore;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builder for creating the HTTP server
///
/// # Example
///
/// ```ignore
/// ServerBuilder::new()
///     .with_config(ServerConfig::load()?)
///     .with_service(InMemoryEmployeeStore::new())
///     .serve()
///     .await?;
/// ```
pub struct ServerBuilder {
    config: ServerConfig,
    service: Option<Arc<dyn EmployeeService>>,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder with default configuration
    pub fn new() -> Self {
        Self {
            config: ServerConfig::default(),
            service: None,
            custom_routes: Vec::new(),
        }
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: ServerConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the employee service
    ///
    /// Defaults to an empty [`InMemoryEmployeeStore`] when not called.
    pub fn with_service(mut self, service: impl EmployeeService + 'static) -> Self {
        self.service = Some(Arc::new(service));
        self
    }

    /// Set an already shared employee service
    pub fn with_shared_service(mut self, service: Arc<dyn EmployeeService>) -> Self {
        self.service = Some(service);
        self
    }

    /// Add custom routes to the server
    ///
    /// They are merged before the tracing, panic and CORS layers are applied,
    /// so they share the same failure handling as the employee routes.
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// The configuration the server will use
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the complete router
    pub fn build(self) -> Router {
        let service = self
            .service
            .unwrap_or_else(|| Arc::new(InMemoryEmployeeStore::new()));

        let mut app = build_health_routes().merge(build_employee_routes(AppState::new(service)));

        for custom_router in self.custom_routes {
            app = app.merge(custom_router);
        }

        let app = app.layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CatchPanicLayer::custom(panic_response)),
        );

        if self.config.cors_allow_all {
            app.layer(CorsLayer::permissive())
        } else {
            app
        }
    }

    /// Serve the application with graceful shutdown
    ///
    /// This will:
    /// - Bind to the configured address
    /// - Start serving requests
    /// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
    pub async fn serve(self) -> Result<()> {
        let addr = self.config.bind_address();
        let app = self.build();
        let listener = TcpListener::bind(&addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
