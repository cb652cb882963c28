//! HTTP server implementation

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{routing::get, Router};
use cashvm_browser::Catalog;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::error::ServerResult;
use crate::handlers;

/// Shared, read-only request state
pub struct ServerState {
    /// Opcode table and year index
    pub catalog: &'static Catalog,
    /// Static asset directories, searched in order
    pub static_dirs: Vec<PathBuf>,
}

impl ServerState {
    /// Create new server state
    pub fn new(catalog: &'static Catalog, static_dirs: Vec<PathBuf>) -> Self {
        Self {
            catalog,
            static_dirs,
        }
    }
}

/// Opcode browser HTTP server
pub struct OpcodeServer {
    config: ServerConfig,
    state: Arc<ServerState>,
}

impl OpcodeServer {
    /// Create a server over the process-wide catalog
    pub fn new(config: ServerConfig) -> Self {
        Self::with_catalog(config, Catalog::global())
    }

    /// Create a server over a specific catalog
    pub fn with_catalog(config: ServerConfig, catalog: &'static Catalog) -> Self {
        let state = ServerState::new(catalog, config.static_dirs.clone());
        Self {
            config,
            state: Arc::new(state),
        }
    }

    /// Build the router
    pub fn build_router(&self) -> Router {
        let mut router = Router::new()
            .route("/", get(handlers::redirect_root))
            .route(handlers::ENTRY_PATH, get(handlers::entry_document))
            .route("/opcodes/*rest", get(handlers::entry_document))
            .route("/api/opcodes", get(handlers::list_opcodes))
            .route("/api/opcodes/:id", get(handlers::show_opcode))
            .route("/api/categories", get(handlers::list_categories))
            .fallback(handlers::static_file)
            .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

        if self.config.enable_cors {
            router = router.layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            );
        }

        router.with_state(self.state.clone())
    }

    /// Run the server
    pub async fn run(self) -> ServerResult<()> {
        let app = self.build_router();

        let listener = TcpListener::bind(self.config.listen_addr).await?;
        tracing::info!(
            addr = %self.config.listen_addr,
            static_dirs = self.config.static_dirs.len(),
            "opcode browser listening"
        );

        axum::serve(listener, app).await?;

        Ok(())
    }

    /// Get the server listen address
    pub fn listen_addr(&self) -> SocketAddr {
        self.config.listen_addr
    }
}
