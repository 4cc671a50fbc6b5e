//! HTTP server for the schools API.

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::router::{create_router, AppState};
use crate::storage::{MemorySchoolStore, SchoolStore};

/// Schools API server.
pub struct SchoolServer {
    config: Arc<Config>,
    store: Arc<dyn SchoolStore>,
}

impl SchoolServer {
    /// Creates a new server with an empty in-memory store.
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(MemorySchoolStore::new()),
        }
    }

    /// Creates a new server whose store is loaded from the configured seed
    /// file, or empty when none is configured.
    pub fn from_config(config: Config) -> std::io::Result<Self> {
        let store: Arc<dyn SchoolStore> = match &config.seed {
            Some(path) => {
                let store = MemorySchoolStore::load_seed(path)?;
                info!("Loaded seed file {}", path.display());
                Arc::new(store)
            }
            None => Arc::new(MemorySchoolStore::new()),
        };
        Ok(Self::with_store(config, store))
    }

    /// Creates a new server with a custom store.
    pub fn with_store(config: Config, store: Arc<dyn SchoolStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }

    /// Binds the configured address and runs the server until Ctrl+C.
    pub async fn run(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let addr: SocketAddr = self.config.bind_address().parse()?;
        let listener = TcpListener::bind(addr).await?;
        self.serve(listener).await
    }

    /// Runs the server on an already bound listener until Ctrl+C.
    pub async fn serve(
        self,
        listener: TcpListener,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let state = AppState {
            config: self.config.clone(),
            store: self.store.clone(),
        };

        let app = create_router(state).layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any)
                        .expose_headers(Any),
                ),
        );

        info!(
            "Schools service is listening on http://{} ({} schools loaded)",
            listener.local_addr()?,
            self.store.total().await
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Schools service stopped");
        Ok(())
    }

    /// Returns the bind address.
    pub fn bind_address(&self) -> String {
        self.config.bind_address()
    }

    /// Returns the base URL for the service.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.bind_address())
    }

    /// Returns the store backing this server.
    pub fn store(&self) -> Arc<dyn SchoolStore> {
        self.store.clone()
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // Without a signal handler the server runs until the process exits.
        std::future::pending::<()>().await;
    }
}

/// Builder for creating a schools server.
pub struct SchoolServerBuilder {
    config: Config,
    store: Option<Arc<dyn SchoolStore>>,
}

impl SchoolServerBuilder {
    /// Creates a new builder with default configuration.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            store: None,
        }
    }

    /// Sets the configuration.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Sets the host address.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    /// Sets the port.
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Sets the store.
    pub fn store(mut self, store: Arc<dyn SchoolStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Builds the server.
    pub fn build(self) -> SchoolServer {
        let store = self
            .store
            .unwrap_or_else(|| Arc::new(MemorySchoolStore::new()));

        SchoolServer::with_store(self.config, store)
    }
}

impl Default for SchoolServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
