//! # ViaCEP Gateway API Server
//!
//! REST front for the address lookup gateway.
//!
//! ## Endpoints
//!
//! - `GET /api/endereco/:uf/:cidade/:logradouro` - Look up postal codes for an address
//! - `GET /api/endereco/historico` - Last ten successful queries
//! - `GET /api/health` - Liveness probe (also served at `/health`)
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::net::SocketAddr;
//! use viacep_api::{ApiServer, ApiConfig};
//!
//! let server = ApiServer::new(ApiConfig::from_env())?;
//! let addr: SocketAddr = "0.0.0.0:8080".parse()?;
//! server.run(addr).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod dto;
mod error;
mod handlers;
mod routes;
mod state;
mod validation;

pub use error::ApiError;
pub use routes::create_router;
pub use state::{ApiConfig, AppState};

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use viacep_core::error::Result;

/// API server for the gateway.
pub struct ApiServer {
    state: Arc<AppState>,
}

impl ApiServer {
    /// Creates a new API server with the given configuration.
    ///
    /// Fails if the upstream base URL in `config` is not usable.
    pub fn new(config: ApiConfig) -> Result<Self> {
        Ok(Self {
            state: Arc::new(AppState::new(&config)?),
        })
    }

    /// Creates the router with all routes and layers configured.
    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        create_router(self.state.clone())
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// Runs the server on the given address.
    pub async fn run(self, addr: impl Into<SocketAddr>) -> std::io::Result<()> {
        let addr = addr.into();
        let listener = tokio::net::TcpListener::bind(addr).await?;

        info!("ViaCEP gateway listening on {}", addr);

        axum::serve(listener, self.router()).await
    }
}
