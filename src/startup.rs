use crate::config::ItemsConfig;
use crate::error::AppError;
use crate::handlers;
use crate::middleware::cors_middleware;
use crate::services::ItemStore;
use axum::{middleware::from_fn, routing::get, Router};
use std::future::IntoFuture;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub store: ItemStore,
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
}

impl Application {
    pub async fn build(config: ItemsConfig) -> Result<Self, AppError> {
        let store = ItemStore::seeded();
        let state = AppState { store };

        let app = Router::new()
            .route("/api/health", get(handlers::health_check))
            .route("/api/items", get(handlers::list_items))
            .route("/api/items/:id", get(handlers::get_item))
            .layer(from_fn(cors_middleware))
            .layer(TraceLayer::new_for_http())
            .with_state(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}
