use crate::handlers;
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use trade_ledger_data::TradeRepository;

pub struct ApiServer {
    repo: TradeRepository,
}

impl ApiServer {
    #[must_use]
    pub fn new(repo: TradeRepository) -> Self {
        Self { repo }
    }

    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .route("/api/trades", get(handlers::list_trades))
            .route("/api/trades", post(handlers::create_trade))
            .route("/api/trades/:id", get(handlers::get_trade))
            .route("/api/trades/:id", put(handlers::update_trade))
            .route("/api/trades/:id", delete(handlers::delete_trade))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
            .with_state(self.repo.clone())
    }

    /// Starts the web server listening on the specified address.
    ///
    /// # Errors
    /// Returns an error if the server fails to bind to the address or serve requests.
    pub async fn serve(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("trade ledger API listening on {}", addr);

        axum::serve(listener, self.router()).await?;

        Ok(())
    }
}
