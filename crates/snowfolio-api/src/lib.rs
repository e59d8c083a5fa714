pub mod docs;
pub mod dto;
pub mod errors;
pub mod handlers;
pub mod router;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use snowfolio_core::AccountInfoService;
use snowfolio_store::HistoryStore;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use docs::ApiDoc;
use router::api_router;

#[derive(Clone)]
pub struct AppState {
    pub accounts: AccountInfoService,
    pub store: Arc<dyn HistoryStore>,
}

pub struct ApiService {
    state: AppState,
    host: String,
    port: u16,
}

impl ApiService {
    pub fn new(state: AppState, host: &str, port: u16) -> Self {
        Self {
            state,
            host: host.to_owned(),
            port,
        }
    }

    /// Serve the API until the token is cancelled.
    pub async fn serve(self, token: CancellationToken) -> anyhow::Result<()> {
        let address = format!("{}:{}", self.host, self.port);
        let socket_addr: SocketAddr = address.parse()?;
        let listener = TcpListener::bind(socket_addr).await?;

        let app = api_router::<ApiDoc>(self.state.clone())
            .with_state(self.state)
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive());

        tracing::info!("🧩 API started at http://{}", socket_addr);

        let shutdown = async move { token.cancelled().await };

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
            .context("😱 API server stopped!")
    }
}
