use crate::{create_router, ApiConfig};
use batcuc_core::Result;
use tokio::signal;
use tracing::info;

pub struct Server {
    config: ApiConfig,
}

impl Server {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub async fn run(self) -> Result<()> {
        let router = create_router();
        let addr = self.config.bind_address();

        let listener = tokio::net::TcpListener::bind(&addr).await?;
        info!("Server listening on http://{}", addr);
        info!("  GET  /health - Health check");
        info!("  POST /api/analysis/phone - Phone number analysis");
        info!("  POST /api/analysis/six-digit - Six-digit tail analysis");
        info!("  POST /api/analysis/compatibility - Purpose compatibility");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down gracefully");
        },
        _ = terminate => {
            info!("Received SIGTERM, shutting down gracefully");
        },
    }
}
