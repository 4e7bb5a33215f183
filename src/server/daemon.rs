use axum::{http::StatusCode, routing::get, Router};
use tokio::sync::broadcast;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use super::SiteConfig;

/// Static host for the built site bundle
pub struct Daemon {
  config: SiteConfig,
  shutdown_tx: broadcast::Sender<()>,
}

impl Daemon {
  pub fn new(config: SiteConfig) -> Self {
    let (shutdown_tx, _) = broadcast::channel(1);
    Self {
      config,
      shutdown_tx,
    }
  }

  pub fn config(&self) -> &SiteConfig {
    &self.config
  }

  /// Trigger graceful shutdown
  pub fn shutdown(&self) {
    tracing::info!("Initiating graceful shutdown...");
    let _ = self.shutdown_tx.send(());
  }

  /// Health probe plus the bundle directory, with optional SPA fallback
  pub fn router(&self) -> Router {
    let site = &self.config.site;
    let app = Router::new().route("/health", get(health_check));

    let app = if site.spa_fallback {
      app.fallback_service(ServeDir::new(&site.root).fallback(ServeFile::new(site.index_file())))
    } else {
      app.fallback_service(ServeDir::new(&site.root))
    };

    app.layer(TraceLayer::new_for_http())
  }

  pub async fn run(&self) -> Result<(), anyhow::Error> {
    let addr = self.config.address();
    let root = &self.config.site.root;
    if !self.config.site.index_file().exists() {
      tracing::warn!(
        "No index.html under {}; build the site with the csr feature first",
        root.display()
      );
    }

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Serving {} at http://{}", root.display(), addr);

    let mut shutdown_rx = self.shutdown_tx.subscribe();
    axum::serve(listener, self.router())
      .with_graceful_shutdown(async move {
        let _ = shutdown_rx.recv().await;
        tracing::info!("Site server shutting down");
      })
      .await?;
    Ok(())
  }
}

async fn health_check() -> StatusCode {
  StatusCode::OK
}
