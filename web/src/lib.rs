//! HTTP surface of the transcript relay.
//!
//! Exposes the transcript webhook, the live smart-assistant and the
//! post-meeting analysis endpoints, plus a health check and the OpenAPI docs.

use log::*;
use tokio::net::TcpListener;

pub use self::error::{Error, Result};
pub use service::AppState;

mod controller;
mod error;
mod params;
pub mod router;

/// Bind the configured interface and port and serve requests until the process exits.
pub async fn init_server(app_state: AppState) -> std::io::Result<()> {
    let config = app_state.config_ref();
    let host = config.interface.as_deref().unwrap_or("0.0.0.0");
    let addr = format!("{host}:{}", config.port);

    let listener = TcpListener::bind(&addr).await?;
    info!("Server starting... listening for connections on http://{addr}");

    axum::serve(listener, router::define_routes(app_state)).await
}
