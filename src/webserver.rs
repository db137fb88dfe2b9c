use crate::payload::{Greeting, HealthStatus};
use axum::{
    Json, Router,
    body::Body,
    http::{Request, Response},
    routing::get,
};
use std::future::Future;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{Span, info};

pub async fn root() -> Json<Greeting> {
    Json(Greeting::new())
}

/// Liveness probe. Answers as long as the process can serve HTTP.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::ok())
}

pub fn create_app() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &Request<Body>| {
                    tracing::info_span!("request", method = %req.method(), uri = %req.uri())
                })
                .on_response(|res: &Response<Body>, latency: Duration, _span: &Span| {
                    let status = res.status();
                    if status.is_server_error() {
                        tracing::error!(status = status.as_u16(), latency = ?latency);
                    } else if status.is_client_error() {
                        tracing::warn!(status = status.as_u16(), latency = ?latency);
                    } else {
                        tracing::info!(status = status.as_u16(), latency = ?latency);
                    }
                }),
        )
}

/// Serves `app` on `listener` until `shutdown` resolves, then drains open connections.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    info!("Starting webserver on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    info!("Webserver stopped");
    Ok(())
}
