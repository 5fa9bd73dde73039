//! Server Implementation
//!
//! HTTP 服务器启动和管理

use axum::{Router, middleware};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::core::{Config, Result, ServerError, ServerState};

async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    tracing::info!(target: "http_access", "{} {} {}", method, uri, response.status());

    response
}

/// 构建带状态的完整路由
pub fn build_app(state: ServerState) -> Router {
    Router::<ServerState>::new()
        .merge(crate::api::health::router())
        .merge(crate::api::complaints::router())
        .merge(crate::api::selection::router())
        .merge(crate::api::feed::router())
        .merge(crate::api::hot_topics::router())
        .merge(crate::api::appeals::router())
        .merge(crate::api::chat::router())
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(log_request))
                .layer(CorsLayer::permissive()),
        )
}

/// HTTP Server
pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self { config, state }
    }

    /// 运行直到收到 Ctrl-C
    pub async fn run(&self) -> Result<()> {
        let state = self.state.clone();

        let addr = std::net::SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(ServerError::Bind)?;
        tracing::info!(
            "Grievance server listening on {} (env: {})",
            addr,
            self.config.environment
        );

        let shutdown = async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down...");
        };

        axum::serve(listener, build_app(state))
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(ServerError::Serve)?;

        Ok(())
    }
}
