use std::env;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

use paramlog_axum::log_parameters;
use paramlog_core::{ParamLogConfig, ParameterLogger};

mod error;
mod middleware;
mod routes;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging; request fields land on the `http_request` span.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .with_current_span(true)
        .init();

    let addr = env::var("PARAMLOG_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    let config = ParamLogConfig::from_env()?;
    tracing::info!(
        exclusions = ?config.exclusions.entries(),
        max_form_bytes = config.max_form_bytes,
        "parameter logging configured"
    );

    let logger = ParameterLogger::from_config(&config);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(routes::health))
        .route("/search", get(routes::search))
        .route("/accounts", post(routes::accounts::sign_up))
        .route("/accounts/login", post(routes::accounts::log_in))
        .route("/accounts/{id}/avatar", post(routes::uploads::upload_avatar))
        .route("/payments", post(routes::payments::charge))
        .layer(axum_mw::from_fn_with_state(logger, log_parameters))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
