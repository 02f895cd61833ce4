use crate::AppState;
use crate::features;
use anyhow::{Context, Result};
use axum::Router;
use http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

/// Builds the full HTTP surface: the api routes, CORS and request tracing.
pub fn build_app(state: AppState) -> Result<Router> {
    let cors = cors_layer(&state.config.allowed_origins)?;

    Ok(Router::new()
        .nest("/api", features::api_router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

// PUT and DELETE are allowed even though no route answers them yet
pub fn cors_layer(allowed_origins: &[String]) -> Result<CorsLayer> {
    let origins = allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .with_context(|| format!("Invalid CORS origin '{}'", origin))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]))
}
