use axum::http::{header, HeaderValue, Method};
use ecoscan::config::ConfigError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Allows the configured frontend to call the API with cookies attached.
pub(crate) fn cors_layer(origin: &str) -> Result<CorsLayer, ConfigError> {
    let origin =
        HeaderValue::from_str(origin.trim()).map_err(|_| ConfigError::InvalidCorsOrigin {
            origin: origin.to_string(),
        })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true))
}
