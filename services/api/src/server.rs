use crate::cli::ServeArgs;
use crate::infra::{cors_layer, AppState};
use crate::routes::with_service_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use ecoscan::api::{scan_router, ScanState};
use ecoscan::config::AppConfig;
use ecoscan::error::AppError;
use ecoscan::recognition::LabelDetector;
use ecoscan::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let detector = Arc::new(LabelDetector::from_config(&config.vision)?);
    let vision_enabled = detector.vision_enabled();
    let scan_state = ScanState::new(detector, config.server.max_upload_bytes);

    let app = with_service_routes(scan_router(scan_state))
        .layer(Extension(app_state))
        .layer(cors_layer(&config.server.cors_origin)?)
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        vision_enabled,
        cors_origin = %config.server.cors_origin,
        "ecoscan service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
