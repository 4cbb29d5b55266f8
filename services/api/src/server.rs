use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_intake_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use raices::config::AppConfig;
use raices::error::AppError;
use raices::intake::{ApplicationService, HostedCmsClient};
use raices::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{info, warn};

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

    let gateway = HostedCmsClient::from_config(&config.cms)?.map(Arc::new);
    if gateway.is_none() {
        warn!("CMS_API_KEY/CMS_ACCOUNT_ID absent; intake runs in non-persisting mode");
    }
    let intake_service = Arc::new(ApplicationService::new(
        gateway,
        config.cms.collection_id.clone(),
    ));

    let app = with_intake_routes(intake_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "investor intake service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
