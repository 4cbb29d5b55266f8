use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use raices::calculators::{financing, fractional};
use raices::calculators::{FinancingQuote, FinancingRequest};
use raices::intake::{intake_router, ApplicationService, CmsGateway};

pub(crate) fn with_intake_routes<G>(service: Arc<ApplicationService<G>>) -> axum::Router
where
    G: CmsGateway + 'static,
{
    intake_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/quotes/financing",
            axum::routing::post(financing_quote_endpoint),
        )
        .route(
            "/api/v1/quotes/fractional",
            axum::routing::post(fractional_quote_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn financing_quote_endpoint(
    Json(request): Json<FinancingRequest>,
) -> Json<FinancingQuote> {
    Json(financing::quote(request))
}

/// One of `share_percent` or `investment_amount` selects the stake; the
/// amount wins when both are present since it is the finer-grained input.
#[derive(Debug, Deserialize)]
pub(crate) struct FractionalQuoteRequest {
    #[serde(default)]
    pub(crate) property_price: Option<u32>,
    #[serde(default)]
    pub(crate) share_percent: Option<f64>,
    #[serde(default)]
    pub(crate) investment_amount: Option<u32>,
}

pub(crate) async fn fractional_quote_endpoint(
    Json(request): Json<FractionalQuoteRequest>,
) -> Response {
    let price = request
        .property_price
        .unwrap_or(fractional::REFERENCE_PROPERTY_PRICE);

    let quote = match (request.investment_amount, request.share_percent) {
        (Some(amount), _) => fractional::quote_by_amount(price, amount),
        (None, Some(share)) => fractional::quote_by_share(price, share),
        (None, None) => {
            let payload = json!({
                "message": "share_percent or investment_amount is required",
            });
            return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
        }
    };

    (StatusCode::OK, Json(quote)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use raices::calculators::RateKind;

    #[tokio::test]
    async fn financing_endpoint_returns_the_standard_quote() {
        let request = FinancingRequest {
            property_price: 200_000,
            down_payment_percent: 15,
            term_years: 15,
            rate: RateKind::Fixed,
        };

        let Json(body) = financing_quote_endpoint(Json(request)).await;
        assert_eq!(body.loan_amount, 170_000);
        assert_eq!(body.monthly_payment, 2_264);
        assert_eq!(body.total_upfront, 38_000);
    }

    #[tokio::test]
    async fn fractional_endpoint_accepts_a_share() {
        let request = FractionalQuoteRequest {
            property_price: None,
            share_percent: Some(5.0),
            investment_amount: None,
        };

        let response = fractional_quote_endpoint(Json(request)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .expect("body reads");
        let payload: serde_json::Value = serde_json::from_slice(&bytes).expect("json");
        assert_eq!(payload.get("investment_amount"), Some(&json!(10_000)));
        assert_eq!(payload.get("projected_income_low"), Some(&json!(900)));
        assert_eq!(payload.get("projected_income_high"), Some(&json!(1_800)));
    }

    #[tokio::test]
    async fn fractional_endpoint_prefers_the_amount_when_both_are_sent() {
        let request = FractionalQuoteRequest {
            property_price: None,
            share_percent: Some(5.0),
            investment_amount: Some(20_000),
        };

        let response = fractional_quote_endpoint(Json(request)).await;
        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .expect("body reads");
        let payload: serde_json::Value = serde_json::from_slice(&bytes).expect("json");
        assert_eq!(payload.get("investment_amount"), Some(&json!(20_000)));
        assert_eq!(payload.get("share_percent"), Some(&json!(10.0)));
    }

    #[tokio::test]
    async fn fractional_endpoint_requires_a_stake_selector() {
        let request = FractionalQuoteRequest {
            property_price: None,
            share_percent: None,
            investment_amount: None,
        };

        let response = fractional_quote_endpoint(Json(request)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
