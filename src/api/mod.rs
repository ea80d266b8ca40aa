mod cli;

use axum::{
    Router,
    extract::{
        Json, Query,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

use crate::core::{
    InvestmentMode, ProjectionInput, ProjectionResult, ProjectionSummary, YearlyProjection,
    build_series, clamp_input, default_input, project,
};
use crate::error::{AppError, AppResult};

pub use cli::{Cli, Command, ProjectArgs, ServeArgs, render_text, run_projection_command};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum ApiInvestmentMode {
    #[serde(alias = "recurring", alias = "SIP")]
    Sip,
    #[serde(
        alias = "one-time",
        alias = "oneTime",
        alias = "one_time",
        alias = "lump-sum"
    )]
    Lumpsum,
}

impl From<ApiInvestmentMode> for InvestmentMode {
    fn from(value: ApiInvestmentMode) -> Self {
        match value {
            ApiInvestmentMode::Sip => InvestmentMode::Sip,
            ApiInvestmentMode::Lumpsum => InvestmentMode::Lumpsum,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ProjectionPayload {
    mode: Option<ApiInvestmentMode>,
    amount: Option<f64>,
    #[serde(alias = "returnRate")]
    rate: Option<f64>,
    #[serde(alias = "timePeriod")]
    years: Option<f64>,
    breakdown: Option<bool>,
}

#[derive(Debug)]
struct ProjectionRequest {
    input: ProjectionInput,
    breakdown: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResponse {
    pub mode: InvestmentMode,
    pub input: ProjectionInput,
    pub result: ProjectionResult,
    pub summary: ProjectionSummary,
    pub yearly: Vec<YearlyProjection>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

pub fn build_projection_response(input: &ProjectionInput, breakdown: bool) -> ProjectionResponse {
    let result = project(input);
    let yearly = if breakdown {
        build_series(input)
    } else {
        Vec::new()
    };

    ProjectionResponse {
        mode: input.mode,
        input: *input,
        result,
        summary: ProjectionSummary::from_result(&result),
        yearly,
    }
}

pub fn router() -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/api/projection",
            get(projection_get_handler).post(projection_post_handler),
        )
        .fallback(not_found_handler)
}

pub async fn run_http_server(host: &str, port: u16) -> AppResult<()> {
    let listener = TcpListener::bind((host, port))
        .await
        .map_err(|source| AppError::Bind {
            addr: format!("{host}:{port}"),
            source,
        })?;
    let addr = listener.local_addr()?;
    info!("Projection HTTP API listening on http://{addr}");
    info!(
        "Local access: http://127.0.0.1:{}/api/projection",
        addr.port()
    );

    axum::serve(listener, router()).await?;
    Ok(())
}

async fn health_handler() -> Response {
    json_response(StatusCode::OK, HealthResponse { status: "ok" })
}

async fn not_found_handler() -> Response {
    AppError::NotFound.into_response()
}

async fn projection_get_handler(
    payload: Result<Query<ProjectionPayload>, QueryRejection>,
) -> Response {
    match payload {
        Ok(Query(payload)) => projection_handler_impl(payload),
        Err(rejection) => AppError::InvalidRequest(rejection.body_text()).into_response(),
    }
}

async fn projection_post_handler(
    payload: Result<Json<ProjectionPayload>, JsonRejection>,
) -> Response {
    match payload {
        Ok(Json(payload)) => projection_handler_impl(payload),
        Err(rejection) => AppError::InvalidRequest(rejection.body_text()).into_response(),
    }
}

fn projection_handler_impl(payload: ProjectionPayload) -> Response {
    let request = projection_request_from_payload(payload);
    debug!(
        mode = ?request.input.mode,
        amount = request.input.amount,
        rate_percent = request.input.rate_percent,
        years = request.input.years,
        breakdown = request.breakdown,
        "projection request"
    );

    let response = build_projection_response(&request.input, request.breakdown);
    json_response(StatusCode::OK, response)
}

/// Missing fields take the calculator defaults; everything is clamped to the
/// declared input ranges for the requested mode.
fn projection_request_from_payload(payload: ProjectionPayload) -> ProjectionRequest {
    let mode = payload
        .mode
        .map(InvestmentMode::from)
        .unwrap_or(InvestmentMode::Sip);
    let defaults = default_input(mode);

    let input = clamp_input(
        mode,
        payload.amount.unwrap_or(defaults.amount),
        payload.rate.unwrap_or(defaults.rate_percent),
        payload.years.unwrap_or(f64::from(defaults.years)),
    );

    ProjectionRequest {
        input,
        breakdown: payload.breakdown.unwrap_or(false),
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            warn!("{self}");
        } else {
            debug!("{self}");
        }
        error_response(status, &self.to_string())
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        header::HeaderValue::from_static("no-store"),
    );
    response
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}

#[cfg(test)]
fn projection_request_from_json(json: &str) -> Result<ProjectionRequest, String> {
    let payload = serde_json::from_str::<ProjectionPayload>(json)
        .map_err(|e| format!("Invalid API JSON payload: {e}"))?;
    Ok(projection_request_from_payload(payload))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    async fn send(request: Request<Body>) -> (StatusCode, Option<String>, Value) {
        let response = router().oneshot(request).await.expect("router is infallible");
        let status = response.status();
        let cache = response
            .headers()
            .get(header::CACHE_CONTROL)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should be readable");
        let body = serde_json::from_slice(&bytes).expect("body should be JSON");
        (status, cache, body)
    }

    #[test]
    fn empty_payload_uses_calculator_defaults() {
        let request = projection_request_from_json("{}").expect("json should parse");
        assert_eq!(request.input.mode, InvestmentMode::Sip);
        assert_eq!(request.input.amount, 25_000.0);
        assert_eq!(request.input.rate_percent, 12.0);
        assert_eq!(request.input.years, 10);
        assert!(!request.breakdown);
    }

    #[test]
    fn payload_accepts_web_keys_and_mode_aliases() {
        let json = r#"{
          "mode": "one-time",
          "amount": 100000,
          "returnRate": 12,
          "timePeriod": 10,
          "breakdown": true
        }"#;
        let request = projection_request_from_json(json).expect("json should parse");
        assert_eq!(request.input.mode, InvestmentMode::Lumpsum);
        assert_eq!(request.input.amount, 100_000.0);
        assert_eq!(request.input.rate_percent, 12.0);
        assert_eq!(request.input.years, 10);
        assert!(request.breakdown);
    }

    #[test]
    fn payload_values_are_clamped_per_mode() {
        let request =
            projection_request_from_json(r#"{"mode":"sip","amount":5000000,"rate":55,"years":90}"#)
                .expect("json should parse");
        assert_eq!(request.input.amount, 1_000_000.0);
        assert_eq!(request.input.rate_percent, 30.0);
        assert_eq!(request.input.years, 40);

        let request = projection_request_from_json(r#"{"mode":"lumpsum","amount":5000000}"#)
            .expect("json should parse");
        assert_eq!(request.input.amount, 5_000_000.0);
    }

    #[test]
    fn unknown_mode_is_rejected() {
        let err = projection_request_from_json(r#"{"mode":"weekly"}"#)
            .expect_err("must reject unknown mode");
        assert!(err.contains("Invalid API JSON payload"));
    }

    #[test]
    fn response_serialization_contains_expected_fields() {
        let input = ProjectionInput::new(InvestmentMode::Sip, 25_000.0, 12.0, 10);
        let response = build_projection_response(&input, true);
        let json = serde_json::to_value(&response).expect("response should serialize");

        assert_eq!(json["mode"], "sip");
        assert_eq!(json["input"]["ratePercent"], 12.0);
        assert_eq!(json["result"]["investedAmount"], 3_000_000.0);
        assert_eq!(json["result"]["totalValue"], 5_600_897.0);
        assert_eq!(json["result"]["estimatedReturns"], 2_600_897.0);
        assert_eq!(json["summary"]["totalValue"], "₹56,00,897");
        assert_eq!(json["summary"]["chart"][1]["name"], "Est. Returns");
        assert_eq!(json["yearly"].as_array().map(Vec::len), Some(10));
        assert_eq!(json["yearly"][9]["year"], 10);
        assert_eq!(json["yearly"][9]["totalValue"], 5_600_897.0);
    }

    #[test]
    fn breakdown_is_empty_unless_requested() {
        let input = ProjectionInput::new(InvestmentMode::Lumpsum, 100_000.0, 12.0, 10);
        assert!(build_projection_response(&input, false).yearly.is_empty());
    }

    #[tokio::test]
    async fn get_projection_reads_query_string() {
        let request = Request::get("/api/projection?mode=lumpsum&amount=100000&rate=12&years=10")
            .body(Body::empty())
            .expect("valid request");
        let (status, cache, body) = send(request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(cache.as_deref(), Some("no-store"));
        assert_eq!(body["result"]["totalValue"], 310_585.0);
        assert_eq!(body["result"]["estimatedReturns"], 210_585.0);
        assert_eq!(body["yearly"].as_array().map(Vec::len), Some(0));
    }

    #[tokio::test]
    async fn post_projection_returns_breakdown() {
        let request = Request::post("/api/projection")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                r#"{"mode":"sip","amount":1000,"rate":10,"years":3,"breakdown":true}"#,
            ))
            .expect("valid request");
        let (status, _, body) = send(request).await;

        assert_eq!(status, StatusCode::OK);
        let totals: Vec<f64> = body["yearly"]
            .as_array()
            .expect("yearly array")
            .iter()
            .filter_map(|row| row["totalValue"].as_f64())
            .collect();
        assert_eq!(totals, vec![12_641.0, 26_545.0, 41_840.0]);
    }

    #[tokio::test]
    async fn malformed_body_returns_error_json() {
        let request = Request::post("/api/projection")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"amount":"lots"}"#))
            .expect("valid request");
        let (status, _, body) = send(request).await;

        assert!(status.is_client_error());
        assert!(
            body["error"]
                .as_str()
                .is_some_and(|msg| msg.starts_with("Invalid projection request"))
        );
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let request = Request::get("/nope").body(Body::empty()).expect("valid request");
        let (status, _, body) = send(request).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Not found");
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let request = Request::get("/health").body(Body::empty()).expect("valid request");
        let (status, _, body) = send(request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }
}
