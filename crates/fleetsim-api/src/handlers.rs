//! REST API handlers.
//!
//! The simulation endpoint decodes its parameters from the query string,
//! validates them, runs a fresh engine, and returns JSON. Every response
//! carries `Access-Control-Allow-Origin: *` so browser front ends on other
//! origins can call it directly.

use axum::Json;
use axum::extract::Query;
use axum::extract::rejection::QueryRejection;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use tracing::{error, warn};

use fleetsim_core::{Geometric, SteadyStateEngine, SteadyStateRequest, validate};

/// Response wrapper for consistent API format.
#[derive(serde::Serialize)]
struct ApiResponse<T: serde::Serialize> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T: serde::Serialize> ApiResponse<T> {
    fn ok(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data: Some(data),
            error: None,
        })
    }
}

fn error_response(msg: &str, status: StatusCode) -> Response {
    (
        status,
        Json(ApiResponse::<()> {
            success: false,
            data: None,
            error: Some(msg.to_string()),
        }),
    )
        .into_response()
}

fn with_cors(mut resp: Response) -> Response {
    resp.headers_mut().insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        header::HeaderValue::from_static("*"),
    );
    resp
}

/// GET /api/v1/steady-state?hosts=&apps=&mean_instances_per_app=
pub async fn steady_state(
    query: Result<Query<SteadyStateRequest>, QueryRejection>,
) -> Response {
    let req = match query {
        Ok(Query(req)) => req,
        Err(e) => {
            warn!(error = %e, "rejected malformed query");
            return with_cors(error_response(
                &format!("decode: {e}"),
                StatusCode::BAD_REQUEST,
            ));
        }
    };

    if let Err(e) = validate(&req) {
        warn!(error = %e, "rejected out-of-range request");
        return with_cors(error_response(
            &format!("validation: {e}"),
            StatusCode::BAD_REQUEST,
        ));
    }

    // Fresh engine and entropy-seeded sampler per request; concurrent
    // requests share no random state.
    let mut engine = SteadyStateEngine::new(Geometric::from_entropy());
    match engine.execute(&req) {
        Ok(resp) => with_cors(ApiResponse::ok(resp).into_response()),
        Err(e) => {
            error!(error = %e, "simulation failed");
            with_cors(error_response(
                &format!("simulator: {e}"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ))
        }
    }
}
