//! HTTP handlers of the pay slip API.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::compute_payslip;

use super::request::PayslipRequest;
use super::response::{ApiError, ErrorCode, PayslipResponse};
use super::state::AppState;

/// Builds the router serving `POST /payslip` over the given state.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payslip", post(payslip_handler))
        .with_state(state)
}

/// Computes the pay slip described by the request body.
///
/// Malformed bodies and invalid amounts answer 400; configuration failures
/// answer 500. Every outcome is logged under the calculation id.
async fn payslip_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayslipRequest>, JsonRejection>,
) -> Response {
    let calculation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let error = rejection_error(rejection);
            warn!(
                calculation_id = %calculation_id,
                code = ?error.code,
                error = %error.message,
                "Rejected pay slip request"
            );
            return error.into_response();
        }
    };

    let config = state.config();
    let started = Instant::now();

    match compute_payslip(&request.inputs, config) {
        Ok(payslip) => {
            info!(
                calculation_id = %calculation_id,
                employee_id = request.employee_id.as_deref().unwrap_or("-"),
                config_code = %config.year().code,
                fiscal_gross = %payslip.fiscal_gross,
                net_payable = %payslip.net_payable,
                duration_us = started.elapsed().as_micros(),
                "Computed pay slip"
            );

            let body = PayslipResponse {
                calculation_id,
                timestamp: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                config_code: config.year().code.clone(),
                employee_id: request.employee_id,
                payslip,
            };
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(body),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                calculation_id = %calculation_id,
                employee_id = request.employee_id.as_deref().unwrap_or("-"),
                error = %err,
                "Pay slip computation failed"
            );
            ApiError::from(err).into_response()
        }
    }
}

/// Maps a JSON extraction failure to an API error.
///
/// A body that parses but lacks a required amount is a validation error;
/// anything else that fails to deserialize is malformed.
fn rejection_error(rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let text = err.body_text();
            if text.contains("missing field") {
                ApiError::missing_field(text)
            } else {
                ApiError::malformed_json(text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            ErrorCode::MissingContentType,
            "Content-Type must be application/json",
        ),
        other => ApiError::malformed_json(other.body_text()),
    }
}
