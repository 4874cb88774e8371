//! Response bodies of the pay slip API.
//!
//! A successful call returns a [`PayslipResponse`]; any failure returns an
//! [`ApiError`] body whose status is chosen from the [`ErrorCode`].

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::PayrollResult;

/// Body of a successful `/payslip` call.
#[derive(Debug, Clone, Serialize)]
pub struct PayslipResponse {
    /// Identifier of this calculation, also used as the log correlation id.
    pub calculation_id: Uuid,
    /// When the pay slip was computed.
    pub timestamp: DateTime<Utc>,
    /// Crate version that computed the pay slip.
    pub engine_version: String,
    /// Code of the payroll year whose rates were applied (e.g., "fr2024").
    pub config_code: String,
    /// Employee identifier echoed from the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    /// The computed pay slip.
    pub payslip: PayrollResult,
}

/// Machine-readable category of an API failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// The body is not valid JSON for a pay slip request.
    MalformedJson,
    /// A required request field is missing.
    ValidationError,
    /// The request was not sent as `application/json`.
    MissingContentType,
    /// A payroll amount is out of range.
    InvalidInput,
    /// The server's payroll configuration cannot serve the request.
    ConfigError,
}

impl ErrorCode {
    /// Returns the HTTP status reported for this code.
    pub fn status(self) -> StatusCode {
        match self {
            Self::MalformedJson
            | Self::ValidationError
            | Self::MissingContentType
            | Self::InvalidInput => StatusCode::BAD_REQUEST,
            Self::ConfigError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error body returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Failure category.
    pub code: ErrorCode,
    /// What went wrong, suitable for display.
    pub message: String,
    /// Extra context, such as the offending contribution or file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates an error without details.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Attaches details to the error.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// The body could not be read as a pay slip request.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MalformedJson, message)
    }

    /// A required field such as `base_salary` is absent.
    pub fn missing_field(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationError, message)
    }

    /// The payroll configuration failed; `details` names what is wrong.
    pub fn config_error(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message).with_details(details)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.code.status(),
            [(header::CONTENT_TYPE, "application/json")],
            Json(self),
        )
            .into_response()
    }
}

impl From<EngineError> for ApiError {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::InvalidInput { .. } => {
                ApiError::new(ErrorCode::InvalidInput, error.to_string())
            }
            EngineError::MissingRate { contribution } => ApiError::config_error(
                "Rate table is incomplete",
                format!("No rate configured for contribution '{}'", contribution),
            ),
            EngineError::InvalidRate {
                contribution,
                message,
            } => ApiError::config_error(
                "Rate table is invalid",
                format!("Contribution '{}': {}", contribution, message),
            ),
            EngineError::InvalidConfig { field, message } => ApiError::config_error(
                "Statutory constants are invalid",
                format!("Field '{}': {}", field, message),
            ),
            EngineError::ConfigNotFound { path } => {
                ApiError::config_error("Configuration file is missing", path)
            }
            EngineError::ConfigParseError { path, message } => ApiError::config_error(
                "Configuration file is unreadable",
                format!("{}: {}", path, message),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_serializes_screaming_snake_case() {
        let json = serde_json::to_string(&ErrorCode::MissingContentType).unwrap();
        assert_eq!(json, "\"MISSING_CONTENT_TYPE\"");
    }

    #[test]
    fn test_details_skipped_when_absent() {
        let json = serde_json::to_string(&ApiError::malformed_json("bad body")).unwrap();
        assert!(json.contains("\"code\":\"MALFORMED_JSON\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_invalid_input_is_a_client_error() {
        let error: ApiError = EngineError::InvalidInput {
            field: "base_salary".to_string(),
            message: "must not be negative (got -100)".to_string(),
        }
        .into();

        assert_eq!(error.code, ErrorCode::InvalidInput);
        assert_eq!(error.code.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            error.message,
            "Invalid payroll input 'base_salary': must not be negative (got -100)"
        );
    }

    #[test]
    fn test_missing_rate_is_a_server_error_naming_the_contribution() {
        let error: ApiError = EngineError::MissingRate {
            contribution: "family_allowance".to_string(),
        }
        .into();

        assert_eq!(error.code.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(error.details.unwrap().contains("family_allowance"));
    }

    #[test]
    fn test_every_config_failure_maps_to_config_error() {
        let errors = [
            EngineError::InvalidRate {
                contribution: "apec".to_string(),
                message: "employee rate 1 is not in [0, 1)".to_string(),
            },
            EngineError::InvalidConfig {
                field: "ceiling".to_string(),
                message: "must be positive (got 0)".to_string(),
            },
            EngineError::ConfigNotFound {
                path: "config/fr2024/year.yaml".to_string(),
            },
            EngineError::ConfigParseError {
                path: "rates.yaml".to_string(),
                message: "bad indentation".to_string(),
            },
        ];

        for engine_error in errors {
            let error: ApiError = engine_error.into();
            assert_eq!(error.code, ErrorCode::ConfigError);
            assert!(error.details.is_some());
        }
    }

    #[test]
    fn test_into_response_uses_code_status() {
        let response = ApiError::missing_field("missing field `base_salary`").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
