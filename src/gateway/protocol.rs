//! Gateway Protocol
//!
//! Defines the request/response shapes and the machine-readable error codes
//! exchanged at the API boundary.
//!
//! Error bodies are a minimal JSON object wrapping one code string, e.g.
//! `{"error":"NOT_FOUND"}`. Success bodies are the serialized entity or
//! entity array.

use axum::http::{header, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// --- Paths ---

/// Collection path for the card resource.
pub const CARDS_PATH: &str = "/cards";
/// Name of the id path parameter on `/cards/{id}`.
pub const PATH_PARAM_ID: &str = "id";

// --- Error codes ---

/// Malformed or missing input, detected before any downstream call.
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
/// Referenced entity absent, known only after the storage attempt.
pub const NOT_FOUND: &str = "NOT_FOUND";
/// Any other unexpected downstream failure.
pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";

/// Inbound request as the gateway hands it over: method, path, the path
/// parameters the gateway already extracted, and the raw body if any.
#[derive(Debug, Clone)]
pub struct GatewayRequest {
    pub method: Method,
    pub path: String,
    pub path_parameters: HashMap<String, String>,
    pub body: Option<String>,
}

impl GatewayRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            path_parameters: HashMap::new(),
            body: None,
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_path_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.path_parameters.insert(name.into(), value.into());
        self
    }
}

/// Outbound response: a status plus an optional JSON body.
#[derive(Debug, Clone)]
pub struct GatewayResponse {
    pub status: StatusCode,
    pub body: Option<String>,
}

impl GatewayResponse {
    pub fn empty(status: StatusCode) -> Self {
        Self { status, body: None }
    }

    pub fn with_body(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: Some(body.into()),
        }
    }
}

impl IntoResponse for GatewayResponse {
    fn into_response(self) -> Response {
        match self.body {
            Some(body) => (
                self.status,
                [(header::CONTENT_TYPE, "application/json")],
                body,
            )
                .into_response(),
            None => self.status.into_response(),
        }
    }
}

/// Body shape for failed requests.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    /// The machine-readable error code.
    pub error: String,
}
