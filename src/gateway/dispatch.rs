//! Request dispatcher: parses method + path + body, invokes the card
//! service, and maps outcomes to status codes and error-code bodies.

use axum::http::{Method, StatusCode};
use serde::Serialize;
use uuid::Uuid;

use super::protocol::{
    ErrorBody, GatewayRequest, GatewayResponse, CARDS_PATH, INTERNAL_ERROR, NOT_FOUND,
    PATH_PARAM_ID, VALIDATION_ERROR,
};
use crate::card::{Card, CardService, ServiceError};

/// Routes one gateway request. Stateless; makes exactly one downstream
/// service call; validation failures short-circuit with zero downstream
/// calls.
pub fn dispatch(service: &CardService, request: &GatewayRequest) -> GatewayResponse {
    tracing::info!("Got {} call to {}", request.method, request.path);

    if request.path == CARDS_PATH {
        return if request.method == Method::GET {
            list_cards(service)
        } else if request.method == Method::POST {
            create_card(service, request.body.as_deref())
        } else {
            GatewayResponse::empty(StatusCode::METHOD_NOT_ALLOWED)
        };
    }

    let item_path = request
        .path
        .strip_prefix(CARDS_PATH)
        .is_some_and(|rest| rest.starts_with('/'));
    if item_path {
        return if request.method == Method::DELETE {
            delete_card(service, request.path_parameters.get(PATH_PARAM_ID))
        } else {
            GatewayResponse::empty(StatusCode::METHOD_NOT_ALLOWED)
        };
    }

    GatewayResponse::empty(StatusCode::NOT_FOUND)
}

fn list_cards(service: &CardService) -> GatewayResponse {
    match service.get_all_items() {
        Ok(cards) => json_response(StatusCode::OK, &cards),
        Err(error) => internal_error(error),
    }
}

fn create_card(service: &CardService, body: Option<&str>) -> GatewayResponse {
    let raw = match body {
        Some(raw) => raw,
        None => return error_response(StatusCode::BAD_REQUEST, VALIDATION_ERROR),
    };
    let card: Card = match serde_json::from_str(raw) {
        Ok(card) => card,
        Err(error) => {
            tracing::debug!("Failed to decode card body: {}", error);
            return error_response(StatusCode::BAD_REQUEST, VALIDATION_ERROR);
        }
    };
    match service.create_item(Some(card)) {
        Ok(stored) => json_response(StatusCode::CREATED, &stored),
        Err(ServiceError::InvalidArgument) => {
            error_response(StatusCode::BAD_REQUEST, VALIDATION_ERROR)
        }
        Err(error) => internal_error(error),
    }
}

fn delete_card(service: &CardService, raw_id: Option<&String>) -> GatewayResponse {
    let id = match raw_id.map(|raw| Uuid::parse_str(raw)) {
        Some(Ok(id)) => id,
        // Missing or malformed id parameter, either way the reference is
        // unusable before any storage attempt.
        _ => return error_response(StatusCode::BAD_REQUEST, VALIDATION_ERROR),
    };
    match service.delete_item(Some(id)) {
        Ok(true) => GatewayResponse::empty(StatusCode::NO_CONTENT),
        Ok(false) => error_response(StatusCode::NOT_FOUND, NOT_FOUND),
        Err(error) => internal_error(error),
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: &T) -> GatewayResponse {
    match serde_json::to_string(body) {
        Ok(json) => GatewayResponse::with_body(status, json),
        Err(error) => {
            tracing::error!("Failed to serialize response body: {}", error);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR)
        }
    }
}

fn error_response(status: StatusCode, code: &str) -> GatewayResponse {
    let body = ErrorBody {
        error: code.to_string(),
    };
    let json = serde_json::to_string(&body)
        .unwrap_or_else(|_| format!("{{\"error\":\"{}\"}}", code));
    GatewayResponse::with_body(status, json)
}

fn internal_error(error: ServiceError) -> GatewayResponse {
    tracing::error!("Unhandled failure during dispatch: {}", error);
    error_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR)
}
