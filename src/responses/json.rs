// responses/json.rs
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use serde::Serialize;

/// Serialize `value` as the body of a JSON response.
pub fn json_response<T: Serialize>(status: u16, value: &T) -> ResultResp {
    let body = serde_json::to_vec(value)?;

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::APPLICATION_JSON.as_ref())
        .body(Body::from(body))
        .map_err(|_| ServerError::InternalError)
}

/// Bare status with an optional plain-text message, for the form endpoints.
pub fn status_response(status: u16, message: &str) -> ResultResp {
    let body = if message.is_empty() {
        Body::empty()
    } else {
        Body::from(message.to_string())
    };

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_PLAIN_UTF_8.as_ref())
        .body(body)
        .map_err(|_| ServerError::InternalError)
}
