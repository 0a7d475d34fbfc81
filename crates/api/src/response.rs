//! Response envelope shared by every design pattern endpoint.
//!
//! Each body has the shape `{ "status": int, "message": string, "data": T | null }`,
//! where `status` repeats the HTTP status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub status: u16,
    pub message: String,
    pub data: Option<T>,
}

impl<T: Serialize> Envelope<T> {
    /// Successful response carrying `data` and an empty message.
    pub fn data(status: StatusCode, data: T) -> Self {
        Self {
            status: status.as_u16(),
            message: String::new(),
            data: Some(data),
        }
    }
}

impl Envelope<()> {
    /// Response with a message and `data: null`.
    pub fn message(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            message: message.into(),
            data: None,
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}
