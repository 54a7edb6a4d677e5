//! Uniform JSON wrapper returned by every article operation.
//!
//! The numeric `status` inside the body is the result code clients read. The
//! transport status stays `200 OK` for every envelope except a path id that
//! resolves to nothing, which is a genuine `404`.
use crate::application::{ApplicationResult, error::ApplicationError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

pub const STATUS_OK: u16 = 200;
pub const STATUS_CREATED: u16 = 201;
pub const STATUS_FAILED: u16 = 400;
pub const STATUS_NOT_FOUND: u16 = 404;

#[derive(Debug, Serialize)]
pub struct EnvelopeBody<T> {
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug)]
pub struct Envelope<T> {
    transport: StatusCode,
    body: EnvelopeBody<T>,
}

impl<T> Envelope<T> {
    pub fn success(status: u16, data: T) -> Self {
        Self {
            transport: StatusCode::OK,
            body: EnvelopeBody {
                status,
                data: Some(data),
                message: None,
            },
        }
    }

    pub fn ok(data: T) -> Self {
        Self::success(STATUS_OK, data)
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self::failure(StatusCode::OK, STATUS_FAILED, message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::failure(StatusCode::NOT_FOUND, STATUS_NOT_FOUND, message.into())
    }

    pub fn from_error(err: &ApplicationError) -> Self {
        tracing::warn!(error = %err, "article operation failed");
        Self::failed(err.to_string())
    }

    fn failure(transport: StatusCode, status: u16, message: String) -> Self {
        Self {
            transport,
            body: EnvelopeBody {
                status,
                data: None,
                message: Some(message),
            },
        }
    }

    pub fn transport_status(&self) -> StatusCode {
        self.transport
    }

    pub fn body(&self) -> &EnvelopeBody<T> {
        &self.body
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        (self.transport, Json(self.body)).into_response()
    }
}

pub trait IntoEnvelope<T> {
    /// Wrap a success with the given body status, or any failure as `400`.
    fn into_envelope(self, status: u16) -> Envelope<T>;
}

impl<T> IntoEnvelope<T> for ApplicationResult<T> {
    fn into_envelope(self, status: u16) -> Envelope<T> {
        match self {
            Ok(data) => Envelope::success(status, data),
            Err(err) => Envelope::from_error(&err),
        }
    }
}
