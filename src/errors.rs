use bytes::Bytes;
use http::{Method, StatusCode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("bad request: {message}")]
    BadRequest { code: &'static str, message: String },
    #[error("no handler registered for {method} {path}")]
    UnregisteredRoute { method: Method, path: String },
    #[error("handler responded with status {status}")]
    FailureStatus { status: StatusCode, body: Bytes },
    #[error("handler failed: {message}")]
    HandlerFailed { code: &'static str, message: String },
    #[error("handler finished without sending a response")]
    MissingResponse,
}

impl DispatchError {
    pub fn bad_request(code: &'static str, message: impl Into<String>) -> Self {
        Self::BadRequest {
            code,
            message: message.into(),
        }
    }

    pub fn unregistered_route(method: Method, path: impl Into<String>) -> Self {
        Self::UnregisteredRoute {
            method,
            path: path.into(),
        }
    }

    pub fn failure_status(status: StatusCode, body: Bytes) -> Self {
        Self::FailureStatus { status, body }
    }

    pub fn handler_failed(code: &'static str, message: impl Into<String>) -> Self {
        Self::HandlerFailed {
            code,
            message: message.into(),
        }
    }
}
