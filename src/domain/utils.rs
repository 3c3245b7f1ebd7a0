//! Domain-specific shared validations and formatting utilities

use bytes::Bytes;
use http::Method;
use serde_json::Value;

use crate::errors::DispatchError;

pub const SUPPORTED_METHODS: [&str; 6] = ["GET", "POST", "PUT", "DELETE", "HEAD", "PATCH"];

pub fn normalize_method(method: Option<String>) -> Result<Method, DispatchError> {
    let Some(value) = method else {
        return Ok(Method::GET);
    };

    let normalized = value.trim().to_ascii_uppercase();
    if !SUPPORTED_METHODS.contains(&normalized.as_str()) {
        return Err(DispatchError::bad_request(
            "invalid_method",
            "method must be one of: GET, POST, PUT, DELETE, HEAD, PATCH",
        ));
    }

    Method::from_bytes(normalized.as_bytes()).map_err(|_| {
        DispatchError::bad_request(
            "invalid_method",
            "method must be one of: GET, POST, PUT, DELETE, HEAD, PATCH",
        )
    })
}

pub fn normalize_path(path: Option<String>) -> Result<String, DispatchError> {
    let normalized = path.as_deref().map(str::trim).unwrap_or_default();
    if normalized.is_empty() {
        return Err(DispatchError::bad_request(
            "invalid_path",
            "path is required and must not be empty",
        ));
    }

    if !normalized.starts_with('/') {
        return Err(DispatchError::bad_request(
            "invalid_path",
            "path must start with /",
        ));
    }

    if normalized.chars().any(char::is_whitespace) {
        return Err(DispatchError::bad_request(
            "invalid_path",
            "path must not contain whitespace",
        ));
    }

    Ok(normalized.to_string())
}

pub fn encode_body(body: Option<&Value>) -> Bytes {
    match body {
        Some(value) => Bytes::from(value.to_string()),
        None => Bytes::new(),
    }
}
