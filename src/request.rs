//! Synthetic requests fabricated for in-process dispatch
//!
//! A `SyntheticRequest` is a plain snapshot of method, URI, body, and headers.
//! It carries no connection and owns all of its data.

use bytes::Bytes;
use http::{header, HeaderMap, HeaderValue, Method};

/// The single media type every dispatched request advertises.
pub const CANONICAL_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Clone)]
pub struct SyntheticRequest {
    method: Method,
    uri: String,
    body: Bytes,
    headers: HeaderMap,
}

impl SyntheticRequest {
    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// The URI with any query string stripped; registries match on this.
    pub fn path(&self) -> &str {
        match self.uri.find('?') {
            Some(index) => &self.uri[..index],
            None => &self.uri,
        }
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}

/// Builds a request snapshot from caller-supplied parts.
///
/// The snapshot's content-type is forced to [`CANONICAL_CONTENT_TYPE`] no
/// matter what the caller's map contains. The caller's map is only borrowed
/// and stays observably unchanged.
pub fn build_request(
    method: Method,
    uri: impl Into<String>,
    body: Bytes,
    headers: &HeaderMap,
) -> SyntheticRequest {
    let mut snapshot = headers.clone();
    snapshot.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(CANONICAL_CONTENT_TYPE),
    );

    SyntheticRequest {
        method,
        uri: uri.into(),
        body,
        headers: snapshot,
    }
}
