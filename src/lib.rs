//! In-process dispatch of synthetic HTTP-style requests.
//!
//! Bridges an agent/tool-calling layer to a registry of request handlers
//! without performing real network I/O: a request is fabricated in memory,
//! the matching handler runs against a synthetic channel, and every dispatch
//! produces exactly one success or failure result.

pub mod channel;
pub mod dispatch;
pub mod domain;
pub mod errors;
pub mod mcp;
pub mod registry;
pub mod request;

pub use channel::{HandlerResponse, SyntheticChannel};
pub use dispatch::Dispatcher;
pub use errors::DispatchError;
pub use registry::{HandlerRegistry, RouteHandler, RouteTable};
pub use request::{build_request, SyntheticRequest, CANONICAL_CONTENT_TYPE};
