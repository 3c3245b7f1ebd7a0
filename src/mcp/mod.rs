//! Model Context Protocol (MCP) integration and JSON-RPC implementations
//!
//! Provides protocol-level specifics surrounding JSON-RPC formatting, error
//! mapping, and method routing for the tool surface.

pub mod rpc;
pub mod server;
