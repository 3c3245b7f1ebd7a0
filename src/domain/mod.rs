//! Domain argument parsing and tool integrations
//!
//! Provides the agent-facing route invocation exposed over the MCP protocol

pub mod tools;
pub mod utils;
