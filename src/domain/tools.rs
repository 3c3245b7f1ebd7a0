//! Interactive tools exposed via Model Context Protocol
//!
//! Provides the `invoke_route` passthrough: it fabricates a synthetic request
//! from the tool arguments, drives the matching registered handler through the
//! dispatcher, and hands the raw response body back to the agent.

use http::HeaderMap;
use rust_mcp_sdk::{
    macros,
    schema::{CallToolRequestParams, CallToolResult, ContentBlock, TextContent, Tool},
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::error;

use crate::dispatch::Dispatcher;
use crate::domain::utils::{encode_body, normalize_method, normalize_path};
use crate::errors::DispatchError;
use crate::mcp::rpc::{
    dispatch_error_to_json_rpc, json_rpc_error, json_rpc_error_with_data, json_rpc_result,
};
use crate::request::build_request;

#[derive(Debug, Deserialize)]
pub struct RouteCallParams {
    pub method: Option<String>,
    pub path: Option<String>,
    pub body: Option<Value>,
}

#[macros::mcp_tool(
    name = "invoke_route",
    description = "Invoke a registered HTTP-style route in process and return the raw response body. Takes a required `path` starting with a slash, an optional `method` which is one of GET, POST, PUT, DELETE, HEAD, PATCH (default GET), and an optional JSON `body` sent as application/json."
)]
#[derive(Debug, Deserialize, Serialize, macros::JsonSchema)]
pub struct InvokeRouteTool {
    pub method: Option<String>,
    pub path: String,
    pub body: Option<Value>,
}

pub fn build_tools_list() -> Vec<Tool> {
    vec![InvokeRouteTool::tool()]
}

/// Runs one route invocation end to end and decodes the response body as text.
pub async fn invoke_route(
    dispatcher: &Dispatcher,
    params: RouteCallParams,
) -> Result<String, DispatchError> {
    let method = normalize_method(params.method)?;
    let path = normalize_path(params.path)?;
    let content = encode_body(params.body.as_ref());

    let request = build_request(method, path, content, &HeaderMap::new());
    let response = dispatcher.dispatch(request).await?;

    Ok(String::from_utf8_lossy(&response.body).into_owned())
}

pub async fn handle_tools_call(
    dispatcher: &Dispatcher,
    id: Option<Value>,
    params: Option<Value>,
) -> Value {
    let Some(raw_params) = params else {
        return json_rpc_error(id, -32602, "Invalid params");
    };

    let tool_call: CallToolRequestParams = match serde_json::from_value(raw_params) {
        Ok(value) => value,
        Err(_) => return json_rpc_error(id, -32602, "Invalid params"),
    };

    match tool_call.name.as_str() {
        "invoke_route" => {
            let call_params: RouteCallParams =
                match serde_json::from_value(json!(tool_call.arguments.unwrap_or_default())) {
                    Ok(value) => value,
                    Err(_) => return json_rpc_error(id, -32602, "Invalid params"),
                };

            match invoke_route(dispatcher, call_params).await {
                Ok(text) => json_rpc_result(
                    id,
                    serde_json::to_value(CallToolResult {
                        content: vec![ContentBlock::from(TextContent::new(text, None, None))],
                        is_error: None,
                        meta: None,
                        structured_content: None,
                    })
                    .expect("invoke_route tool result serialization"),
                ),
                Err(err) => {
                    error!(error = %err, "route invocation failed");
                    dispatch_error_to_json_rpc(id, err)
                }
            }
        }
        _ => json_rpc_error_with_data(
            id,
            -32601,
            "Method not found",
            Some(json!({
                "code": "tool_not_found",
                "message": "unknown tool name",
                "details": {
                    "name": tool_call.name,
                },
            })),
        ),
    }
}
