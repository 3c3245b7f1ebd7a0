//! JSON-RPC protocol representations and formatting utilities
//!
//! Provides standardized mapping of internal DispatchErrors to valid JSON-RPC payloads.

use crate::errors::DispatchError;
use rust_mcp_sdk::schema::{
    JsonrpcErrorResponse, JsonrpcResultResponse, RequestId, Result as McpResult, RpcError,
};
use serde_json::{json, Value};

pub fn is_json_rpc_error(value: &Value) -> bool {
    value.get("error").is_some()
}

pub fn dispatch_error_to_json_rpc(id: Option<Value>, err: DispatchError) -> Value {
    let message = err.to_string();

    match err {
        DispatchError::BadRequest {
            code,
            message: detail,
        } => json_rpc_error_with_data(
            id,
            -32602,
            "Invalid params",
            Some(json!({
                "code": code,
                "message": detail,
                "details": {}
            })),
        ),
        DispatchError::UnregisteredRoute { .. } => json_rpc_error_with_data(
            id,
            -32602,
            "Invalid params",
            Some(json!({
                "code": "unregistered_route",
                "message": message,
                "details": {}
            })),
        ),
        DispatchError::FailureStatus { status, body } => json_rpc_error_with_data(
            id,
            -32603,
            "Internal error",
            Some(json!({
                "code": "failure_status",
                "message": message,
                "details": {
                    "status": status.as_u16(),
                    "body": String::from_utf8_lossy(&body),
                }
            })),
        ),
        DispatchError::HandlerFailed {
            code,
            message: detail,
        } => json_rpc_error_with_data(
            id,
            -32603,
            "Internal error",
            Some(json!({
                "code": code,
                "message": detail,
                "details": {}
            })),
        ),
        DispatchError::MissingResponse => json_rpc_error_with_data(
            id,
            -32603,
            "Internal error",
            Some(json!({
                "code": "missing_response",
                "message": message,
                "details": {}
            })),
        ),
    }
}

pub fn json_rpc_error(id: Option<Value>, code: i32, message: &str) -> Value {
    json_rpc_error_with_data(id, code, message, None)
}

pub fn json_rpc_error_with_data(
    id: Option<Value>,
    code: i32,
    message: &str,
    data: Option<Value>,
) -> Value {
    let response = JsonrpcErrorResponse::new(
        RpcError {
            code: i64::from(code),
            data,
            message: message.to_string(),
        },
        id.as_ref().and_then(value_to_request_id),
    );
    serde_json::to_value(response).expect("jsonrpc error response serialization")
}

pub fn json_rpc_result(id: Option<Value>, result: Value) -> Value {
    if let Some(request_id) = id.as_ref().and_then(value_to_request_id) {
        let extra = result.as_object().cloned();
        let response = JsonrpcResultResponse::new(request_id, McpResult { meta: None, extra });
        return serde_json::to_value(response).expect("jsonrpc result response serialization");
    }

    json!({
        "jsonrpc": "2.0",
        "id": id,
        "result": result
    })
}

pub fn value_to_request_id(value: &Value) -> Option<RequestId> {
    if let Some(string_id) = value.as_str() {
        return Some(RequestId::String(string_id.to_string()));
    }

    value.as_i64().map(RequestId::Integer)
}

pub fn request_id_to_value(id: RequestId) -> Value {
    match id {
        RequestId::String(value) => Value::String(value),
        RequestId::Integer(value) => Value::Number(value.into()),
    }
}
