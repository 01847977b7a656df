use crate::mcp::protocol::JsonRpcError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid params: {0}")]
    InvalidParams(String),

    #[error("Upstream error (status {status}): {body}")]
    Upstream { status: u16, body: String },

    #[error("Upstream request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, GatewayError>;

impl GatewayError {
    /// Convert error to a JSON-RPC 2.0 error code
    pub fn jsonrpc_code(&self) -> i32 {
        match self {
            GatewayError::UnknownTool(_) => -32601,
            GatewayError::InvalidParams(_) => -32602,
            GatewayError::Upstream { .. } => -32000,
            GatewayError::Config(_)
            | GatewayError::Http(_)
            | GatewayError::Json(_)
            | GatewayError::Internal(_) => -32603,
        }
    }

    pub(crate) fn invalid_params(err: impl std::fmt::Display) -> Self {
        GatewayError::InvalidParams(err.to_string())
    }
}

impl From<GatewayError> for JsonRpcError {
    fn from(err: GatewayError) -> Self {
        JsonRpcError::new(err.jsonrpc_code(), err.to_string())
    }
}
