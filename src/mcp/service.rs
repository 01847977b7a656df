use crate::error::{GatewayError, Result};
use crate::mcp::protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};
use crate::mcp::types::{
    CallToolParams, CallToolResult, InitializeResult, ListToolsResult, ServerCapabilities,
    ServerInfo, ToolsCapability, PROTOCOL_VERSION,
};
use crate::tools::{registry, shaping, ToolInvocation};
use crate::upstream::LeadWireClient;
use serde_json::Value;
use tracing::{debug, warn};

/// Dispatches MCP JSON-RPC methods onto the upstream client. Stateless: every
/// request is an independent transaction.
pub struct McpService {
    client: LeadWireClient,
}

impl McpService {
    pub fn new(client: LeadWireClient) -> Self {
        Self { client }
    }

    /// Handle one JSON-RPC request and produce the matching response
    /// envelope, echoing the caller's id.
    pub async fn handle(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        let id = request.id.clone().unwrap_or(Value::Null);

        let result = match request.method.as_str() {
            "initialize" => self.initialize(),
            "ping" => Ok(Value::Object(Default::default())),
            "tools/list" => self.list_tools(),
            "tools/call" => self.call_tool(request.params).await,
            method => {
                debug!(method = %method, "unknown RPC method");
                return JsonRpcResponse::error(id, JsonRpcError::method_not_found(method));
            }
        };

        match result {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err(err) => {
                warn!(method = %request.method, error = %err, "request failed");
                JsonRpcResponse::error(id, err.into())
            }
        }
    }

    fn initialize(&self) -> Result<Value> {
        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: ToolsCapability {},
            },
            server_info: ServerInfo {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        };
        Ok(serde_json::to_value(result)?)
    }

    fn list_tools(&self) -> Result<Value> {
        let result = ListToolsResult {
            tools: registry::tool_definitions(),
        };
        Ok(serde_json::to_value(result)?)
    }

    async fn call_tool(&self, params: Option<Value>) -> Result<Value> {
        let params: CallToolParams = serde_json::from_value(params.unwrap_or(Value::Null))
            .map_err(GatewayError::invalid_params)?;

        debug!(tool = %params.name, "tool call");

        let invocation = ToolInvocation::parse(&params.name, params.arguments)?;
        let structured = self.execute(invocation).await?;
        Ok(serde_json::to_value(CallToolResult::structured(structured))?)
    }

    /// One upstream call per invocation; the call either succeeds once or
    /// the invocation fails.
    async fn execute(&self, invocation: ToolInvocation) -> Result<Value> {
        match invocation {
            ToolInvocation::SearchCompanies(args) => {
                let response = self.client.search_organizations(&args.into_upstream()).await?;
                Ok(serde_json::to_value(shaping::shape_companies(response))?)
            }
            ToolInvocation::SearchPeople(args) => {
                let response = self.client.search_people(&args.into_upstream()).await?;
                Ok(serde_json::to_value(shaping::shape_leads(response))?)
            }
            ToolInvocation::GetContactInfo(args) => {
                let response = self.client.match_person(&args.into_upstream()).await?;
                Ok(serde_json::to_value(shaping::shape_contact(response))?)
            }
            ToolInvocation::BulkEnrichPeople(args) => {
                self.client.bulk_match(&args.into_upstream()).await
            }
        }
    }
}
