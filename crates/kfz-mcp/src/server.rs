//! MCP server implementation

use kfz_assistant::Assistant;
use kfz_extractor::ExtractorConfig;
use serde::Serialize;
use serde_json::{json, Value};
use std::io::{BufRead, Write};
use tracing::{debug, error, info};

use crate::error::McpError;
use crate::protocol::*;
use crate::tools;

/// Environment variable naming an optional extractor TOML file
pub const CONFIG_ENV: &str = "KFZ_EXTRACTOR_CONFIG";

/// MCP Server
///
/// Handles Model Context Protocol requests via stdio transport.
pub struct McpServer {
    assistant: Assistant,
}

impl McpServer {
    /// Create a new MCP server around an assistant
    pub fn new(assistant: Assistant) -> Self {
        Self { assistant }
    }

    /// Create a server configured from `KFZ_EXTRACTOR_CONFIG`, falling back
    /// to the default extractor settings when the variable is unset
    pub fn from_env() -> Result<Self, McpError> {
        let config = match std::env::var(CONFIG_ENV) {
            Ok(path) => {
                info!("Loading extractor config from {}", path);
                let contents = std::fs::read_to_string(&path)?;
                ExtractorConfig::from_toml(&contents).map_err(McpError::Config)?
            }
            Err(_) => ExtractorConfig::default(),
        };

        let assistant =
            Assistant::from_config(config).map_err(|e| McpError::Config(e.to_string()))?;
        Ok(Self::new(assistant))
    }

    /// Run the MCP server (stdio transport)
    ///
    /// Reads JSON-RPC requests from stdin and writes responses to stdout.
    pub fn run(&self) -> Result<(), McpError> {
        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();
        self.serve(stdin.lock(), &mut stdout)
    }

    /// Serve newline-delimited JSON-RPC from any reader/writer pair until EOF
    pub fn serve<R: BufRead, W: Write>(&self, reader: R, writer: &mut W) -> Result<(), McpError> {
        info!("MCP server started");

        for line in reader.lines() {
            let line = line?;
            if let Some(response) = self.handle_line(&line) {
                self.write_response(writer, &response)?;
            }
        }

        info!("MCP server stopped");
        Ok(())
    }

    /// Handle one line of input.
    ///
    /// Returns `None` for blank lines and notifications, which get no reply.
    pub fn handle_line(&self, line: &str) -> Option<Value> {
        if line.trim().is_empty() {
            return None;
        }

        debug!("Received request: {}", line);

        let message: Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(e) => {
                error!("Failed to parse request: {}", e);
                return Some(to_json(JsonRpcError::new(
                    None,
                    -32700,
                    format!("Parse error: {}", e),
                )));
            }
        };

        // Valid JSON that is not a request object
        let id = message
            .get("id")
            .filter(|id| id.is_string() || id.is_number())
            .cloned();
        let request: JsonRpcRequest = match serde_json::from_value(message) {
            Ok(req) => req,
            Err(e) => {
                let error = McpError::InvalidRequest(e.to_string());
                error!("{}", error);
                return Some(to_json(JsonRpcError::new(
                    id,
                    error.error_code(),
                    error.to_string(),
                )));
            }
        };

        if request.id.is_none() {
            debug!("Notification '{}' acknowledged", request.method);
            return None;
        }

        Some(self.handle_request(request))
    }

    /// Handle a JSON-RPC request
    fn handle_request(&self, request: JsonRpcRequest) -> Value {
        let id = request.id.clone();

        if request.jsonrpc != "2.0" {
            let error = McpError::InvalidRequest(format!(
                "Unsupported jsonrpc version: {}",
                request.jsonrpc
            ));
            return to_json(JsonRpcError::new(id, error.error_code(), error.to_string()));
        }

        match request.method.as_str() {
            "initialize" => self.handle_initialize(id),
            "tools/list" => self.handle_tools_list(id),
            "tools/call" => self.handle_tool_call(id, request.params),
            "ping" => to_json(JsonRpcResponse::new(id, json!({}))),
            _ => to_json(JsonRpcError::new(
                id,
                -32601,
                format!("Method not found: {}", request.method),
            )),
        }
    }

    /// Handle initialize request
    fn handle_initialize(&self, id: Option<Value>) -> Value {
        let response = InitializeResponse {
            protocol_version: "2024-11-05".to_string(),
            server_info: ServerInfo {
                name: "kfz-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            capabilities: Capabilities {
                tools: ToolsCapability {
                    list_changed: false,
                },
            },
        };

        to_json(JsonRpcResponse::new(id, to_json(response)))
    }

    /// Handle tools/list request
    fn handle_tools_list(&self, id: Option<Value>) -> Value {
        let response = ToolListResponse {
            tools: vec![tool_definition_generate(), tool_definition_fields()],
        };
        to_json(JsonRpcResponse::new(id, to_json(response)))
    }

    /// Handle tools/call request
    fn handle_tool_call(&self, id: Option<Value>, params: Value) -> Value {
        let tool_name = match params.get("name").and_then(|v| v.as_str()) {
            Some(name) => name,
            None => {
                return to_json(JsonRpcError::new(id, -32602, "Missing tool name".to_string()));
            }
        };

        let tool_params = match params.get("arguments") {
            Some(args) if !args.is_null() => args.clone(),
            _ => json!({}),
        };

        let result = match tool_name {
            tools::GENERATE_XML => self.call_generate_tool(tool_params),
            tools::LIST_FIELDS => Ok(tools::handle_list_fields(&self.assistant)),
            _ => Err(McpError::ToolNotFound(tool_name.to_string())),
        };

        match result {
            Ok(value) => to_json(JsonRpcResponse::new(id, to_json(value))),
            Err(e) => {
                error!("Tool call '{}' failed: {}", tool_name, e);
                to_json(JsonRpcError::new(id, e.error_code(), e.to_string()))
            }
        }
    }

    /// Call generate tool
    fn call_generate_tool(&self, params: Value) -> Result<ToolCallResult, McpError> {
        let params: tools::GenerateParams =
            serde_json::from_value(params).map_err(|e| McpError::InvalidParams(e.to_string()))?;
        Ok(tools::handle_generate(&self.assistant, params))
    }

    /// Write response to the transport
    fn write_response<W: Write>(&self, writer: &mut W, response: &Value) -> Result<(), McpError> {
        let response_str = serde_json::to_string(response)?;
        writeln!(writer, "{}", response_str)?;
        writer.flush()?;
        debug!("Sent response: {}", response_str);
        Ok(())
    }
}

/// Serialize a protocol message, degrading to an internal-error envelope
fn to_json<T: Serialize>(message: T) -> Value {
    serde_json::to_value(message).unwrap_or_else(|e| {
        json!({
            "jsonrpc": "2.0",
            "id": null,
            "error": {"code": -32603, "message": format!("Internal error: {}", e)}
        })
    })
}

// Tool definitions for tools/list response
fn tool_definition_generate() -> ToolDefinition {
    ToolDefinition {
        name: tools::GENERATE_XML.to_string(),
        description: "Extract vehicle contract fields (annual mileage, brand, tariff classes) \
                      from German chat text and render the contract XML"
            .to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "chat_text": {"type": "string", "description": "Free-form chat text, e.g. '15000 km pro Jahr, BMW, KH 12 und TK 8'"},
                "existing_data": {"type": "object", "description": "Field values captured earlier; untouched fields keep these values"}
            },
            "required": ["chat_text"]
        }),
    }
}

fn tool_definition_fields() -> ToolDefinition {
    ToolDefinition {
        name: tools::LIST_FIELDS.to_string(),
        description: "List the contract fields the assistant recognizes".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {}
        }),
    }
}
