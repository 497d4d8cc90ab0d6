//! Kfz MCP Server
//!
//! Model Context Protocol server exposing the chat-to-XML assistant to
//! external AI clients.
//!
//! Provides 2 MCP tools:
//! - `generate_xml_from_chat` - Extract contract fields from chat text and render XML
//! - `list_field_definitions` - List the recognized contract fields
//!
//! # Example
//!
//! ```no_run
//! use kfz_mcp::McpServer;
//!
//! let server = McpServer::from_env().unwrap();
//! server.run().unwrap();
//! ```

#![warn(missing_docs)]

mod error;
mod protocol;
mod server;
mod tools;

pub use error::McpError;
pub use server::{McpServer, CONFIG_ENV};
