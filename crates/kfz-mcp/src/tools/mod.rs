//! MCP tool implementations

mod fields;
mod generate;

pub use fields::handle_list_fields;
pub use generate::{handle_generate, GenerateParams};

/// Tool name for chat-to-XML generation
pub const GENERATE_XML: &str = "generate_xml_from_chat";

/// Tool name for the field listing
pub const LIST_FIELDS: &str = "list_field_definitions";
