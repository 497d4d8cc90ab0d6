//! Fields tool - List known field definitions

use crate::protocol::ToolCallResult;
use kfz_assistant::{summarize_field_definitions, Assistant};

/// Handle list_field_definitions tool invocation
pub fn handle_list_fields(assistant: &Assistant) -> ToolCallResult {
    ToolCallResult::text(summarize_field_definitions(assistant.field_definitions()))
}
