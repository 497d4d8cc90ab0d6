//! Kfz Assistant
//!
//! The chat-to-XML pipeline shared by the HTTP API, the MCP tool server and
//! the CLI.
//!
//! ```text
//! ChatRequest → validate → Extractor → XmlEmitter → Generation { xml, stats }
//! ```
//!
//! The [`Assistant`] is built once and passed explicitly to each boundary; it
//! holds no mutable state, so one instance serves concurrent requests.
//!
//! # Example
//!
//! ```no_run
//! use kfz_assistant::{Assistant, ChatRequest};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let assistant = Assistant::with_defaults()?;
//! let generation = assistant.generate(&ChatRequest::new("15000 km pro Jahr, BMW"))?;
//!
//! println!("{}", generation.xml);
//! println!("Confidence: {:.2}", generation.stats.confidence);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod assistant;
mod error;
mod summary;
mod types;

pub use assistant::Assistant;
pub use error::AssistantError;
pub use summary::{summarize_field_definitions, summarize_generation};
pub use types::{ChatRequest, Generation, GenerationStats};
