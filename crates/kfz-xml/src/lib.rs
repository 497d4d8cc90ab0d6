//! Kfz XML
//!
//! Renders a [`FieldValueMap`](kfz_domain::FieldValueMap) into the fixed-schema
//! contract XML consumed by the backend, and reads the data section back.
//!
//! # Document layout
//!
//! ```text
//! <?xml version="1.0" encoding="UTF-8"?>
//! <KfzVertrag>
//!   <Fahrzeugdaten>
//!     <jahreskilometer>15000</jahreskilometer>
//!     <fahrzeugmarke>BMW</fahrzeugmarke>
//!     <typklasseHaftpflicht>12</typklasseHaftpflicht>
//!     <typklasseTeilkasko></typklasseTeilkasko>
//!   </Fahrzeugdaten>
//!   <Metadaten>
//!     <erstelltAm>2026-10-18T09:30:00.000Z</erstelltAm>
//!     <quelle>chat</quelle>
//!     <version>1.0</version>
//!   </Metadaten>
//! </KfzVertrag>
//! ```
//!
//! Every known field is always present; missing values render as empty
//! elements. Keys outside the known field set are not emitted. All values
//! are XML-escaped.

#![warn(missing_docs)]

mod emitter;
mod error;
mod escape;
mod reader;

pub use emitter::{XmlEmitter, DATA_ELEMENT, METADATA_ELEMENT, ROOT_ELEMENT, SCHEMA_VERSION};
pub use error::XmlError;
pub use escape::{escape, is_xml_char, unescape};
pub use reader::parse_fields;
