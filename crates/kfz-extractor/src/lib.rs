//! Kfz Extractor
//!
//! Turns free-form chat text into a partial [`FieldValueMap`](kfz_domain::FieldValueMap).
//!
//! # Overview
//!
//! Extraction is a fixed pipeline of independent detectors. Each detector
//! targets one semantic field group, scans the whole text with a regular
//! expression and, on its first match, proposes values for one or more
//! fields. Detectors never fail: a detector that does not match simply
//! contributes nothing.
//!
//! # Architecture
//!
//! ```text
//! chat text ─┬─> MileageDetector ──┐
//!            ├─> TariffClassDetector ─┼─> merge into prior map ─> ExtractionResult
//!            └─> BrandDetector ────┘
//! ```
//!
//! Confidence starts at a base value and each matching detector adds its
//! weight; the total is clamped to `[0, 1]`.
//!
//! # Example Usage
//!
//! ```no_run
//! use kfz_extractor::{Extractor, ExtractorConfig};
//! use kfz_domain::FieldKey;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let extractor = Extractor::new(ExtractorConfig::default())?;
//!
//! let result = extractor.extract("15000 km pro Jahr, BMW, KH 12 und TK 8", None);
//!
//! assert_eq!(result.extracted_fields.len(), 4);
//! println!("Mileage: {:?}", result.field_values.get(FieldKey::Jahreskilometer));
//! println!("Confidence: {:.2}", result.confidence);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod detector;
mod detectors;
mod error;
mod extractor;
mod types;


pub use config::ExtractorConfig;
pub use detector::{Detection, FieldDetector};
pub use detectors::{BrandDetector, MileageDetector, TariffClassDetector, KNOWN_BRANDS};
pub use error::ExtractorError;
pub use extractor::Extractor;
pub use types::ExtractionResult;
