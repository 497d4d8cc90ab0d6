//! The detector seam shared by every field group

use kfz_domain::{FieldKey, FieldValue, FieldValueMap};

/// Values a detector proposes after a successful match.
///
/// Every key in `values` is both written to the result map and reported as
/// extracted, in the order given.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Detection {
    /// Field assignments, in detection order
    pub values: Vec<(FieldKey, FieldValue)>,
}

impl Detection {
    /// Detection carrying a single field value
    pub fn single(key: FieldKey, value: impl Into<FieldValue>) -> Self {
        Self {
            values: vec![(key, value.into())],
        }
    }

    /// Append another field value
    pub fn with(mut self, key: FieldKey, value: impl Into<FieldValue>) -> Self {
        self.values.push((key, value.into()));
        self
    }

    /// Keys touched by this detection
    pub fn keys(&self) -> impl Iterator<Item = FieldKey> + '_ {
        self.values.iter().map(|(k, _)| *k)
    }
}

/// A single-purpose pattern detector for one semantic field group.
///
/// Implementations must be pure: the same text and prior values always give
/// the same detection. Returning `None` means the pattern did not match.
pub trait FieldDetector: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Inspect the text and propose field values.
    ///
    /// `prior` holds the values known before this extraction run; detectors
    /// may consult it but must not assume any key is present.
    fn detect(&self, text: &str, prior: &FieldValueMap) -> Option<Detection>;
}
