use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::enums::MismatchKind;

// ─── Mismatch ───────────────────────────────────────────────────────────────

/// One failed comparison found while walking the expected structure.
///
/// Mismatches are diagnostics only. The verdict of a comparison is carried by
/// [`CompareReport::matched`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Mismatch {
    pub kind: MismatchKind,
    /// Location in the expected document, e.g. `$.users[0].name`.
    pub path: String,
    /// Mapping key the mismatch refers to, for mapping-level failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// List position the mismatch refers to, for sequence-level failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
    pub expected: Value,
    /// The actual value. For membership and missing-element failures this is
    /// the first [`LIST_PREVIEW_LEN`] elements of the actual list.
    /// `None` when nothing was found to compare against.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<Value>,
    /// Full length of the actual list, for list-level failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_len: Option<usize>,
}

/// Maximum number of actual list elements kept in a [`Mismatch`].
pub const LIST_PREVIEW_LEN: usize = 10;

impl Mismatch {
    /// Renders the actual list preview, noting elided elements.
    fn list_context(&self, preview: &Value) -> String {
        let shown = preview.as_array().map_or(0, Vec::len);
        match self.actual_len {
            Some(len) if len > shown => format!("{} ... ({} elements)", preview, len),
            _ => preview.to_string(),
        }
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = self.key.as_deref().unwrap_or("");
        match (self.kind, &self.actual) {
            (MismatchKind::ValueDiffers, Some(actual)) => write!(
                f,
                "expected {}: {}, actual {}: {} at {}",
                key, self.expected, key, actual, self.path
            ),
            (MismatchKind::MissingKey, _) => write!(
                f,
                "no key '{}' present in actual data at {}",
                key, self.path
            ),
            (MismatchKind::ElementDiffers, Some(actual)) => write!(
                f,
                "expected element {} at position {}, actual {} ({})",
                self.expected,
                self.position.unwrap_or_default(),
                actual,
                self.path
            ),
            (MismatchKind::MissingElement, Some(actual)) => write!(
                f,
                "element {} from expected list not present in actual list {} ({})",
                self.expected,
                self.list_context(actual),
                self.path
            ),
            (MismatchKind::NotInList, Some(actual)) => write!(
                f,
                "expected element {} not present in list {} ({})",
                self.expected,
                self.list_context(actual),
                self.path
            ),
            (_, None) => write!(f, "expected {} not found at {}", self.expected, self.path),
        }
    }
}

// ─── CompareReport ──────────────────────────────────────────────────────────

/// Full outcome of one top-level comparison.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CompareReport {
    /// `true` iff every recorded outcome passed.
    pub matched: bool,
    /// One entry per atomic comparison, in traversal order.
    pub outcomes: Vec<bool>,
    pub mismatches: Vec<Mismatch>,
}

impl CompareReport {
    /// Human-readable mismatch messages, rendered on demand.
    pub fn messages(&self) -> impl Iterator<Item = String> + '_ {
        self.mismatches.iter().map(ToString::to_string)
    }
}
