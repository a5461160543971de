//! Check whether an expected JSON structure is contained in an actual one.
//!
//! Every value reachable in the expected document must be found at the same
//! place in the actual document. Extra keys in the actual document are
//! ignored, and list order is ignored unless requested:
//!
//! ```text
//! parse(text) → Value ─┐
//!                      ├→ Comparator::report(expected, actual) → CompareReport
//! parse(text) → Value ─┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use jsoncompare::{CompareConfig, Comparator};
//! use serde_json::json;
//!
//! let expected = json!({"status": "ok", "items": [{"id": 1}]});
//! let actual = json!({
//!     "status": "ok",
//!     "elapsed_ms": 12,
//!     "items": [{"id": 2, "name": "b"}, {"id": 1, "name": "a"}],
//! });
//!
//! let comparator = Comparator::new(CompareConfig::default());
//! assert!(comparator.compare(&expected, &actual).unwrap());
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | yes     | Builds the `jsoncompare` binary (pulls in `clap` and `tracing-subscriber`). |

pub mod compare;
pub mod config;
pub mod enums;
pub mod error;
pub mod parse;
pub mod primitives;
pub mod serialize;
pub mod types;

pub use compare::Comparator;
pub use config::CompareConfig;
pub use enums::*;
pub use error::*;
pub use types::*;

pub use parse::parse;

/// Convenience entry point composing parse → scope → compare.
///
/// Both documents are parsed with the same `format`. When
/// `config.actual_root` is set, `expected` is compared against the first node
/// that JSONPath selects in the actual document.
///
/// # Errors
///
/// Returns [`CompareError::Parse`] if either document fails to parse,
/// [`CompareError::Scope`] if `actual_root` is invalid or selects nothing, and
/// [`CompareError::TypeMismatch`] if the structures cannot be compared.
///
/// # Example
///
/// ```rust
/// use jsoncompare::{CompareConfig, DocumentFormat};
///
/// let expected = r#"{"user": {"name": "ada"}}"#;
/// let actual = r#"{"user": {"name": "ada", "id": 7}, "ok": true}"#;
///
/// let report = jsoncompare::compare_documents(
///     expected,
///     actual,
///     DocumentFormat::Json,
///     &CompareConfig::default(),
/// )
/// .unwrap();
/// assert!(report.matched);
/// ```
pub fn compare_documents(
    expected: &str,
    actual: &str,
    format: DocumentFormat,
    config: &CompareConfig,
) -> Result<CompareReport, CompareError> {
    let expected = parse::parse(expected, format)?;
    let actual = parse::parse(actual, format)?;
    compare_values(&expected, &actual, config)
}

/// Scope and compare two already-parsed documents.
///
/// # Errors
///
/// Same as [`compare_documents`], minus parse failures.
pub fn compare_values(
    expected: &serde_json::Value,
    actual: &serde_json::Value,
    config: &CompareConfig,
) -> Result<CompareReport, CompareError> {
    let actual = match &config.actual_root {
        Some(selector) => primitives::select_root(selector, actual)?,
        None => actual,
    };
    let report = Comparator::new(config.clone()).report(expected, actual)?;
    Ok(report)
}
