//! Containment check of an expected JSON structure inside an actual one.
//!
//! The comparator walks the expected tree depth-first. Every atomic check
//! appends one boolean to a per-call outcome tracker; the verdict is the
//! conjunction of all of them. Keys that exist only in the actual document are
//! never inspected, so the check is "expected is contained in actual", not
//! equality.
//!
//! # List handling
//!
//! - Scalars in order-insensitive mode only need to occur somewhere in the
//!   actual list; in order-sensitive mode they must sit at the same position.
//! - Objects in order-insensitive mode are paired with the actual object
//!   sharing the most key/value pairs (see [`find_best_match`]).
//! - Lists nested directly in lists are always compared by position, even in
//!   order-insensitive mode. This is a long-standing quirk kept for
//!   compatibility with existing expectations.

use crate::config::CompareConfig;
use crate::enums::{MismatchKind, ValueKind};
use crate::error::TypeMismatchError;
use crate::primitives::{
    arrays_deep_equal, find_best_match, index_path, key_path, list_contains, list_preview,
    objects_deep_equal, values_deep_equal,
};
use crate::types::{CompareReport, Mismatch};
use serde_json::{Map, Value};
use tracing::{debug, info};

const ROOT: &str = "$";

/// Checks expected structures against actual ones under a fixed configuration.
///
/// A `Comparator` holds no per-call state, so one instance can serve
/// concurrent callers.
#[derive(Clone, Debug, Default)]
pub struct Comparator {
    config: CompareConfig,
}

impl Comparator {
    pub fn new(config: CompareConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CompareConfig {
        &self.config
    }

    /// Returns whether `expected` is contained in `actual`.
    ///
    /// # Errors
    ///
    /// Returns [`TypeMismatchError`] if the two roots are not both arrays or
    /// both objects, or if an array meets an object where the two documents
    /// must line up.
    pub fn compare(&self, expected: &Value, actual: &Value) -> Result<bool, TypeMismatchError> {
        self.report(expected, actual).map(|report| report.matched)
    }

    /// Like [`compare`](Self::compare), but also returns every recorded
    /// outcome and mismatch.
    pub fn report(
        &self,
        expected: &Value,
        actual: &Value,
    ) -> Result<CompareReport, TypeMismatchError> {
        let mut walk = Walk::new(&self.config);
        match (expected, actual) {
            (Value::Array(e), Value::Array(a)) => walk.compare_sequences(e, a, ROOT)?,
            (Value::Object(e), Value::Object(a)) => walk.compare_mappings(e, a, ROOT)?,
            _ => return Err(type_mismatch(ROOT, expected, actual)),
        }
        Ok(walk.finish())
    }
}

/// State of a single top-level comparison.
struct Walk<'c> {
    config: &'c CompareConfig,
    outcomes: Vec<bool>,
    mismatches: Vec<Mismatch>,
}

impl<'c> Walk<'c> {
    fn new(config: &'c CompareConfig) -> Self {
        Self {
            config,
            outcomes: Vec::new(),
            mismatches: Vec::new(),
        }
    }

    fn compare_mappings(
        &mut self,
        expected: &Map<String, Value>,
        actual: &Map<String, Value>,
        path: &str,
    ) -> Result<(), TypeMismatchError> {
        if self.config.verbose {
            debug!(path, expected = ?expected, actual = ?actual, "comparing mappings");
        }

        if objects_deep_equal(expected, actual) {
            self.pass();
            return Ok(());
        }

        for (key, exp) in expected {
            let child = key_path(path, key);
            let Some(act) = actual.get(key) else {
                self.fail(Mismatch {
                    kind: MismatchKind::MissingKey,
                    path: child,
                    key: Some(key.clone()),
                    position: None,
                    expected: exp.clone(),
                    actual: None,
                    actual_len: None,
                });
                continue;
            };

            match (exp, act) {
                (Value::Array(e), Value::Array(a)) => self.compare_sequences(e, a, &child)?,
                (Value::Object(e), Value::Object(a)) => self.compare_mappings(e, a, &child)?,
                (Value::Array(_), Value::Object(_)) | (Value::Object(_), Value::Array(_)) => {
                    return Err(type_mismatch(&child, exp, act));
                }
                _ if values_deep_equal(exp, act) => self.pass(),
                _ => self.fail(Mismatch {
                    kind: MismatchKind::ValueDiffers,
                    path: child,
                    key: Some(key.clone()),
                    position: None,
                    expected: exp.clone(),
                    actual: Some(act.clone()),
                    actual_len: None,
                }),
            }
        }
        Ok(())
    }

    fn compare_sequences(
        &mut self,
        expected: &[Value],
        actual: &[Value],
        path: &str,
    ) -> Result<(), TypeMismatchError> {
        if self.config.verbose {
            debug!(path, expected = ?expected, actual = ?actual, "comparing lists");
        }

        if arrays_deep_equal(expected, actual) {
            self.pass();
            return Ok(());
        }

        let order_sensitive = self.config.order_sensitive;
        for (i, exp) in expected.iter().enumerate() {
            let child = index_path(path, i);
            match (exp, actual.get(i)) {
                // Nested lists are positional regardless of the order policy.
                (Value::Array(e), Some(Value::Array(a))) => {
                    self.compare_sequences(e, a, &child)?;
                }
                (Value::Object(e), Some(Value::Object(a))) => {
                    if order_sensitive {
                        self.compare_mappings(e, a, &child)?;
                    } else {
                        let (chosen, score) = find_best_match(e, actual).unwrap_or((a, 0));
                        if self.config.verbose {
                            debug!(path = %child, score, element = ?chosen, "best matching element");
                        }
                        self.compare_mappings(e, chosen, &child)?;
                    }
                }
                (Value::Array(_), Some(other @ Value::Object(_)))
                | (Value::Object(_), Some(other @ Value::Array(_)))
                    if order_sensitive =>
                {
                    return Err(type_mismatch(&child, exp, other));
                }
                _ => self.compare_element(exp, actual, i, child),
            }
        }
        Ok(())
    }

    /// Scalar rule for one list position.
    fn compare_element(&mut self, expected: &Value, actual: &[Value], index: usize, path: String) {
        let kind = if self.config.order_sensitive {
            match actual.get(index) {
                Some(act) if values_deep_equal(expected, act) => None,
                Some(_) => Some(MismatchKind::ElementDiffers),
                None => Some(MismatchKind::MissingElement),
            }
        } else if list_contains(actual, expected) {
            None
        } else {
            Some(MismatchKind::NotInList)
        };

        let Some(kind) = kind else {
            self.pass();
            return;
        };
        // Keep a bounded copy of the list, not the whole of it
        let (context, actual_len) = match (kind, actual.get(index)) {
            (MismatchKind::ElementDiffers, Some(act)) => (act.clone(), None),
            _ => (list_preview(actual), Some(actual.len())),
        };
        self.fail(Mismatch {
            kind,
            path,
            key: None,
            position: Some(index),
            expected: expected.clone(),
            actual: Some(context),
            actual_len,
        });
    }

    fn pass(&mut self) {
        self.outcomes.push(true);
    }

    fn fail(&mut self, mismatch: Mismatch) {
        info!(path = %mismatch.path, kind = ?mismatch.kind, "validation error: {}", mismatch);
        if self.config.echo_to_console {
            println!("\nVALIDATION ERROR:\n  {}", mismatch);
        }
        self.outcomes.push(false);
        self.mismatches.push(mismatch);
    }

    fn finish(self) -> CompareReport {
        let matched = self.outcomes.iter().all(|ok| *ok);
        if self.config.verbose {
            debug!(outcomes = ?self.outcomes, matched, "comparison finished");
        }
        CompareReport {
            matched,
            outcomes: self.outcomes,
            mismatches: self.mismatches,
        }
    }
}

fn type_mismatch(path: &str, expected: &Value, actual: &Value) -> TypeMismatchError {
    TypeMismatchError {
        path: path.to_string(),
        expected: ValueKind::of(expected),
        actual: ValueKind::of(actual),
    }
}
