//! Comparison settings and their loading from configuration files.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for one [`Comparator`](crate::compare::Comparator).
///
/// Immutable for the duration of a comparison. All options default to off.
///
/// ```yaml
/// order_sensitive: true
/// verbose: false
/// echo_to_console: true
/// actual_root: "$.data"
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompareConfig {
    /// List elements must match at identical positions.
    pub order_sensitive: bool,
    /// Emit debug events for every compared substructure.
    pub verbose: bool,
    /// Print each mismatch message to stdout as it is found.
    pub echo_to_console: bool,
    /// JSONPath selecting the subtree of the actual document to validate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_root: Option<String>,
}

impl CompareConfig {
    pub fn with_order_sensitive(mut self, order_sensitive: bool) -> Self {
        self.order_sensitive = order_sensitive;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_echo_to_console(mut self, echo_to_console: bool) -> Self {
        self.echo_to_console = echo_to_console;
        self
    }

    pub fn with_actual_root(mut self, actual_root: impl Into<String>) -> Self {
        self.actual_root = Some(actual_root.into());
        self
    }

    /// Parses a YAML (or JSON) configuration document.
    ///
    /// An empty document yields the default configuration.
    pub fn from_yaml_str(input: &str) -> Result<Self, ConfigError> {
        if input.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_saphyr::from_str(input).map_err(|e| ConfigError {
            message: format!("invalid configuration: {}", e),
        })
    }

    /// Reads and parses a configuration file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError {
            message: format!("failed to read {}: {}", path.display(), e),
        })?;
        Self::from_yaml_str(&content).map_err(|e| ConfigError {
            message: format!("{}: {}", path.display(), e.message),
        })
    }

    /// Layers command-line switches over this configuration.
    ///
    /// A switch only ever turns its option on; an unset switch keeps the
    /// file value. A given `actual_root` replaces the file value.
    pub fn merge_flags(
        mut self,
        order_sensitive: bool,
        verbose: bool,
        echo_to_console: bool,
        actual_root: Option<String>,
    ) -> Self {
        self.order_sensitive |= order_sensitive;
        self.verbose |= verbose;
        self.echo_to_console |= echo_to_console;
        if actual_root.is_some() {
            self.actual_root = actual_root;
        }
        self
    }
}
