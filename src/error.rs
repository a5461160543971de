use crate::enums::ValueKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Raised when two values that must line up structurally have incompatible
/// shapes, e.g. an array compared against an object.
///
/// This is the only fatal outcome of a comparison. Value-level disagreements
/// are recorded as [`Mismatch`](crate::types::Mismatch)es instead.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeMismatchError {
    /// Location of the offending pair, `$` for the document root.
    pub path: String,
    pub expected: ValueKind,
    pub actual: ValueKind,
}

impl fmt::Display for TypeMismatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unable to compare {} against {} at {}",
            self.expected, self.actual, self.path
        )
    }
}

impl std::error::Error for TypeMismatchError {}

/// Error kind for document parse failures.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseErrorKind {
    Syntax,
    Io,
}

/// Produced by the `parse` module when a document cannot be decoded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
}

impl ParseError {
    pub(crate) fn syntax(message: impl Into<String>) -> Self {
        ParseError {
            kind: ParseErrorKind::Syntax,
            message: message.into(),
            source_name: None,
            line: None,
            column: None,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.source_name {
            write!(f, "{}: ", name)?;
        }
        if let (Some(line), Some(col)) = (self.line, self.column) {
            write!(f, "{}:{}: {}", line, col, self.message)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

impl std::error::Error for ParseError {}

/// Produced when a configuration file cannot be read or decoded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigError {
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ConfigError {}

/// Serialization error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SerializeError {
    pub message: String,
}

impl fmt::Display for SerializeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for SerializeError {}

/// Combined error type for the [`compare_documents`](crate::compare_documents)
/// entry point.
#[derive(Clone, Debug, PartialEq)]
pub enum CompareError {
    /// One of the two documents failed to parse.
    Parse(ParseError),
    /// The documents do not share a comparable shape.
    TypeMismatch(TypeMismatchError),
    /// The `actual_root` JSONPath is invalid or selects nothing.
    Scope { path: String, message: String },
}

impl fmt::Display for CompareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompareError::Parse(e) => write!(f, "Parse error: {}", e),
            CompareError::TypeMismatch(e) => write!(f, "Type mismatch: {}", e),
            CompareError::Scope { path, message } => {
                write!(f, "Scope error: {}: {}", path, message)
            }
        }
    }
}

impl std::error::Error for CompareError {}

impl From<ParseError> for CompareError {
    fn from(e: ParseError) -> Self {
        CompareError::Parse(e)
    }
}

impl From<TypeMismatchError> for CompareError {
    fn from(e: TypeMismatchError) -> Self {
        CompareError::TypeMismatch(e)
    }
}
