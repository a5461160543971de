use crate::enums::DocumentFormat;
use crate::error::{ParseError, ParseErrorKind};
use serde_json::Value;
use std::path::Path;

/// Parse a JSON or YAML document into a value tree.
///
/// Performs deserialization only; any well-formed document is accepted,
/// including scalar roots. Whether the root can be compared is decided by the
/// comparator.
pub fn parse(input: &str, format: DocumentFormat) -> Result<Value, ParseError> {
    match format {
        DocumentFormat::Json => parse_json(input),
        DocumentFormat::Yaml => parse_yaml(input),
    }
}

/// Parse a JSON document.
pub fn parse_json(input: &str) -> Result<Value, ParseError> {
    check_not_empty(input)?;
    serde_json::from_str(input).map_err(|e| ParseError {
        kind: ParseErrorKind::Syntax,
        message: e.to_string(),
        source_name: None,
        line: Some(e.line()),
        column: Some(e.column()),
    })
}

/// Parse a YAML document.
pub fn parse_yaml(input: &str) -> Result<Value, ParseError> {
    check_not_empty(input)?;
    serde_saphyr::from_str(input).map_err(|e| ParseError::syntax(e.to_string()))
}

/// Read and parse a file, picking the syntax from its extension.
pub fn load_file(path: &Path) -> Result<Value, ParseError> {
    let name = path.display().to_string();
    let content = std::fs::read_to_string(path).map_err(|e| ParseError {
        kind: ParseErrorKind::Io,
        message: format!("failed to read file: {}", e),
        source_name: Some(name.clone()),
        line: None,
        column: None,
    })?;

    parse(&content, DocumentFormat::from_path(path)).map_err(|e| ParseError {
        source_name: Some(name),
        ..e
    })
}

fn check_not_empty(input: &str) -> Result<(), ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::syntax("empty input"));
    }
    Ok(())
}
