//! Structural validation of route config payloads
//!
//! A payload is accepted when it is either a single object or a list of
//! objects, and every object carries at least the `name` and `utterances`
//! keys. Failures are logged before they are returned so callers that only
//! care about the boolean outcome (see [`is_valid`]) still leave a trace.

use serde_json::Value;
use thiserror::Error;

/// Keys every route object must contain
pub const REQUIRED_KEYS: [&str; 2] = ["name", "utterances"];

/// Reasons a route config payload is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Payload is not valid JSON
    #[error("Failed to parse route config: {message}")]
    Parse { message: String },

    /// An object lacks one or more required keys
    #[error("Missing keys in route config{}: {}", at_index(.index), .keys.join(", "))]
    MissingKeys {
        /// Position in the list, `None` for a single-object payload
        index: Option<usize>,
        keys: Vec<String>,
    },

    /// The payload (or a list element) is not an object
    #[error("Route config{} is not an object", at_index(.index))]
    NotAnObject { index: Option<usize> },

    /// A well-formed payload holds a different number of routes than required
    #[error("Expected exactly {expected} route(s) in route config, got {found}")]
    RouteCount { expected: usize, found: usize },
}

fn at_index(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!(" at index {}", i),
        None => String::new(),
    }
}

/// Parse `route_config` as JSON and validate its structure
///
/// Returns the parsed value so callers don't have to parse twice.
pub fn validate_route_config(route_config: &str) -> Result<Value, ValidationError> {
    let value: Value = serde_json::from_str(route_config).map_err(|e| {
        tracing::error!("Failed to parse route config: {}", e);
        ValidationError::Parse {
            message: e.to_string(),
        }
    })?;

    validate_value(&value)?;
    Ok(value)
}

/// Validate an already parsed payload
///
/// For lists, stops at the first offending element.
pub fn validate_value(value: &Value) -> Result<(), ValidationError> {
    let result = match value {
        Value::Array(items) => items
            .iter()
            .enumerate()
            .try_for_each(|(index, item)| check_item(item, Some(index))),
        other => check_item(other, None),
    };

    if let Err(ref e) = result {
        tracing::warn!("{}", e);
    }
    result
}

/// Boolean form of [`validate_route_config`]
pub fn is_valid(route_config: &str) -> bool {
    validate_route_config(route_config).is_ok()
}

fn check_item(item: &Value, index: Option<usize>) -> Result<(), ValidationError> {
    let object = item
        .as_object()
        .ok_or(ValidationError::NotAnObject { index })?;

    let missing: Vec<String> = REQUIRED_KEYS
        .iter()
        .filter(|key| !object.contains_key(**key))
        .map(|key| key.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingKeys {
            index,
            keys: missing,
        })
    }
}
