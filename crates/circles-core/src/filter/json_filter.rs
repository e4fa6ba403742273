//! JSON-to-filter conversion for external consumers.
//!
//! Accepts either a bare filter name or an object naming the gender to keep:
//!
//! ```json
//! "female"
//! { "gender": "male" }
//! { "gender": "everyone" }
//! ```

use serde_json::Value;

use crate::error::{Error, Result};

use super::GenderFilter;

/// Converts a JSON filter description to a [`GenderFilter`].
///
/// # Errors
///
/// Returns `Error::InvalidFilter` if the value is neither a known filter
/// name nor an object with a known `gender` name.
pub fn json_to_filter(filter: &Value) -> Result<GenderFilter> {
    let name = match filter {
        Value::String(name) => name.as_str(),
        Value::Object(obj) => obj
            .get("gender")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::InvalidFilter(filter.to_string()))?,
        _ => return Err(Error::InvalidFilter(filter.to_string())),
    };
    name.parse()
}
