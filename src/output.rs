use serde::Serialize;

use crate::error::AppResult;

/// Serialize a parsed value for the presentation layer
pub fn render<T: Serialize + ?Sized>(value: &T, pretty: bool) -> AppResult<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
