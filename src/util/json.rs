use std::path::Path;

use serde::Serialize;

use crate::error::Result;

/// JSON output style
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum JsonStyle {
    /// Compact one-line JSON
    Compact,
    /// Pretty printed (indented) JSON
    Pretty,
}

/// Serialize any data to a JSON string.
pub fn to_json<T: Serialize>(data: &T, style: JsonStyle) -> Result<String> {
    let json = match style {
        JsonStyle::Compact => serde_json::to_string(data)?,
        JsonStyle::Pretty => serde_json::to_string_pretty(data)?,
    };
    Ok(json)
}

/// Save any serializable data to a JSON file (created or truncated).
pub fn save_json_output<T: Serialize>(data: &T, out_path: &Path, style: JsonStyle) -> Result<()> {
    let json = to_json(data, style)?;
    std::fs::write(out_path, json)?;
    Ok(())
}
