pub mod probe;
pub mod status;

use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use pingboard::util::json::{save_json_output, to_json, JsonStyle};

/// Print JSON to stdout when asked and save it when an output path is given.
pub fn emit_json<T: Serialize>(data: &T, print: bool, output: Option<&Path>) -> Result<()> {
    if print {
        println!("{}", to_json(data, JsonStyle::Pretty)?);
    }
    if let Some(path) = output {
        match save_json_output(data, path, JsonStyle::Pretty) {
            Ok(_) => tracing::info!("JSON output saved to {}", path.display()),
            Err(e) => tracing::error!("Failed to save JSON output: {}", e),
        }
    }
    Ok(())
}
