//! Raw scripting surface: dispatch one method with JSON parameters.

use std::path::PathBuf;

use displaykit_display_engine::rpc::{dispatch, RpcResponse};
use displaykit_display_engine::DisplayService;
use displaykit_platform_core::ImageFormat;
use serde_json::Value;

pub fn run(method: String, params: Option<String>, output: Option<PathBuf>) -> anyhow::Result<()> {
    let params: Vec<Value> = match params {
        None => Vec::new(),
        Some(raw) => match serde_json::from_str(&raw)? {
            Value::Array(values) => values,
            // A bare scalar is treated as a single positional parameter.
            value => vec![value],
        },
    };

    let service = DisplayService::new();

    match dispatch(&service, &method, &params)? {
        RpcResponse::Json(value) => {
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        RpcResponse::Bytes(bytes) => {
            let path = output.unwrap_or_else(|| default_bytes_path(&params));
            std::fs::write(&path, &bytes)?;
            println!("Wrote {} bytes to {}", bytes.len(), path.display());
        }
    }

    Ok(())
}

/// Default output path for byte responses, with the extension inferred from
/// the requested format (png when unspecified, matching the engine default).
fn default_bytes_path(params: &[Value]) -> PathBuf {
    let format = params
        .get(1)
        .and_then(|options| options.get("format"))
        .and_then(Value::as_str)
        .and_then(|name| name.parse::<ImageFormat>().ok())
        .unwrap_or_default();

    let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    PathBuf::from(format!("capture-{stamp}.{}", format.extension()))
}
