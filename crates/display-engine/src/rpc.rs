//! Scripting surface: method dispatch over JSON positional parameters.
//!
//! Method names follow the original scripting interface verbatim, so
//! existing scripts keep working against the CLI `call` command or any
//! other embedding.

use serde_json::Value;

use displaykit_common::error::{DisplaykitError, DisplaykitResult};

use crate::request::{GetDisplayRequest, MirrorRequest, ScreenshotRequest};
use crate::service::DisplayService;

/// Methods exposed on the scripting surface.
pub const METHODS: [&str; 5] = [
    "getAllDisplays",
    "getPrimaryDisplay",
    "getDisplayFromID",
    "mirror",
    "screenshot",
];

/// Result of one dispatched call.
#[derive(Debug, Clone, PartialEq)]
pub enum RpcResponse {
    /// JSON value (display snapshots, or null for mirror).
    Json(Value),
    /// Raw encoded image bytes.
    Bytes(Vec<u8>),
}

/// Validate `params` for `method` and execute it against `service`.
///
/// Query methods ignore extra positional parameters, like the original
/// interface did.
pub fn dispatch(
    service: &DisplayService,
    method: &str,
    params: &[Value],
) -> DisplaykitResult<RpcResponse> {
    match method {
        "getAllDisplays" => {
            let displays = service.all_displays()?;
            Ok(RpcResponse::Json(serde_json::to_value(displays)?))
        }
        "getPrimaryDisplay" => {
            let display = service.primary_display()?;
            Ok(RpcResponse::Json(serde_json::to_value(display)?))
        }
        "getDisplayFromID" => {
            let request = GetDisplayRequest::parse(params)?;
            let display = service.display_from_id(request.id)?;
            Ok(RpcResponse::Json(serde_json::to_value(display)?))
        }
        "mirror" => {
            let request = MirrorRequest::parse(params)?;
            service.mirror(request.enable, request.first_id, request.second_id)?;
            Ok(RpcResponse::Json(Value::Null))
        }
        "screenshot" => {
            let request = ScreenshotRequest::parse(params)?;
            let bytes = service.screenshot(request.display_id, &request.options)?;
            Ok(RpcResponse::Bytes(bytes))
        }
        other => Err(DisplaykitError::invalid_argument(format!(
            "unknown method '{}'; expected one of {}",
            other,
            METHODS.join(", ")
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeBackend;
    use serde_json::json;

    fn service() -> DisplayService {
        DisplayService::with_backend(Box::new(FakeBackend::new()))
    }

    #[test]
    fn get_all_displays_returns_camel_case_snapshots() {
        let response = dispatch(&service(), "getAllDisplays", &[]).unwrap();
        let RpcResponse::Json(json) = response else {
            panic!("expected JSON response");
        };

        let displays = json.as_array().unwrap();
        assert!(!displays.is_empty());
        for display in displays {
            assert!(display["id"].is_number());
            assert!(display["bounds"]["width"].is_number());
            assert!(display["workArea"].is_object());
            assert!(display["scaleFactor"].is_number());
            assert!(display["supportedWindowDepths"].is_array());
            assert!(display["colorSpace"]["componentCount"].is_number());
        }
    }

    #[test]
    fn get_display_from_id_validates_before_touching_the_backend() {
        // An unavailable backend would fail any backend call; validation
        // errors must come first.
        let service = DisplayService::with_backend(Box::new(FakeBackend::unavailable()));
        let err = dispatch(&service, "getDisplayFromID", &[json!("nope")]).unwrap_err();
        assert!(err.to_string().contains("'id' must be a number"));
    }

    #[test]
    fn mirror_dispatch_returns_null() {
        let response = dispatch(&service(), "mirror", &[json!(true), json!(1)]).unwrap();
        assert_eq!(response, RpcResponse::Json(Value::Null));
    }

    #[test]
    fn screenshot_dispatch_returns_bytes() {
        let response = dispatch(&service(), "screenshot", &[json!(1)]).unwrap();
        let RpcResponse::Bytes(bytes) = response else {
            panic!("expected bytes response");
        };
        assert!(!bytes.is_empty());
    }

    #[test]
    fn unknown_methods_are_rejected_with_the_known_set() {
        let err = dispatch(&service(), "reboot", &[]).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("unknown method 'reboot'"));
        assert!(msg.contains("getAllDisplays"));
    }
}
