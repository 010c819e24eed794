//! Validation layer for the scripting surface.
//!
//! The scripting surface takes positional JSON parameters, so argument
//! shapes have to be checked at runtime before anything reaches the
//! backend. Checks run field by field in a fixed order and stop at the
//! first violation; the resulting message names exactly that field. Both
//! the order and the messages are a stable contract that callers script
//! against.
//!
//! A missing positional parameter is treated as JSON null and fails its
//! type check like any other wrong shape. JSON numbers are accepted as
//! integers or floats; ids and rectangle fields are truncated toward zero.

use serde_json::Value;

use displaykit_common::error::{DisplaykitError, DisplaykitResult};
use displaykit_platform_core::{DisplayId, ImageFormat, Rect, ScreenshotOptions};

/// Parsed `getDisplayFromID(id)` call.
#[derive(Debug, Clone, PartialEq)]
pub struct GetDisplayRequest {
    pub id: DisplayId,
}

impl GetDisplayRequest {
    pub fn parse(params: &[Value]) -> DisplaykitResult<Self> {
        Ok(Self {
            id: require_number(params.first(), "id")?,
        })
    }
}

/// Parsed `mirror(enable, firstID, secondID?)` call.
#[derive(Debug, Clone, PartialEq)]
pub struct MirrorRequest {
    pub enable: bool,
    pub first_id: DisplayId,
    /// Absent means "use the backend's default second display" when
    /// enabling, and is simply unused when disabling.
    pub second_id: Option<DisplayId>,
}

impl MirrorRequest {
    /// Check order: enable, firstID, secondID.
    pub fn parse(params: &[Value]) -> DisplaykitResult<Self> {
        let enable = require_bool(params.first(), "enable")?;
        let first_id = require_number(params.get(1), "firstID")?;
        let second_id = optional_number(params.get(2), "secondID")?;

        Ok(Self {
            enable,
            first_id,
            second_id,
        })
    }
}

/// Parsed `screenshot(id, options?)` call.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenshotRequest {
    pub display_id: DisplayId,
    pub options: ScreenshotOptions,
}

impl ScreenshotRequest {
    /// Check order: id, options.format, options.bounds (then bounds.x, .y,
    /// .width, .height).
    pub fn parse(params: &[Value]) -> DisplaykitResult<Self> {
        let display_id = require_number(params.first(), "id")?;
        let options = parse_options(params.get(1))?;

        Ok(Self {
            display_id,
            options,
        })
    }
}

fn parse_options(value: Option<&Value>) -> DisplaykitResult<ScreenshotOptions> {
    let object = match value {
        None | Some(Value::Null) => return Ok(ScreenshotOptions::default()),
        Some(Value::Object(map)) => map,
        Some(_) => {
            return Err(DisplaykitError::invalid_argument(
                "'options' must be an object",
            ))
        }
    };

    let format = match object.get("format") {
        None | Some(Value::Null) => None,
        Some(value) => {
            let name = value.as_str().ok_or_else(|| {
                DisplaykitError::invalid_argument("'format' must be a string")
            })?;
            Some(
                name.parse::<ImageFormat>()
                    .map_err(DisplaykitError::invalid_argument)?,
            )
        }
    };

    let bounds = match object.get("bounds") {
        None | Some(Value::Null) => None,
        Some(value) => Some(parse_bounds(value)?),
    };

    Ok(ScreenshotOptions { format, bounds })
}

/// Field order x, y, width, height is part of the error contract. A zero
/// coordinate is valid; only the JSON type is checked.
fn parse_bounds(value: &Value) -> DisplaykitResult<Rect> {
    let object = value.as_object().ok_or_else(|| {
        DisplaykitError::invalid_argument("'bounds' must be an object")
    })?;

    let x = bounds_field(object, "x")?;
    let y = bounds_field(object, "y")?;
    let width = bounds_field(object, "width")?;
    let height = bounds_field(object, "height")?;

    Ok(Rect {
        x: x as i32,
        y: y as i32,
        width: width.max(0.0) as u32,
        height: height.max(0.0) as u32,
    })
}

fn bounds_field(
    object: &serde_json::Map<String, Value>,
    field: &str,
) -> DisplaykitResult<f64> {
    object.get(field).and_then(Value::as_f64).ok_or_else(|| {
        DisplaykitError::invalid_argument(format!("'bounds.{field}' must be a number"))
    })
}

fn require_number(value: Option<&Value>, field: &str) -> DisplaykitResult<DisplayId> {
    match value.and_then(Value::as_f64) {
        Some(number) => Ok(number as DisplayId),
        None => Err(DisplaykitError::invalid_argument(format!(
            "'{field}' must be a number"
        ))),
    }
}

fn require_bool(value: Option<&Value>, field: &str) -> DisplaykitResult<bool> {
    match value.and_then(Value::as_bool) {
        Some(flag) => Ok(flag),
        None => Err(DisplaykitError::invalid_argument(format!(
            "'{field}' must be a boolean"
        ))),
    }
}

fn optional_number(value: Option<&Value>, field: &str) -> DisplaykitResult<Option<DisplayId>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(_) => require_number(value, field).map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn message(err: DisplaykitError) -> String {
        err.to_string()
    }

    #[test]
    fn get_display_rejects_non_number_id() {
        let err = GetDisplayRequest::parse(&[json!("im a string!!")]).unwrap_err();
        assert!(message(err).contains("'id' must be a number"));
    }

    #[test]
    fn get_display_rejects_missing_id() {
        let err = GetDisplayRequest::parse(&[]).unwrap_err();
        assert!(message(err).contains("'id' must be a number"));
    }

    #[test]
    fn mirror_checks_enable_first() {
        // Everything is wrong here; only the first violation is reported.
        let err = MirrorRequest::parse(&[json!("x"), json!("y"), json!("z")]).unwrap_err();
        assert!(message(err).contains("'enable' must be a boolean"));
    }

    #[test]
    fn mirror_checks_first_id_second() {
        let err = MirrorRequest::parse(&[json!(true), json!("x")]).unwrap_err();
        assert!(message(err).contains("'firstID' must be a number"));
    }

    #[test]
    fn mirror_checks_second_id_last() {
        let err = MirrorRequest::parse(&[json!(true), json!(1), json!("x")]).unwrap_err();
        assert!(message(err).contains("'secondID' must be a number"));
    }

    #[test]
    fn mirror_second_id_is_optional() {
        let request = MirrorRequest::parse(&[json!(false), json!(1)]).unwrap();
        assert_eq!(request.second_id, None);

        let request = MirrorRequest::parse(&[json!(true), json!(1), Value::Null]).unwrap();
        assert_eq!(request.second_id, None);
    }

    #[test]
    fn screenshot_defaults_when_options_absent() {
        let request = ScreenshotRequest::parse(&[json!(3)]).unwrap();
        assert_eq!(request.display_id, 3);
        assert_eq!(request.options, ScreenshotOptions::default());
    }

    #[test]
    fn screenshot_rejects_non_object_options() {
        let err = ScreenshotRequest::parse(&[json!(3), json!("oh no")]).unwrap_err();
        assert!(message(err).contains("'options' must be an object"));
    }

    #[test]
    fn screenshot_rejects_unknown_format_naming_the_allowed_set() {
        let err =
            ScreenshotRequest::parse(&[json!(3), json!({ "format": "bad" })]).unwrap_err();
        assert!(message(err).contains("'format' must be one of jpeg, tiff, png"));
    }

    #[test]
    fn screenshot_rejects_non_string_format() {
        let err = ScreenshotRequest::parse(&[json!(3), json!({ "format": 12 })]).unwrap_err();
        assert!(message(err).contains("'format' must be a string"));
    }

    #[test]
    fn screenshot_rejects_non_object_bounds() {
        let err = ScreenshotRequest::parse(&[json!(3), json!({ "bounds": 7 })]).unwrap_err();
        assert!(message(err).contains("'bounds' must be an object"));
    }

    #[test]
    fn bounds_x_is_reported_before_the_other_fields() {
        let err = ScreenshotRequest::parse(&[
            json!(3),
            json!({ "bounds": { "x": "bad", "y": "bad", "width": "bad", "height": "bad" } }),
        ])
        .unwrap_err();
        assert!(message(err).contains("'bounds.x' must be a number"));
    }

    #[test]
    fn bounds_fields_are_checked_in_declaration_order() {
        let cases = [
            (json!({ "x": "bad", "y": 1, "width": 10, "height": 10 }), "'bounds.x'"),
            (json!({ "x": 1, "y": "bad", "width": 10, "height": 10 }), "'bounds.y'"),
            (json!({ "x": 1, "y": 1, "width": "bad", "height": 10 }), "'bounds.width'"),
            (json!({ "x": 1, "y": 1, "width": 10, "height": "bad" }), "'bounds.height'"),
        ];

        for (bounds, field) in cases {
            let err =
                ScreenshotRequest::parse(&[json!(3), json!({ "bounds": bounds })]).unwrap_err();
            let msg = message(err);
            assert!(msg.contains(field), "{msg} should name {field}");
        }
    }

    #[test]
    fn zero_is_a_valid_bounds_coordinate() {
        let request = ScreenshotRequest::parse(&[
            json!(3),
            json!({ "bounds": { "x": 0, "y": 0, "width": 10, "height": 10 } }),
        ])
        .unwrap();
        assert_eq!(request.options.bounds, Some(Rect::new(0, 0, 10, 10)));
    }

    #[test]
    fn full_screenshot_request_parses() {
        let request = ScreenshotRequest::parse(&[
            json!(5),
            json!({ "format": "jpeg", "bounds": { "x": 10.9, "y": -3, "width": 100, "height": 50 } }),
        ])
        .unwrap();

        assert_eq!(request.display_id, 5);
        assert_eq!(request.options.format, Some(ImageFormat::Jpeg));
        // Fractional coordinates truncate toward zero.
        assert_eq!(request.options.bounds, Some(Rect::new(10, -3, 100, 50)));
    }

    proptest! {
        #[test]
        fn any_non_number_id_is_rejected(value in prop_oneof![
            any::<bool>().prop_map(|b| json!(b)),
            "[a-z]{0,12}".prop_map(|s| json!(s)),
            Just(Value::Null),
            Just(json!([1, 2, 3])),
            Just(json!({ "id": 1 })),
        ]) {
            let err = GetDisplayRequest::parse(&[value]).unwrap_err();
            prop_assert!(err.to_string().contains("'id' must be a number"));
        }

        #[test]
        fn any_numeric_bounds_parse(
            x in -10_000i32..10_000,
            y in -10_000i32..10_000,
            width in 0u32..10_000,
            height in 0u32..10_000,
        ) {
            let request = ScreenshotRequest::parse(&[
                json!(1),
                json!({ "bounds": { "x": x, "y": y, "width": width, "height": height } }),
            ]).unwrap();
            prop_assert_eq!(request.options.bounds, Some(Rect::new(x, y, width, height)));
        }
    }
}
