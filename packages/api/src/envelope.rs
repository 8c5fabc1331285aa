//! Response envelope normalisation.
//!
//! The backend answers in three shapes:
//!
//! - `{ "statusCode": 200, "message": "...", "data": <payload> }`
//! - a bare array
//! - a bare object
//!
//! [`decode_response`] folds all of them, plus HTTP-level failures, into one
//! [`ApiResult`]. Views never look at envelopes.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ApiError, ApiResult};

/// Decode a raw status + body into `T`.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> ApiResult<T> {
    let value: Option<Value> = if body.trim().is_empty() {
        None
    } else {
        serde_json::from_str(body).ok()
    };

    if !(200..300).contains(&status) {
        let message = value.as_ref().map(server_message).unwrap_or_default();
        return Err(ApiError::Status { status, message });
    }

    let value = match value {
        Some(value) => value,
        None if body.trim().is_empty() => Value::Null,
        None => return Err(ApiError::Malformed("response is not JSON".to_string())),
    };

    let payload = match value {
        Value::Object(mut map) if map.contains_key("statusCode") => {
            let status_code = map
                .get("statusCode")
                .and_then(Value::as_u64)
                .and_then(|code| u16::try_from(code).ok())
                .unwrap_or(200);
            if !(200..300).contains(&status_code) {
                let message = server_message(&Value::Object(map));
                return Err(ApiError::Rejected {
                    status_code,
                    message,
                });
            }
            map.remove("data").unwrap_or(Value::Null)
        }
        Value::Object(mut map) if map.len() <= 2 && map.contains_key("data") => {
            // `{ data }` or `{ data, message }` without a status code
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    };

    serde_json::from_value(payload).map_err(|e| ApiError::Malformed(e.to_string()))
}

/// `message` or `detail` from an error body, if it has one.
fn server_message(value: &Value) -> String {
    ["message", "detail"]
        .iter()
        .find_map(|key| value.get(key).and_then(Value::as_str))
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use serde::de::IgnoredAny;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_envelope_and_bare_shapes_agree() {
        let wrapped = json!({"statusCode": 200, "message": "ok", "data": [1, 2, 3]});
        let bare = json!([1, 2, 3]);

        let a: Vec<u32> = decode_response(200, &wrapped.to_string()).unwrap();
        let b: Vec<u32> = decode_response(200, &bare.to_string()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_bare_object() {
        let body = json!({"Role": "INFRASTRUCTURE"}).to_string();
        let value: Value = decode_response(200, &body).unwrap();
        assert_eq!(value["Role"], "INFRASTRUCTURE");
    }

    #[test]
    fn test_failing_status_code_in_envelope() {
        let body = json!({"statusCode": 404, "message": "No issues", "data": null}).to_string();
        let err = decode_response::<Vec<u32>>(200, &body).unwrap_err();
        match err {
            ApiError::Rejected {
                status_code,
                message,
            } => {
                assert_eq!(status_code, 404);
                assert_eq!(message, "No issues");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_http_error_uses_detail() {
        let body = json!({"detail": "Year already exists"}).to_string();
        let err = decode_response::<IgnoredAny>(400, &body).unwrap_err();
        assert_eq!(err.user_message(), "Year already exists");
    }

    #[test]
    fn test_http_error_with_html_body() {
        let err = decode_response::<IgnoredAny>(502, "<html>Bad gateway</html>").unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 502, .. }));
    }

    #[test]
    fn test_wrong_shape_is_malformed() {
        let body = json!({"statusCode": 200, "data": {"not": "a list"}}).to_string();
        let err = decode_response::<Vec<u32>>(200, &body).unwrap_err();
        assert!(matches!(err, ApiError::Malformed(_)));
    }

    #[test]
    fn test_empty_body_accepted_for_mutations() {
        decode_response::<IgnoredAny>(204, "").unwrap();
        let unit: Option<u32> = decode_response(200, "").unwrap();
        assert!(unit.is_none());
    }
}
