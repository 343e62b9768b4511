use serde::{Deserialize, Serialize};

/// The payload of a single invocation.
///
/// Only the `body` is read, any other fields sent by the host
/// (headers, request context, etc...) are ignored.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ImageEvent {
    /// The base64 encoded image, possibly unpadded and containing whitespace.
    #[serde(default)]
    pub body: Option<String>,
}

impl ImageEvent {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: Some(body.into()) }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HandlerResponse {
    pub status_code: u16,
    pub body: String,
}

impl HandlerResponse {
    pub fn ok(message: String) -> Self {
        Self {
            status_code: 200,
            body: message,
        }
    }

    pub fn internal_error(message: String) -> Self {
        Self {
            status_code: 500,
            body: message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_shapes() {
        let event: ImageEvent = serde_json::from_str(r#"{"body": "aGVsbG8=", "isBase64Encoded": false}"#).unwrap();
        assert_eq!(event.body.as_deref(), Some("aGVsbG8="));

        let event: ImageEvent = serde_json::from_str("{}").unwrap();
        assert!(event.body.is_none());

        let resp = serde_json::to_value(HandlerResponse::ok("done".to_string())).unwrap();
        assert_eq!(resp, serde_json::json!({"statusCode": 200, "body": "done"}));
    }
}
