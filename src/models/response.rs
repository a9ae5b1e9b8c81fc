use serde::Serialize;

/// Canonical response envelope. Every handler answers with this shape;
/// `data` and `error` are always present, `message` only when there is
/// something to say.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            message: None,
            data: Some(data),
            error: None,
        }
    }

    pub fn with_message(message: &str, data: T) -> Self {
        Self {
            message: Some(message.to_string()),
            data: Some(data),
            error: None,
        }
    }

    /// Lookup result that may legitimately be empty (`data: null`, not an
    /// error).
    pub fn maybe(data: Option<T>) -> Self {
        Self {
            message: None,
            data,
            error: None,
        }
    }
}

impl ApiResponse<()> {
    /// Acknowledgment without a payload.
    pub fn message(message: &str) -> Self {
        Self {
            message: Some(message.to_string()),
            data: None,
            error: None,
        }
    }

    pub fn error(error: String) -> Self {
        Self {
            message: None,
            data: None,
            error: Some(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_shape() {
        let value = serde_json::to_value(ApiResponse::with_message("User created successfully", 42)).unwrap();
        assert_eq!(value["message"], "User created successfully");
        assert_eq!(value["data"], 42);
        assert_eq!(value["error"], serde_json::Value::Null);
    }

    #[test]
    fn test_error_envelope_shape() {
        let value = serde_json::to_value(ApiResponse::<()>::error("Something went wrong".into())).unwrap();
        assert_eq!(value["error"], "Something went wrong");
        assert_eq!(value["data"], serde_json::Value::Null);
        assert!(value.get("message").is_none());
    }

    #[test]
    fn test_empty_lookup_is_not_an_error() {
        let value = serde_json::to_value(ApiResponse::<i32>::maybe(None)).unwrap();
        assert_eq!(value["data"], serde_json::Value::Null);
        assert_eq!(value["error"], serde_json::Value::Null);
    }
}
