use serde::{Deserialize, Serialize};

/// Response envelope shared by every endpoint.
///
/// The payload is flattened next to `success`, so a ticket response reads
/// `{"success": true, "ticket_id": "...", "position": 1, ...}` rather than
/// nesting it under a `data` key. Kiosk clients read those fields directly.
///
/// OpenAPI paths document the flattened payload type as the response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(flatten)]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            error: None,
            errors: None,
        }
    }

    /// A handled outcome that produced nothing, e.g. serving an empty queue
    pub fn unsuccessful(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
            error: None,
            errors: None,
        }
    }

    pub fn error(error: String, errors: Option<Vec<String>>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            message: None,
            error: Some(error),
            errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize, Deserialize)]
    struct Position {
        position: u32,
    }

    #[test]
    fn test_success_flattens_payload() {
        let body = serde_json::to_value(ApiResponse::success(Position { position: 3 })).unwrap();
        assert_eq!(body, json!({ "success": true, "position": 3 }));
    }

    #[test]
    fn test_unsuccessful_carries_message_only() {
        let body =
            serde_json::to_value(ApiResponse::<Position>::unsuccessful("Nothing here")).unwrap();
        assert_eq!(body, json!({ "success": false, "message": "Nothing here" }));
    }

    #[test]
    fn test_error_lists_details() {
        let body = serde_json::to_value(ApiResponse::<()>::error(
            "Invalid service".to_string(),
            Some(vec!["Invalid service".to_string()]),
        ))
        .unwrap();
        assert_eq!(
            body,
            json!({
                "success": false,
                "error": "Invalid service",
                "errors": ["Invalid service"]
            })
        );
    }
}
