//! Response classification.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, ApiResult};

/// Body of a successful response.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// `Content-Type` announced JSON and the body parsed.
    Json(serde_json::Value),
    /// Anything else, including an empty body.
    Text(String),
}

impl ApiResponse {
    /// Decode a JSON body into `T`.
    pub fn into_json<T: DeserializeOwned>(self) -> ApiResult<T> {
        match self {
            ApiResponse::Json(value) => serde_json::from_value(value)
                .map_err(|e| ApiError::malformed(format!("unexpected body shape: {e}"))),
            ApiResponse::Text(text) if text.is_empty() => {
                Err(ApiError::malformed("expected a JSON body, got an empty one"))
            }
            ApiResponse::Text(_) => Err(ApiError::malformed("expected a JSON body, got text")),
        }
    }

    /// Decode a JSON body into `T` if it has that shape. Text bodies and
    /// JSON of another shape yield `None`.
    pub fn json_or_none<T: DeserializeOwned>(self) -> Option<T> {
        match self {
            ApiResponse::Json(value) => serde_json::from_value(value).ok(),
            ApiResponse::Text(_) => None,
        }
    }
}

/// Turn a raw response into a body or an error.
///
/// Non-2xx is always a failure carrying the body, or the status text when
/// the body is empty. Success bodies are parsed only when the content type
/// says JSON.
pub fn classify(status: StatusCode, content_type: &str, body: String) -> ApiResult<ApiResponse> {
    if !status.is_success() {
        let message = if body.is_empty() {
            status_text(status)
        } else {
            body
        };
        return Err(ApiError::status(status.as_u16(), message));
    }

    if body.is_empty() || !is_json(content_type) {
        return Ok(ApiResponse::Text(body));
    }

    serde_json::from_str(&body)
        .map(ApiResponse::Json)
        .map_err(|e| ApiError::malformed(format!("invalid JSON body: {e}")))
}

fn is_json(content_type: &str) -> bool {
    content_type
        .to_ascii_lowercase()
        .contains("application/json")
}

fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_becomes_message() {
        let err = classify(
            StatusCode::BAD_REQUEST,
            "text/plain",
            "name required".to_string(),
        )
        .unwrap_err();
        assert_eq!(err.status_code(), Some(400));
        assert_eq!(err.user_message(), "name required");
    }

    #[test]
    fn empty_error_body_falls_back_to_status_text() {
        let err = classify(StatusCode::NOT_FOUND, "", String::new()).unwrap_err();
        assert_eq!(err.user_message(), "Not Found");
    }

    #[test]
    fn unknown_status_without_reason_uses_code() {
        let status = StatusCode::from_u16(599).unwrap();
        let err = classify(status, "", String::new()).unwrap_err();
        assert_eq!(err.user_message(), "599");
    }

    #[test]
    fn json_error_body_is_not_parsed() {
        let body = r#"{"error":"Missing parameter: name"}"#.to_string();
        let err = classify(
            StatusCode::INTERNAL_SERVER_ERROR,
            "application/json",
            body.clone(),
        )
        .unwrap_err();
        assert_eq!(err.user_message(), body);
    }

    #[test]
    fn json_content_type_is_parsed() {
        let response = classify(
            StatusCode::OK,
            "application/json; charset=utf-8",
            r#"{"status":"deleted"}"#.to_string(),
        )
        .unwrap();
        assert_eq!(
            response,
            ApiResponse::Json(serde_json::json!({"status": "deleted"}))
        );
    }

    #[test]
    fn non_json_content_type_stays_text() {
        let response = classify(StatusCode::OK, "text/plain", "[1,2]".to_string()).unwrap();
        assert_eq!(response, ApiResponse::Text("[1,2]".to_string()));
    }

    #[test]
    fn empty_success_body_is_text() {
        let response = classify(StatusCode::NO_CONTENT, "application/json", String::new()).unwrap();
        assert_eq!(response, ApiResponse::Text(String::new()));
    }

    #[test]
    fn broken_json_is_malformed() {
        let err = classify(StatusCode::OK, "application/json", "{oops".to_string()).unwrap_err();
        assert!(matches!(err, ApiError::Malformed(_)));
    }

    #[test]
    fn text_where_json_expected_is_malformed() {
        let err = ApiResponse::Text("<html></html>".to_string())
            .into_json::<Vec<u32>>()
            .unwrap_err();
        assert!(matches!(err, ApiError::Malformed(_)));
    }

    #[test]
    fn json_or_none_tolerates_other_shapes() {
        let status = ApiResponse::Json(serde_json::json!({"status": "updated"}));
        assert_eq!(status.json_or_none::<Vec<u32>>(), None);
        assert_eq!(ApiResponse::Text(String::new()).json_or_none::<Vec<u32>>(), None);

        let list = ApiResponse::Json(serde_json::json!([1, 2]));
        assert_eq!(list.json_or_none::<Vec<u32>>(), Some(vec![1, 2]));
    }
}
