//! Thin reqwest wrapper bound to one API endpoint.

use std::time::Duration;

use reqwest::{header::CONTENT_TYPE, Client, Method, RequestBuilder};
use serde::Serialize;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::response::{classify, ApiResponse};

/// Header carrying the per-request correlation id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// HTTP client for one API base URL (e.g. `http://localhost:8080/api`).
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a client whose requests give up after `timeout`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> ApiResult<ApiResponse> {
        self.send(Method::GET, path, self.client.get(self.url(path)))
            .await
    }

    /// Make a POST request with JSON body
    pub async fn post<B>(&self, path: &str, body: &B) -> ApiResult<ApiResponse>
    where
        B: Serialize + ?Sized,
    {
        self.send(Method::POST, path, self.client.post(self.url(path)).json(body))
            .await
    }

    /// Make a PUT request with JSON body
    pub async fn put<B>(&self, path: &str, body: &B) -> ApiResult<ApiResponse>
    where
        B: Serialize + ?Sized,
    {
        self.send(Method::PUT, path, self.client.put(self.url(path)).json(body))
            .await
    }

    /// Make a DELETE request
    pub async fn delete(&self, path: &str) -> ApiResult<ApiResponse> {
        self.send(Method::DELETE, path, self.client.delete(self.url(path)))
            .await
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        request: RequestBuilder,
    ) -> ApiResult<ApiResponse> {
        let request_id = Uuid::now_v7();

        let response = request
            .header(REQUEST_ID_HEADER, request_id.to_string())
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(
                    %request_id,
                    %method,
                    path,
                    error = %e,
                    "request did not complete"
                );
                ApiError::Transport(e)
            })?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let body = response.text().await?;

        tracing::debug!(
            %request_id,
            %method,
            path,
            status = status.as_u16(),
            content_type = %content_type,
            "response received"
        );

        classify(status, &content_type, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        http::{HeaderMap, StatusCode},
        routing::get,
        Json, Router,
    };

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/api", addr)
    }

    #[test]
    fn url_joins_without_double_slashes() {
        let client = HttpClient::new("http://localhost:8080/api/", Duration::from_secs(1)).unwrap();
        assert_eq!(
            client.url("/employees/7"),
            "http://localhost:8080/api/employees/7"
        );
        assert_eq!(client.url("employees"), "http://localhost:8080/api/employees");
    }

    #[tokio::test]
    async fn sends_request_id_and_parses_json() {
        let router = Router::new().route(
            "/api/echo-id",
            get(|headers: HeaderMap| async move {
                let id = headers
                    .get(REQUEST_ID_HEADER)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string();
                Json(serde_json::json!({ "request_id": id }))
            }),
        );
        let client = HttpClient::new(serve(router).await, Duration::from_secs(5)).unwrap();

        let response = client.get("/echo-id").await.unwrap();
        let ApiResponse::Json(body) = response else {
            panic!("expected JSON body");
        };
        let id = body["request_id"].as_str().unwrap();
        assert!(Uuid::parse_str(id).is_ok());
    }

    #[tokio::test]
    async fn error_status_carries_plain_body() {
        let router = Router::new().route(
            "/api/fail",
            get(|| async { (StatusCode::BAD_REQUEST, "name required") }),
        );
        let client = HttpClient::new(serve(router).await, Duration::from_secs(5)).unwrap();

        let err = client.get("/fail").await.unwrap_err();
        assert_eq!(err.status_code(), Some(400));
        assert_eq!(err.user_message(), "name required");
    }

    #[tokio::test]
    async fn slow_server_hits_timeout() {
        let router = Router::new().route(
            "/api/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                "late"
            }),
        );
        let client = HttpClient::new(serve(router).await, Duration::from_millis(100)).unwrap();

        let err = client.get("/slow").await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }

    #[tokio::test]
    async fn unreachable_server_is_transport_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client =
            HttpClient::new(format!("http://{}/api", addr), Duration::from_secs(2)).unwrap();
        let err = client.get("/employees").await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }
}
