//! Rewrite service client.
//!
//! One operation: POST the text and mode as JSON, get the rewritten text
//! back. Status handling and body decoding happen here so the session
//! controller only ever sees `Ok(text)` or a [`RewriteError`].

use std::sync::Arc;

use crate::adapters::ReqwestHttpClient;
use crate::error::RewriteError;
use crate::models::{ErrorBody, RewriteRequest, RewriteResponse};
use crate::traits::{Headers, HttpClient, HttpError};

pub const DEFAULT_ENDPOINT: &str = "https://assignmate-backend-wkq9.onrender.com/api/rewrite";

/// Client for the rewrite endpoint.
///
/// Cheap to clone; clones share the underlying HTTP client.
#[derive(Clone)]
pub struct RewriteClient {
    /// Full URL of the rewrite endpoint
    pub endpoint: String,
    http: Arc<dyn HttpClient>,
}

impl RewriteClient {
    /// Client for the default endpoint using reqwest.
    pub fn new() -> Self {
        Self::with_url(DEFAULT_ENDPOINT)
    }

    /// Client for a custom endpoint using reqwest.
    pub fn with_url(endpoint: impl Into<String>) -> Self {
        Self::with_http(endpoint, Arc::new(ReqwestHttpClient::new()))
    }

    /// Client over any [`HttpClient`] implementation.
    pub fn with_http(endpoint: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http,
        }
    }

    /// Send one rewrite request.
    ///
    /// Any non-2xx status is an application failure regardless of the code.
    /// The body's `error` field is used when it is a non-empty string.
    pub async fn rewrite(&self, request: &RewriteRequest) -> Result<String, RewriteError> {
        let body = serde_json::to_string(request)
            .map_err(|e| RewriteError::Transport(HttpError::Other(e.to_string())))?;

        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        tracing::debug!(endpoint = %self.endpoint, mode = %request.mode, "sending rewrite request");
        let response = self.http.post(&self.endpoint, &body, &headers).await?;

        if !response.is_success() {
            let message = response
                .json::<ErrorBody>()
                .ok()
                .and_then(|body| body.error)
                .filter(|message| !message.is_empty());
            return Err(RewriteError::Application {
                status: response.status,
                message,
            });
        }

        // Any JSON counts as success; a body without a usable
        // `rewrittenText` yields an empty result
        let body = response
            .json::<serde_json::Value>()
            .map_err(|e| RewriteError::UndecodableBody {
                status: response.status,
                detail: e.to_string(),
            })?;
        let text = serde_json::from_value::<RewriteResponse>(body)
            .ok()
            .and_then(|body| body.rewritten_text)
            .unwrap_or_default();
        if text.is_empty() {
            tracing::warn!(status = response.status, "success response carried no rewrittenText");
        }
        Ok(text)
    }
}

impl Default for RewriteClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RewriteClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RewriteClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::error::{NETWORK_ERROR_MESSAGE, REQUEST_FAILED_MESSAGE};
    use crate::models::Mode;

    const URL: &str = "https://rewrite.test/api/rewrite";

    fn client_with(response: MockResponse) -> (RewriteClient, MockHttpClient) {
        let mock = MockHttpClient::new();
        mock.set_default_response(response);
        (RewriteClient::with_http(URL, Arc::new(mock.clone())), mock)
    }

    #[test]
    fn test_default_endpoint() {
        assert_eq!(RewriteClient::new().endpoint, DEFAULT_ENDPOINT);
        assert_eq!(RewriteClient::default().endpoint, DEFAULT_ENDPOINT);
    }

    #[tokio::test]
    async fn test_sends_json_body_and_content_type() {
        let (client, mock) = client_with(MockResponse::json(200, r#"{"rewrittenText":"x"}"#));

        client
            .rewrite(&RewriteRequest::new("The quick brown fox", Mode::Academic))
            .await
            .unwrap();

        let requests = mock.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].url, URL);
        assert_eq!(
            requests[0].body.as_deref(),
            Some(r#"{"text":"The quick brown fox","mode":"academic"}"#)
        );
        assert_eq!(
            requests[0].headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
    }

    #[tokio::test]
    async fn test_success_returns_rewritten_text() {
        let (client, _) = client_with(MockResponse::json(
            200,
            r#"{"rewrittenText":"An agile fox, brown in hue, ...","extra":true}"#,
        ));

        let text = client
            .rewrite(&RewriteRequest::new("The quick brown fox", Mode::Academic))
            .await
            .unwrap();
        assert_eq!(text, "An agile fox, brown in hue, ...");
    }

    #[tokio::test]
    async fn test_error_field_is_used() {
        let (client, _) = client_with(MockResponse::json(400, r#"{"error":"text too long"}"#));

        let err = client
            .rewrite(&RewriteRequest::new("text", Mode::Balanced))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            RewriteError::Application {
                status: 400,
                message: Some("text too long".to_string())
            }
        );
        assert_eq!(err.user_message(), "text too long");
    }

    #[tokio::test]
    async fn test_error_without_field_or_json_falls_back() {
        for body in ["{}", "", "Bad Gateway", r#"{"error":""}"#] {
            let (client, _) = client_with(MockResponse::json(502, body));
            let err = client
                .rewrite(&RewriteRequest::new("text", Mode::Balanced))
                .await
                .unwrap_err();
            assert_eq!(err.user_message(), REQUEST_FAILED_MESSAGE, "body: {body:?}");
        }
    }

    #[tokio::test]
    async fn test_transport_failure() {
        let (client, _) = client_with(MockResponse::Error(HttpError::ConnectionFailed(
            "dns".to_string(),
        )));

        let err = client
            .rewrite(&RewriteRequest::new("text", Mode::Aggressive))
            .await
            .unwrap_err();
        assert!(err.is_transport());
        assert_eq!(err.user_message(), NETWORK_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn test_success_without_rewritten_text_is_empty() {
        for body in ["{}", r#"{"result":"x"}"#, r#"{"rewrittenText":null}"#, "[]"] {
            let (client, _) = client_with(MockResponse::json(200, body));
            let text = client
                .rewrite(&RewriteRequest::new("text", Mode::Balanced))
                .await
                .unwrap();
            assert_eq!(text, "", "body: {body:?}");
        }
    }

    #[tokio::test]
    async fn test_non_json_success_is_a_network_error() {
        let (client, _) = client_with(MockResponse::json(200, "<html>ok</html>"));

        let err = client
            .rewrite(&RewriteRequest::new("text", Mode::Balanced))
            .await
            .unwrap_err();
        assert!(matches!(err, RewriteError::UndecodableBody { status: 200, .. }));
        assert!(err.is_transport());
        assert_eq!(err.user_message(), NETWORK_ERROR_MESSAGE);
    }
}
