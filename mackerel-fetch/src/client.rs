//! HTTP client for the Mackerel API.

use mackerel_core::ApiKey;
use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::FetchError;

/// Request timeout applied to every call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Header carrying the API key.
pub const API_KEY_HEADER: HeaderName = HeaderName::from_static("x-api-key");

/// Thin wrapper over [`reqwest::Client`] that authenticates with an API key.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
}

impl HttpClient {
    /// Creates a client with the default 10 second timeout.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Transport`] if the TLS backend cannot be initialized.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Creates a client with a custom timeout.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Transport`] if the TLS backend cannot be initialized.
    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("mackerel-lister/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { inner: client })
    }

    /// Performs an authenticated GET and returns the body of a 200 response.
    ///
    /// Any other status becomes [`FetchError::Api`] carrying the body as
    /// returned by the server. If that body cannot be read it is reported as
    /// empty.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Transport`] on connection failure or timeout,
    /// [`FetchError::InvalidApiKey`] if the key is not a valid header value,
    /// and [`FetchError::Api`] on a non-200 status.
    pub async fn get_with_api_key(&self, url: &str, api_key: &ApiKey) -> Result<String, FetchError> {
        let mut key = HeaderValue::from_str(api_key.expose())?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, key);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        debug!(url = %url, "Making GET request");
        let response = self.inner.get(url).headers(headers).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_else(|e| {
                warn!(error = %e, "Failed to read error response body");
                String::new()
            });
            debug!(status = status.as_u16(), "API returned an error status");
            return Err(FetchError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves one connection with `head` and a body shorter than its
    /// `Content-Length`, then closes the socket.
    async fn serve_truncated(head: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();

            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    return;
                }
                request.extend_from_slice(&buf[..n]);
            }

            let response = format!("{head}\r\nContent-Length: 100\r\n\r\nshort");
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{addr}/api/v0/hosts")
    }

    #[tokio::test]
    async fn test_unreadable_error_body_is_empty() {
        let url = serve_truncated("HTTP/1.1 500 Internal Server Error").await;

        let err = HttpClient::new()
            .unwrap()
            .get_with_api_key(&url, &ApiKey::new("test-api-key"))
            .await
            .unwrap_err();

        match err {
            FetchError::Api { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "");
            }
            other => panic!("expected API error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unreadable_success_body_is_transport_error() {
        let url = serve_truncated("HTTP/1.1 200 OK").await;

        let err = HttpClient::new()
            .unwrap()
            .get_with_api_key(&url, &ApiKey::new("test-api-key"))
            .await
            .unwrap_err();

        assert!(err.is_transport());
    }
}
