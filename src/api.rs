//! HTTP client for the showcase API.
//!
//! Two JSON GET endpoints and raw image downloads. The client does no
//! retrying, backoff, or timeout handling of its own; retries are driven by
//! the user from the UI layer.

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::models::{Category, ItemText};

/// Base URL used when the config does not override it
pub const DEFAULT_BASE_URL: &str = "https://test-task-server.mediolanum.f17y.com";

/// Errors from the showcase API.
///
/// All variants collapse into one human-readable message at the screen
/// boundary; the screens never branch on the kind of failure.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Non-2xx response; carries the HTTP status line
    #[error("server returned {0}")]
    Status(StatusCode),
    /// Transport-level failure (connect, body read, JSON decode)
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// `/texts/{id}` answered with a different item id
    #[error("text for item {expected} came back labelled {got}")]
    WrongText {
        /// Id the request asked for
        expected: String,
        /// Id the server answered with
        got: String,
    },
}

/// Client for the showcase API
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new client against the given base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build a full URL from a server-relative path.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Full URL for an item's image path.
    pub fn image_url(&self, path: &str) -> String {
        self.url(path)
    }

    /// Fetch a random item collection.
    pub async fn random_items(&self) -> Result<Category, ApiError> {
        self.get_json("/items/random").await
    }

    /// Fetch the text blob for one item.
    ///
    /// The returned id must match the requested one; the server is not
    /// trusted on this point and a mismatch is reported as a fetch error.
    pub async fn item_text(&self, id: &str) -> Result<ItemText, ApiError> {
        let text: ItemText = self.get_json(&format!("/texts/{id}")).await?;
        if text.id != id {
            return Err(ApiError::WrongText {
                expected: id.to_string(),
                got: text.id,
            });
        }
        Ok(text)
    }

    /// Download raw image bytes from a full URL.
    pub async fn image_bytes(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        tracing::debug!("Downloading image: {url}");
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }
        Ok(response.bytes().await?.to_vec())
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        tracing::debug!("GET {url}");
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve exactly one canned HTTP response on a loopback port.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0_u8; 1024];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn fetches_random_items() {
        let base = serve_once(
            "200 OK",
            r#"{"title":"Fruits","items":[{"id":"1","name":"Apple","image":"/img/apple.png","color":"FF0000"}]}"#,
        )
        .await;

        let api = ApiClient::new(&base);
        let category = api.random_items().await.unwrap();

        assert_eq!(category.title, "Fruits");
        assert_eq!(category.items.len(), 1);
        assert_eq!(category.items[0].name, "Apple");
    }

    #[tokio::test]
    async fn non_2xx_is_a_status_error() {
        let base = serve_once("500 Internal Server Error", "oops").await;

        let api = ApiClient::new(&base);
        let err = api.random_items().await.unwrap_err();

        assert!(matches!(err, ApiError::Status(s) if s.as_u16() == 500));
        // Message is derived from the HTTP status line
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn matching_text_id_is_accepted() {
        let base = serve_once("200 OK", r#"{"id":"1","text":"A red fruit."}"#).await;

        let api = ApiClient::new(&base);
        let text = api.item_text("1").await.unwrap();

        assert_eq!(text.text, "A red fruit.");
    }

    #[tokio::test]
    async fn mismatched_text_id_is_rejected() {
        let base = serve_once("200 OK", r#"{"id":"7","text":"Someone else's text."}"#).await;

        let api = ApiClient::new(&base);
        let err = api.item_text("1").await.unwrap_err();

        assert!(matches!(
            err,
            ApiError::WrongText { ref expected, ref got } if expected == "1" && got == "7"
        ));
    }

    #[test]
    fn image_urls_join_base_and_path() {
        let api = ApiClient::new("https://example.test/");
        assert_eq!(
            api.image_url("/img/apple.png"),
            "https://example.test/img/apple.png"
        );
    }
}
