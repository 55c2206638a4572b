//! Remote suggestion endpoint.

use async_trait::async_trait;
use serde::Deserialize;
use verdant_commerce::catalog::ProductSuggestion;

use crate::config::SearchConfig;
use crate::error::ClientError;
use crate::search::SuggestionSource;

/// Response body of the suggestion endpoint. A missing field means no matches.
#[derive(Debug, Default, Deserialize)]
struct SuggestionsResponse {
    #[serde(default)]
    suggestions: Vec<ProductSuggestion>,
}

/// Client for `GET <base><endpoint>?q=<query>&limit=<n>`.
#[derive(Debug, Clone)]
pub struct RemoteSuggestions {
    client: reqwest::Client,
    endpoint: String,
}

impl RemoteSuggestions {
    /// `base_url` is an origin such as `https://shop.example`; browsers need
    /// an absolute URL too, so pass `window.location.origin` there.
    pub fn new(base_url: &str, config: &SearchConfig) -> Result<Self, ClientError> {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(config.request_timeout());

        Ok(Self {
            client: builder.build()?,
            endpoint: format!(
                "{}{}",
                base_url.trim_end_matches('/'),
                config.suggestions_endpoint
            ),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn request_url(&self, query: &str, limit: usize) -> String {
        format!(
            "{}?q={}&limit={}",
            self.endpoint,
            urlencoding::encode(query),
            limit
        )
    }

    async fn fetch(&self, url: &str) -> Result<Vec<ProductSuggestion>, ClientError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let parsed: SuggestionsResponse = serde_json::from_str(&body)
            .map_err(|e| ClientError::Deserialization(e.to_string()))?;
        Ok(parsed.suggestions)
    }
}

#[async_trait(?Send)]
impl SuggestionSource for RemoteSuggestions {
    async fn suggest(&self, query: &str, limit: usize) -> Result<Vec<ProductSuggestion>, ClientError> {
        let url = self.request_url(query, limit);
        tracing::debug!(%url, "fetching remote suggestions");

        let mut suggestions = self.fetch(&url).await?;
        suggestions.truncate(limit);
        Ok(suggestions)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serve one HTTP response on a local port.
    ///
    /// Returns the base URL and a handle resolving to the request line.
    pub(crate) async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 8192];
            let n = socket.read(&mut buf).await.unwrap();
            let request = String::from_utf8_lossy(&buf[..n]).to_string();

            let response = format!(
                "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;

            request.lines().next().unwrap_or_default().to_string()
        });

        (base, handle)
    }
}

#[cfg(test)]
mod tests {
    use super::testing::serve_once;
    use super::*;

    #[test]
    fn test_request_url() {
        let remote = RemoteSuggestions::new("http://localhost:3000/", &SearchConfig::default()).unwrap();
        assert_eq!(remote.endpoint(), "http://localhost:3000/api/search/suggestions");
        assert_eq!(
            remote.request_url("clove oil", 5),
            "http://localhost:3000/api/search/suggestions?q=clove%20oil&limit=5"
        );
    }

    #[tokio::test]
    async fn test_successful_response() {
        let (base, server) = serve_once(
            "200 OK",
            r#"{"suggestions":[{"id":"3","name":"Clove Oil","slug":"clove-oil","price":450}]}"#,
        )
        .await;

        let remote = RemoteSuggestions::new(&base, &SearchConfig::default()).unwrap();
        let found = remote.suggest("clove oil", 5).await.unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].slug, "clove-oil");
        assert_eq!(
            server.await.unwrap(),
            "GET /api/search/suggestions?q=clove%20oil&limit=5 HTTP/1.1"
        );
    }

    #[tokio::test]
    async fn test_missing_field_is_empty() {
        let (base, _server) = serve_once("200 OK", "{}").await;
        let remote = RemoteSuggestions::new(&base, &SearchConfig::default()).unwrap();
        assert!(remote.suggest("tea", 5).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_server_error_is_http_error() {
        let (base, _server) = serve_once("500 Internal Server Error", "{}").await;
        let remote = RemoteSuggestions::new(&base, &SearchConfig::default()).unwrap();

        let err = remote.suggest("tea", 5).await.unwrap_err();
        assert!(matches!(err, ClientError::Http { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_malformed_body_is_deserialization_error() {
        let (base, _server) = serve_once("200 OK", "[1,2").await;
        let remote = RemoteSuggestions::new(&base, &SearchConfig::default()).unwrap();

        let err = remote.suggest("tea", 5).await.unwrap_err();
        assert!(matches!(err, ClientError::Deserialization(_)));
    }
}
