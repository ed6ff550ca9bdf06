use crate::domain::model::Search;
use crate::domain::ports::EventSource;
use crate::utils::error::{QuakeError, Result};
use async_trait::async_trait;
use reqwest::Client;
use url::Url;

/// Runs rendered queries against the WFS service over HTTP.
#[derive(Debug, Clone, Default)]
pub struct EventFetcher {
    client: Client,
}

impl EventFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl EventSource for EventFetcher {
    async fn search(&self, url: &Url) -> Result<Search> {
        tracing::debug!("Making WFS request to: {}", url);
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        tracing::debug!("WFS response status: {}", status);

        // Always drain the body so the connection is released on every path.
        let body = response.text().await?;

        if !status.is_success() {
            return Err(QuakeError::Http {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!("Decoding {} byte response", body.len());
        let search: Search = serde_json::from_str(&body)?;
        Ok(search)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use std::time::Duration;

    fn url_for(server: &MockServer) -> Url {
        Url::parse(&server.url("/geonet/ows?service=WFS")).unwrap()
    }

    #[tokio::test]
    async fn test_search_decodes_features() {
        let server = MockServer::start_async().await;
        let api_mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/geonet/ows");
                then.status(200)
                    .header("Content-Type", "application/json")
                    .json_body(serde_json::json!({
                        "type": "FeatureCollection",
                        "features": [
                            {"geometry": {"coordinates": [172.1, -43.5]}, "properties": {"publicid": "A"}},
                            {"geometry": {"coordinates": [172.2, -43.6]}, "properties": {}},
                            {"geometry": {"coordinates": [172.3, -43.7]}, "properties": {"publicid": "B"}}
                        ]
                    }));
            })
            .await;

        let search = EventFetcher::new().search(&url_for(&server)).await.unwrap();

        api_mock.assert_async().await;
        assert_eq!(search.features.len(), 3);
        assert_eq!(search.public_ids(), vec!["A", "B"]);
    }

    #[tokio::test]
    async fn test_search_non_success_carries_status_and_body() {
        let server = MockServer::start_async().await;
        let api_mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/geonet/ows");
                then.status(404).body("not found");
            })
            .await;

        let err = EventFetcher::new()
            .search(&url_for(&server))
            .await
            .unwrap_err();

        api_mock.assert_async().await;
        match &err {
            QuakeError::Http { status, body } => {
                assert_eq!(*status, 404);
                assert!(body.contains("not found"));
            }
            other => panic!("expected HTTP error, got {:?}", other),
        }
        assert!(err.to_string().contains("not found"));
    }

    #[tokio::test]
    async fn test_search_server_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/geonet/ows");
                then.status(500).body("java.lang.NullPointerException");
            })
            .await;

        let err = EventFetcher::new()
            .search(&url_for(&server))
            .await
            .unwrap_err();

        assert!(matches!(err, QuakeError::Http { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_search_wrong_shape_is_decode_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/geonet/ows");
                then.status(200).body(r#"{"features": "not-an-array"}"#);
            })
            .await;

        let err = EventFetcher::new()
            .search(&url_for(&server))
            .await
            .unwrap_err();

        assert!(matches!(err, QuakeError::Decode(_)));
    }

    #[tokio::test]
    async fn test_search_malformed_json_is_decode_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/geonet/ows");
                then.status(200).body("<ServiceExceptionReport/>");
            })
            .await;

        let err = EventFetcher::new()
            .search(&url_for(&server))
            .await
            .unwrap_err();

        assert!(matches!(err, QuakeError::Decode(_)));
    }

    #[tokio::test]
    async fn test_search_with_client_timeout_is_transport_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/geonet/ows");
                then.status(200)
                    .delay(Duration::from_secs(2))
                    .json_body(serde_json::json!({"features": []}));
            })
            .await;

        let client = Client::builder()
            .timeout(Duration::from_millis(200))
            .build()
            .unwrap();
        let err = EventFetcher::with_client(client)
            .search(&url_for(&server))
            .await
            .unwrap_err();

        assert!(matches!(err, QuakeError::Transport(_)));
    }

    #[tokio::test]
    async fn test_search_unreachable_service_is_transport_error() {
        let url = Url::parse("http://127.0.0.1:1/geonet/ows").unwrap();

        let err = EventFetcher::new().search(&url).await.unwrap_err();

        assert!(matches!(err, QuakeError::Transport(_)));
    }
}
