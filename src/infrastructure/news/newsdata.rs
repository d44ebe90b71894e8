//! newsdata.io provider implementation

use async_trait::async_trait;
use serde::Deserialize;

use super::http_client::HttpClientTrait;
use crate::domain::{Article, DomainError, HeadlinePage, NewsProvider, UpstreamRequest};

const DEFAULT_NEWSDATA_BASE_URL: &str = "https://newsdata.io";

/// newsdata.io API provider
///
/// One GET per call against the latest-news endpoint. The API key comes
/// from process configuration and is attached here, never taken from
/// client input.
#[derive(Debug)]
pub struct NewsDataProvider<C: HttpClientTrait> {
    client: C,
    api_key: String,
    base_url: String,
}

impl<C: HttpClientTrait> NewsDataProvider<C> {
    pub fn new(client: C, api_key: impl Into<String>) -> Self {
        Self::with_base_url(client, api_key, DEFAULT_NEWSDATA_BASE_URL)
    }

    pub fn with_base_url(
        client: C,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            client,
            api_key: api_key.into(),
            base_url,
        }
    }

    fn news_url(&self) -> String {
        format!("{}/api/1/news", self.base_url)
    }

    fn build_query(&self, request: &UpstreamRequest) -> Vec<(&'static str, String)> {
        let mut query = vec![("apikey", self.api_key.clone())];

        if let Some(country) = &request.country {
            query.push(("country", country.clone()));
        }

        if let Some(category) = &request.category {
            query.push(("category", category.clone()));
        }

        if let Some(term) = &request.q_in_title {
            query.push(("qInTitle", term.clone()));
        }

        if let Some(page) = &request.page {
            query.push(("page", page.clone()));
        }

        query
    }

    fn parse_response(&self, json: serde_json::Value) -> Result<HeadlinePage, DomainError> {
        let response: NewsDataResponse = serde_json::from_value(json)
            .map_err(|e| DomainError::upstream(format!("Failed to parse response: {}", e)))?;

        // A missing results collection is treated as an empty page
        Ok(HeadlinePage::new(
            response.results.unwrap_or_default(),
            response.next_page,
        ))
    }
}

#[async_trait]
impl<C: HttpClientTrait> NewsProvider for NewsDataProvider<C> {
    async fn fetch_headlines(
        &self,
        request: &UpstreamRequest,
    ) -> Result<HeadlinePage, DomainError> {
        let url = self.news_url();
        let query = self.build_query(request);
        let response = self.client.get_json(&url, &query).await?;

        self.parse_response(response)
    }

    fn provider_name(&self) -> &'static str {
        "newsdata"
    }
}

/// Wire format of the newsdata.io latest-news endpoint
#[derive(Debug, Deserialize)]
struct NewsDataResponse {
    results: Option<Vec<Article>>,
    #[serde(rename = "nextPage")]
    next_page: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::news::http_client::mock::MockHttpClient;
    use serde_json::json;

    const TEST_URL: &str = "https://newsdata.io/api/1/news";

    fn provider_with(client: MockHttpClient) -> NewsDataProvider<MockHttpClient> {
        NewsDataProvider::new(client, "test-key")
    }

    #[tokio::test]
    async fn test_fetch_parses_results_and_cursor() {
        let client = MockHttpClient::new().with_response(
            TEST_URL,
            json!({"results": [{"title": "A"}, {"title": "B"}], "nextPage": "p2"}),
        );
        let provider = provider_with(client);

        let page = provider
            .fetch_headlines(&UpstreamRequest {
                country: Some("in".to_string()),
                category: Some("business".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(page.results.len(), 2);
        assert_eq!(page.next_cursor.as_deref(), Some("p2"));
    }

    #[tokio::test]
    async fn test_missing_results_becomes_empty_page() {
        let client = MockHttpClient::new().with_response(TEST_URL, json!({"status": "success"}));
        let provider = provider_with(client);

        let page = provider
            .fetch_headlines(&UpstreamRequest::default())
            .await
            .unwrap();

        assert!(page.is_empty());
        assert!(page.next_cursor.is_none());
    }

    #[tokio::test]
    async fn test_api_key_and_params_forwarded() {
        let client = MockHttpClient::new().with_response(TEST_URL, json!({"results": []}));
        let provider = provider_with(client);

        provider
            .fetch_headlines(&UpstreamRequest {
                q_in_title: Some("election".to_string()),
                page: Some("3".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        let requests = provider.client.requests();
        assert_eq!(requests.len(), 1);

        let (url, query) = &requests[0];
        assert_eq!(url, TEST_URL);
        assert!(query.contains(&("apikey".to_string(), "test-key".to_string())));
        assert!(query.contains(&("qInTitle".to_string(), "election".to_string())));
        assert!(query.contains(&("page".to_string(), "3".to_string())));
        assert!(!query.iter().any(|(k, _)| k == "country" || k == "category"));
    }

    #[tokio::test]
    async fn test_transport_error_is_upstream_error() {
        let client = MockHttpClient::new().with_error(TEST_URL, "connection refused");
        let provider = provider_with(client);

        let result = provider.fetch_headlines(&UpstreamRequest::default()).await;

        assert!(matches!(result, Err(DomainError::Upstream { .. })));
    }

    #[tokio::test]
    async fn test_malformed_body_is_upstream_error() {
        let client = MockHttpClient::new()
            .with_response(TEST_URL, json!({"results": "not-an-array"}));
        let provider = provider_with(client);

        let result = provider.fetch_headlines(&UpstreamRequest::default()).await;

        assert!(matches!(result, Err(DomainError::Upstream { .. })));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let provider = NewsDataProvider::with_base_url(
            MockHttpClient::new(),
            "key",
            "https://example.com/",
        );

        assert_eq!(provider.news_url(), "https://example.com/api/1/news");
    }
}
