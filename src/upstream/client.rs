use crate::config::UpstreamConfig;
use crate::error::{GatewayError, Result};
use crate::upstream::types::{
    BulkMatchRequest, OrganizationSearchRequest, OrganizationSearchResponse, PeopleSearchRequest,
    PeopleSearchResponse, PersonMatchRequest, PersonMatchResponse,
};
use reqwest::header::{HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// HTTP client for the LeadWire API. The credential rides as a default
/// `X-Api-Key` header on every request. No retries and no caching: each tool
/// invocation maps to exactly one outbound call.
#[derive(Debug, Clone)]
pub struct LeadWireClient {
    client: reqwest::Client,
    base_url: Url,
}

impl LeadWireClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "X-Api-Key",
            HeaderValue::from_str(&config.api_key)
                .map_err(|_| GatewayError::Config("Invalid API key format".to_string()))?,
        );

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()?;

        let base_url = Url::parse(&config.base_url)
            .map_err(|e| GatewayError::Config(format!("Invalid upstream base URL: {}", e)))?;

        Ok(Self { client, base_url })
    }

    /// Append a path segment; `Url::join` would drop a `/v1` base suffix.
    fn build_url(&self, path: &str) -> Result<Url> {
        let joined = format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Url::parse(&joined)
            .map_err(|e| GatewayError::Config(format!("Invalid upstream URL: {}", e)))
    }

    async fn post_json<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        let url = self.build_url(path)?;
        debug!(url = %url, "POST upstream");

        let response = self.client.post(url).json(body).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }

    pub async fn search_organizations(
        &self,
        request: &OrganizationSearchRequest,
    ) -> Result<OrganizationSearchResponse> {
        self.post_json("organizations/search", request).await
    }

    pub async fn search_people(
        &self,
        request: &PeopleSearchRequest,
    ) -> Result<PeopleSearchResponse> {
        self.post_json("people/search", request).await
    }

    pub async fn match_person(&self, request: &PersonMatchRequest) -> Result<PersonMatchResponse> {
        self.post_json("people/match", request).await
    }

    /// The batch payload is vendor-defined; returned verbatim.
    pub async fn bulk_match(&self, request: &BulkMatchRequest) -> Result<Value> {
        self.post_json("people/bulk_match", request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn test_config(base_url: String) -> UpstreamConfig {
        UpstreamConfig {
            base_url,
            api_key: "lw-test-key".to_string(),
            timeout_secs: 5,
        }
    }

    #[tokio::test]
    async fn test_api_key_header_is_sent() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/organizations/search")
                    .header("x-api-key", "lw-test-key");
                then.status(200).json_body(json!({ "organizations": [] }));
            })
            .await;

        let client = LeadWireClient::new(&test_config(server.base_url())).unwrap();
        let request = OrganizationSearchRequest {
            q_keywords: "acme".to_string(),
            organization_locations: None,
            per_page: 10,
        };
        let response = client.search_organizations(&request).await.unwrap();

        mock.assert_async().await;
        assert!(response.organizations.is_empty());
    }

    #[tokio::test]
    async fn test_non_2xx_surfaces_status_and_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/people/match");
                then.status(429).body(r#"{"error":"rate limited"}"#);
            })
            .await;

        let client = LeadWireClient::new(&test_config(server.base_url())).unwrap();
        let request = PersonMatchRequest {
            name: "Ada Lovelace".to_string(),
            organization_name: "Acme Corp".to_string(),
        };
        let err = client.match_person(&request).await.unwrap_err();

        match err {
            GatewayError::Upstream { status, body } => {
                assert_eq!(status, 429);
                assert!(body.contains("rate limited"));
            }
            other => panic!("Expected Upstream error, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_network_failure_is_http_error() {
        // Nothing listens on port 9
        let client = LeadWireClient::new(&test_config("http://127.0.0.1:9".to_string())).unwrap();
        let request = PersonMatchRequest {
            name: "Ada Lovelace".to_string(),
            organization_name: "Acme Corp".to_string(),
        };
        let err = client.match_person(&request).await.unwrap_err();
        assert!(matches!(err, GatewayError::Http(_)));
    }

    #[test]
    fn test_build_url_preserves_base_path() {
        let client =
            LeadWireClient::new(&test_config("https://api.leadwire.io/v1".to_string())).unwrap();
        assert_eq!(
            client.build_url("organizations/search").unwrap().as_str(),
            "https://api.leadwire.io/v1/organizations/search"
        );

        let client =
            LeadWireClient::new(&test_config("https://api.leadwire.io/v1/".to_string())).unwrap();
        assert_eq!(
            client.build_url("people/match").unwrap().as_str(),
            "https://api.leadwire.io/v1/people/match"
        );
    }

    #[test]
    fn test_invalid_base_url_is_config_error() {
        let err = LeadWireClient::new(&test_config("not a url".to_string())).unwrap_err();
        assert!(matches!(err, GatewayError::Config(_)));
    }
}
