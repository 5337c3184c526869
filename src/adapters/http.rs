use crate::config::ClientConfig;
use crate::domain::ports::{Query, Transport};
use crate::utils::error::{ApiError, Result};
use crate::utils::validation::Validate;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::Client;
use url::Url;

const ALLOW_ORIGIN: HeaderName = HeaderName::from_static("access-control-allow-origin");
const ALLOW_METHODS: HeaderName = HeaderName::from_static("access-control-allow-methods");

/// reqwest-backed transport bound to one base URL.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.timeout())
            .default_headers(default_headers(config)?)
            .build()?;

        Ok(Self {
            client,
            base_url: Url::parse(&config.base_url)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends percent-encoded `segments` to the base URL, keeping any path
    /// prefix the base already has.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::config(format!("{} cannot be used as a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

fn default_headers(config: &ClientConfig) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(
        USER_AGENT,
        HeaderValue::from_str(&config.user_agent).map_err(|e| ApiError::InvalidConfigValue {
            field: "client.user_agent".to_string(),
            value: config.user_agent.clone(),
            reason: e.to_string(),
        })?,
    );

    if config.send_cors_headers {
        headers.insert(ALLOW_ORIGIN, HeaderValue::from_static("*"));
        headers.insert(
            ALLOW_METHODS,
            HeaderValue::from_static("GET,PUT,POST,DELETE,PATCH"),
        );
    }

    Ok(headers)
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get_json(&self, segments: &[&str], query: &Query) -> Result<serde_json::Value> {
        let url = self.endpoint(segments)?;

        tracing::debug!("GET {} {:?}", url, query);
        let response = self.client.get(url).query(query).send().await?;

        let status = response.status();
        tracing::debug!("BFF response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}
