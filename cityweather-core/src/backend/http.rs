use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::{
    error::{ClientError, Resource},
    model::{CityPage, WeatherReport},
};

use super::CityBackend;

#[derive(Debug, Clone)]
pub struct HttpBackend {
    base_url: String,
    http: Client,
}

impl HttpBackend {
    /// `base_url` is the API root, e.g. `http://localhost:5203/api`.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        validate_base_url(base_url)?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, resource: Resource) -> String {
        format!("{}/{}", self.base_url, resource)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        resource: Resource,
        query: &[(&str, &str)],
    ) -> Result<T, ClientError> {
        let url = self.endpoint(resource);
        debug!(%url, ?query, "requesting {resource}");

        let res = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|source| {
                warn!(%url, error = %source, "{resource} request failed");
                ClientError::Transport { resource, source }
            })?;

        let status = res.status();

        if !status.is_success() {
            warn!(%url, %status, "{resource} request returned non-success status");
            return Err(match (resource, status) {
                (Resource::Weather, StatusCode::NOT_FOUND) => ClientError::CityNotFound,
                _ => ClientError::Status { resource, status },
            });
        }

        let body = res
            .text()
            .await
            .map_err(|source| ClientError::Transport { resource, source })?;

        serde_json::from_str(&body).map_err(|source| {
            warn!(
                %url,
                error = %source,
                body = %truncate_body(&body),
                "failed to parse {resource} response"
            );
            ClientError::Decode { resource, source }
        })
    }
}

#[async_trait]
impl CityBackend for HttpBackend {
    async fn city_page(&self, page_number: u32, page_size: u32) -> Result<CityPage, ClientError> {
        let page_number = page_number.to_string();
        let page_size = page_size.to_string();

        self.get_json(
            Resource::Cities,
            &[("pageNumber", page_number.as_str()), ("pageSize", page_size.as_str())],
        )
        .await
    }

    async fn weather(&self, city: &str) -> Result<WeatherReport, ClientError> {
        self.get_json(Resource::Weather, &[("city", city)]).await
    }
}

/// Accept only absolute http(s) URLs as the API root.
pub fn validate_base_url(base_url: &str) -> Result<Url, ClientError> {
    let parsed = Url::parse(base_url).map_err(|e| ClientError::InvalidBaseUrl {
        url: base_url.to_string(),
        reason: e.to_string(),
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ClientError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: format!("unsupported scheme '{}'", parsed.scheme()),
        });
    }

    Ok(parsed)
}

fn truncate_body(body: &str) -> &str {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let backend = HttpBackend::new("http://localhost:5203/api/").expect("valid url");
        assert_eq!(backend.endpoint(Resource::Cities), "http://localhost:5203/api/cities");
    }

    #[test]
    fn non_http_scheme_is_rejected() {
        let err = HttpBackend::new("ftp://example.com/api").unwrap_err();
        assert!(err.to_string().contains("unsupported scheme"));
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        let long = "é".repeat(300);
        assert_eq!(truncate_body(&long).chars().count(), 200);
        assert_eq!(truncate_body("short"), "short");
    }
}
