use crate::{
    Config,
    backend::http::HttpBackend,
    error::ClientError,
    model::{CityPage, WeatherReport},
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod http;

/// Read-only view of the city/weather REST backend.
#[async_trait]
pub trait CityBackend: Send + Sync + Debug {
    async fn city_page(&self, page_number: u32, page_size: u32) -> Result<CityPage, ClientError>;

    async fn weather(&self, city: &str) -> Result<WeatherReport, ClientError>;
}

/// Construct the HTTP backend from config, falling back to the default base URL.
pub fn backend_from_config(config: &Config) -> Result<HttpBackend, ClientError> {
    HttpBackend::new(config.base_url())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_BASE_URL;

    #[test]
    fn backend_from_default_config_uses_default_url() {
        let backend = backend_from_config(&Config::default()).expect("default url is valid");
        assert_eq!(backend.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn backend_from_config_rejects_garbage_url() {
        let cfg = Config {
            base_url: Some("not a url".to_string()),
            ..Config::default()
        };

        let err = backend_from_config(&cfg).unwrap_err();
        assert!(err.to_string().contains("Invalid backend URL"));
    }
}
