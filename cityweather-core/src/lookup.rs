//! Weather lookups for a selected city.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::{
    backend::CityBackend,
    error::ClientError,
    model::WeatherReport,
    sequence::{Fetched, RequestSequence},
};

#[derive(Debug)]
pub struct WeatherLookup<B: ?Sized> {
    backend: Arc<B>,
    sequence: RequestSequence,
}

impl<B: CityBackend + ?Sized> WeatherLookup<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self {
            backend,
            sequence: RequestSequence::new(),
        }
    }

    /// Look up the weather for `city`.
    ///
    /// A blank name fails with [`ClientError::NoCitySelected`] before anything
    /// is sent. A response that arrives after a newer lookup was started comes
    /// back as [`Fetched::Superseded`], whether it succeeded or not.
    pub async fn lookup(&self, city: &str) -> Result<Fetched<WeatherReport>, ClientError> {
        if city.trim().is_empty() {
            return Err(ClientError::NoCitySelected);
        }

        let ticket = self.sequence.issue();
        let result = self.backend.weather(city).await;

        if !self.sequence.is_latest(ticket) {
            debug!(city, "dropping superseded weather response");
            return Ok(Fetched::Superseded);
        }

        result
            .map(Fetched::Current)
            .inspect_err(|e| warn!(city, error = %e, "weather lookup failed"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeBackend;

    #[tokio::test]
    async fn blank_city_is_rejected_without_request() {
        let backend = Arc::new(FakeBackend::with_pages(1));
        let lookup = WeatherLookup::new(backend.clone());

        for name in ["", "   "] {
            let err = lookup.lookup(name).await.unwrap_err();
            assert_eq!(err.to_string(), "Please select a city.");
        }

        assert_eq!(backend.weather_requests(), 0);
    }

    #[tokio::test]
    async fn known_city_returns_report() {
        let backend = Arc::new(FakeBackend::with_pages(1));
        let lookup = WeatherLookup::new(backend.clone());

        let report = lookup
            .lookup("Oslo")
            .await
            .expect("lookup succeeds")
            .current()
            .expect("not superseded");

        assert_eq!(report.city, "Oslo");
        assert_eq!(backend.weather_requests(), 1);
    }

    #[tokio::test]
    async fn unknown_city_is_not_found() {
        let backend = Arc::new(FakeBackend::with_pages(1));
        let lookup = WeatherLookup::new(backend);

        let err = lookup.lookup("Atlantis").await.unwrap_err();
        assert_eq!(err.to_string(), "City not found.");
    }
}
