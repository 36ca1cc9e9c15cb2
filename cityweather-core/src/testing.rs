//! In-memory backend for unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::{
    backend::CityBackend,
    error::{ClientError, Resource},
    model::{City, CityPage, WeatherReport},
};

/// Serves `total_pages` pages of one city each. "Atlantis" has no weather.
#[derive(Debug, Default)]
pub struct FakeBackend {
    total_pages: u32,
    failing: bool,
    city_requests: AtomicUsize,
    weather_requests: AtomicUsize,
}

impl FakeBackend {
    pub fn with_pages(total_pages: u32) -> Self {
        Self {
            total_pages,
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn city_requests(&self) -> usize {
        self.city_requests.load(Ordering::SeqCst)
    }

    pub fn weather_requests(&self) -> usize {
        self.weather_requests.load(Ordering::SeqCst)
    }

    fn unavailable(resource: Resource) -> ClientError {
        ClientError::Status {
            resource,
            status: StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

#[async_trait]
impl CityBackend for FakeBackend {
    async fn city_page(&self, page_number: u32, _page_size: u32) -> Result<CityPage, ClientError> {
        self.city_requests.fetch_add(1, Ordering::SeqCst);

        if self.failing {
            return Err(Self::unavailable(Resource::Cities));
        }

        Ok(CityPage {
            data: vec![City {
                name: format!("City {page_number}"),
                country: "XX".to_string(),
            }],
            page_number,
            total_pages: self.total_pages,
        })
    }

    async fn weather(&self, city: &str) -> Result<WeatherReport, ClientError> {
        self.weather_requests.fetch_add(1, Ordering::SeqCst);

        if self.failing {
            return Err(Self::unavailable(Resource::Weather));
        }
        if city == "Atlantis" {
            return Err(ClientError::CityNotFound);
        }

        Ok(WeatherReport {
            city: city.to_string(),
            temperature: 18.0.into(),
            description: "light rain".to_string(),
            humidity: 81.0.into(),
            wind_speed: 4.2.into(),
        })
    }
}
