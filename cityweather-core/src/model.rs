use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Number of cities requested per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: u32 = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub country: String,
}

impl City {
    /// Text shown for this city in a selection list.
    pub fn label(&self) -> String {
        format!("{}, {}", self.name, self.country)
    }
}

/// One page of the city list as returned by `GET /cities`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityPage {
    pub data: Vec<City>,
    pub page_number: u32,
    pub total_pages: u32,
}

/// Weather for one city as returned by `GET /weather`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReport {
    pub city: String,
    pub temperature: Reading,
    pub description: String,
    pub humidity: Reading,
    pub wind_speed: Reading,
}

/// A measurement exactly as the backend sent it. The backend is free to send
/// numbers or preformatted strings; either way it is displayed untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Reading(Value);

impl From<f64> for Reading {
    fn from(value: f64) -> Self {
        Self(Value::from(value))
    }
}

impl From<&str> for Reading {
    fn from(value: &str) -> Self {
        Self(Value::from(value))
    }
}

impl std::fmt::Display for Reading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            Value::String(s) => f.write_str(s),
            other => write!(f, "{other}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_page_uses_camel_case_fields() {
        let json = r#"{
            "data": [{ "name": "Oslo", "country": "NO" }],
            "pageNumber": 2,
            "totalPages": 4
        }"#;

        let page: CityPage = serde_json::from_str(json).expect("valid page json");

        assert_eq!(page.page_number, 2);
        assert_eq!(page.total_pages, 4);
        assert_eq!(page.data[0].label(), "Oslo, NO");
    }

    #[test]
    fn readings_display_verbatim() {
        let json = r#"{
            "city": "Oslo",
            "temperature": 21.5,
            "description": "clear sky",
            "humidity": 40,
            "windSpeed": "3 m/s"
        }"#;

        let report: WeatherReport = serde_json::from_str(json).expect("valid weather json");

        assert_eq!(report.temperature.to_string(), "21.5");
        assert_eq!(report.humidity.to_string(), "40");
        assert_eq!(report.wind_speed.to_string(), "3 m/s");
    }

    #[test]
    fn null_reading_displays_as_null() {
        let json = r#"{
            "city": "Oslo",
            "temperature": null,
            "description": "fog",
            "humidity": 90,
            "windSpeed": 0
        }"#;

        let report: WeatherReport = serde_json::from_str(json).expect("valid weather json");

        assert_eq!(report.temperature.to_string(), "null");
        assert_eq!(report.wind_speed.to_string(), "0");
    }
}
