//! Text shown to the user: status messages, error messages and the weather card.

use std::fmt;

use crate::{error::ClientError, model::WeatherReport};

pub const LOADING_CITIES: &str = "Loading cities...";
pub const FETCHING_WEATHER: &str = "Fetching weather data...";
/// Shown for any failed city page load; the cause only goes to the log.
pub const CITIES_UNAVAILABLE: &str = "Failed to load cities. Please try again later.";
pub const WEATHER_UNAVAILABLE: &str = "Failed to fetch weather data. Please try again later.";
pub const SELECT_PLACEHOLDER: &str = "Select a city";

/// Upper-case the first character, leave the rest alone.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Message for a failed weather lookup.
pub fn weather_failure(err: &ClientError) -> String {
    match err {
        ClientError::Transport { .. } | ClientError::Decode { .. } => {
            WEATHER_UNAVAILABLE.to_string()
        }
        other => other.to_string(),
    }
}

/// Weather report rendered for display.
pub struct WeatherCard<'a>(pub &'a WeatherReport);

impl fmt::Display for WeatherCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        writeln!(f, "Weather in {}", report.city)?;
        writeln!(f, "Temperature: {}", report.temperature)?;
        writeln!(f, "Description: {}", capitalize_first(&report.description))?;
        writeln!(f, "Humidity: {}", report.humidity)?;
        write!(f, "Wind Speed: {}", report.wind_speed)
    }
}

/// What the result area currently shows. Each new action replaces it.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Panel {
    #[default]
    Empty,
    Error(String),
    Weather(WeatherReport),
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Panel::Empty => Ok(()),
            Panel::Error(msg) => f.write_str(msg),
            Panel::Weather(report) => write!(f, "{}", WeatherCard(report)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Resource;
    use reqwest::StatusCode;

    #[test]
    fn capitalizes_only_first_letter() {
        assert_eq!(capitalize_first("clear sky"), "Clear sky");
        assert_eq!(capitalize_first("Already"), "Already");
        assert_eq!(capitalize_first("élan"), "Élan");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn weather_card_capitalizes_description_only() {
        let report = WeatherReport {
            city: "oslo".to_string(),
            temperature: "12°C".into(),
            description: "clear sky".to_string(),
            humidity: 40.0.into(),
            wind_speed: "3 m/s".into(),
        };

        let text = WeatherCard(&report).to_string();

        assert_eq!(
            text,
            "Weather in oslo\n\
             Temperature: 12°C\n\
             Description: Clear sky\n\
             Humidity: 40.0\n\
             Wind Speed: 3 m/s"
        );
    }

    #[test]
    fn weather_failure_messages() {
        assert_eq!(weather_failure(&ClientError::CityNotFound), "City not found.");
        assert_eq!(
            weather_failure(&ClientError::NoCitySelected),
            "Please select a city."
        );

        let status = ClientError::Status {
            resource: Resource::Weather,
            status: StatusCode::BAD_GATEWAY,
        };
        assert_eq!(weather_failure(&status), "Error fetching weather: 502 Bad Gateway");
    }
}
