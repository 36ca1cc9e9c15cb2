use reqwest::StatusCode;
use thiserror::Error;

/// Which backend resource a request was for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Cities,
    Weather,
}

impl Resource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Cities => "cities",
            Resource::Weather => "weather",
        }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything that can go wrong while talking to the city/weather backend.
///
/// The `Display` text of the validation and lookup variants is exactly what
/// the user gets to see.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Please select a city.")]
    NoCitySelected,

    #[error("Page numbers start at 1 (requested {requested}).")]
    PageOutOfRange { requested: u32 },

    #[error("City not found.")]
    CityNotFound,

    #[error("Error fetching {resource}: {status}")]
    Status {
        resource: Resource,
        status: StatusCode,
    },

    #[error("Failed to reach backend for {resource}: {source}")]
    Transport {
        resource: Resource,
        #[source]
        source: reqwest::Error,
    },

    #[error("Malformed {resource} response: {source}")]
    Decode {
        resource: Resource,
        #[source]
        source: serde_json::Error,
    },

    #[error("Backend reported page {page_number} of {total_pages}")]
    InvalidPage { page_number: u32, total_pages: u32 },

    #[error("Invalid backend URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_includes_code_and_reason() {
        let err = ClientError::Status {
            resource: Resource::Weather,
            status: StatusCode::INTERNAL_SERVER_ERROR,
        };

        assert_eq!(
            err.to_string(),
            "Error fetching weather: 500 Internal Server Error"
        );
    }
}
