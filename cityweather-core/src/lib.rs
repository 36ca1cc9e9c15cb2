//! Core library for the `cityweather` CLI.
//!
//! This crate defines:
//! - Configuration handling
//! - The REST backend client (city pages, weather lookups)
//! - Pagination and weather lookup controllers with last-request-wins ordering
//! - Shared domain models and their text rendering
//!
//! It is used by `cityweather-cli`, but can also be reused by other front ends.

pub mod backend;
pub mod config;
pub mod error;
pub mod lookup;
pub mod model;
pub mod pagination;
pub mod sequence;
pub mod session;
pub mod view;

#[cfg(test)]
mod testing;

pub use backend::{CityBackend, backend_from_config, http::HttpBackend};
pub use config::Config;
pub use error::{ClientError, Resource};
pub use lookup::WeatherLookup;
pub use model::{City, CityPage, Reading, WeatherReport};
pub use pagination::{PageLoad, PageState, Paginator};
pub use sequence::Fetched;
pub use session::Session;
pub use view::{Panel, WeatherCard};
