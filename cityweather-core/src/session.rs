//! One browsing session: a page of cities, an optional selection and the
//! result area, driven by user actions.

use std::sync::Arc;

use crate::{
    backend::CityBackend,
    error::ClientError,
    lookup::WeatherLookup,
    model::City,
    pagination::{PageLoad, PageState, Paginator},
    sequence::Fetched,
    view::{self, Panel},
};

#[derive(Debug)]
pub struct Session<B: ?Sized> {
    paginator: Paginator<B>,
    lookup: WeatherLookup<B>,
    state: PageState,
    cities: Vec<City>,
    selected: Option<String>,
    panel: Panel,
}

impl<B: CityBackend + ?Sized> Session<B> {
    pub fn new(backend: Arc<B>, page_size: u32) -> Self {
        Self {
            paginator: Paginator::new(backend.clone()),
            lookup: WeatherLookup::new(backend),
            state: PageState::new(page_size),
            cities: Vec::new(),
            selected: None,
            panel: Panel::Empty,
        }
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    /// Load the first page.
    pub async fn start(&mut self) -> &Panel {
        let result = self.paginator.load_page(&self.state, 1).await;
        self.apply_page(result);
        &self.panel
    }

    /// Returns `false` when already on the first page and nothing was requested.
    pub async fn previous(&mut self) -> bool {
        let result = self.paginator.previous(&self.state).await;
        self.apply_navigation(result)
    }

    /// Returns `false` when already on the last page and nothing was requested.
    pub async fn next(&mut self) -> bool {
        let result = self.paginator.next(&self.state).await;
        self.apply_navigation(result)
    }

    /// Select a city from the current page by name. Unknown names are ignored.
    pub fn select(&mut self, name: &str) -> bool {
        if self.cities.iter().any(|c| c.name == name) {
            self.selected = Some(name.to_string());
            true
        } else {
            false
        }
    }

    /// Look up the weather for the selected city and show the outcome.
    pub async fn fetch_weather(&mut self) -> &Panel {
        let city = self.selected.clone().unwrap_or_default();

        match self.lookup.lookup(&city).await {
            Ok(Fetched::Current(report)) => self.panel = Panel::Weather(report),
            Ok(Fetched::Superseded) => {}
            Err(e) => self.panel = Panel::Error(view::weather_failure(&e)),
        }

        &self.panel
    }

    fn apply_navigation(&mut self, result: Result<Option<Fetched<PageLoad>>, ClientError>) -> bool {
        match result {
            Ok(None) => false,
            Ok(Some(fetched)) => {
                self.apply_page(Ok(fetched));
                true
            }
            Err(e) => {
                self.apply_page(Err(e));
                true
            }
        }
    }

    fn apply_page(&mut self, result: Result<Fetched<PageLoad>, ClientError>) {
        match result {
            Ok(Fetched::Current(load)) => {
                self.state = load.state;
                self.cities = load.cities;
                self.selected = None;
                self.panel = Panel::Empty;
            }
            Ok(Fetched::Superseded) => {}
            Err(_) => self.panel = Panel::Error(view::CITIES_UNAVAILABLE.to_string()),
        }
    }
}
