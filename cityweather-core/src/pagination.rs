//! Paging through the backend's city list.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::{
    backend::CityBackend,
    error::ClientError,
    model::{City, CityPage, DEFAULT_PAGE_SIZE},
    sequence::{Fetched, RequestSequence},
};

/// Where the user currently is in the city list.
///
/// `total_pages` stays unknown until the backend has answered at least once;
/// until then there is nowhere to navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    current_page: u32,
    page_size: u32,
    total_pages: Option<u32>,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PageState {
    pub fn new(page_size: u32) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
            total_pages: None,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn total_pages(&self) -> Option<u32> {
        self.total_pages
    }

    pub fn is_loaded(&self) -> bool {
        self.total_pages.is_some()
    }

    pub fn has_previous(&self) -> bool {
        self.is_loaded() && self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        matches!(self.total_pages, Some(total) if self.current_page < total)
    }

    /// "Page 2 of 4", once the total is known.
    pub fn label(&self) -> Option<String> {
        self.total_pages
            .map(|total| format!("Page {} of {}", self.current_page, total))
    }

    /// State after the backend answered with `page`. An empty list still
    /// counts as one page.
    fn advanced_to(self, page: &CityPage) -> Result<Self, ClientError> {
        let total_pages = page.total_pages.max(1);

        if page.page_number == 0 || page.page_number > total_pages {
            return Err(ClientError::InvalidPage {
                page_number: page.page_number,
                total_pages: page.total_pages,
            });
        }

        Ok(Self {
            current_page: page.page_number,
            page_size: self.page_size,
            total_pages: Some(total_pages),
        })
    }
}

/// A successfully loaded page: the new state plus the cities to offer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLoad {
    pub state: PageState,
    pub cities: Vec<City>,
}

#[derive(Debug)]
pub struct Paginator<B: ?Sized> {
    backend: Arc<B>,
    sequence: RequestSequence,
}

impl<B: CityBackend + ?Sized> Paginator<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self {
            backend,
            sequence: RequestSequence::new(),
        }
    }

    pub async fn load_page(
        &self,
        state: &PageState,
        page_number: u32,
    ) -> Result<Fetched<PageLoad>, ClientError> {
        if page_number == 0 {
            return Err(ClientError::PageOutOfRange { requested: page_number });
        }

        let ticket = self.sequence.issue();
        let result = self.backend.city_page(page_number, state.page_size).await;

        if !self.sequence.is_latest(ticket) {
            debug!(page_number, "dropping superseded city page response");
            return Ok(Fetched::Superseded);
        }

        let page = result.inspect_err(|e| warn!(page_number, error = %e, "failed to load cities"))?;
        let next_state = state.advanced_to(&page)?;

        Ok(Fetched::Current(PageLoad {
            state: next_state,
            cities: page.data,
        }))
    }

    /// Load the page before the current one; `None` when already on the first.
    pub async fn previous(
        &self,
        state: &PageState,
    ) -> Result<Option<Fetched<PageLoad>>, ClientError> {
        if !state.has_previous() {
            return Ok(None);
        }

        self.load_page(state, state.current_page - 1).await.map(Some)
    }

    /// Load the page after the current one; `None` when already on the last.
    pub async fn next(&self, state: &PageState) -> Result<Option<Fetched<PageLoad>>, ClientError> {
        if !state.has_next() {
            return Ok(None);
        }

        self.load_page(state, state.current_page + 1).await.map(Some)
    }
}
