use crate::error::FetchError;
use crate::models::Page;
use log::{debug, warn};

/// Identifies one outstanding page request.
///
/// Every navigation issues a fresh ticket; a response is only applied while its
/// ticket is still the latest one issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageTicket {
    id: u64,
    page: u64,
}

impl PageTicket {
    /// The page this request targets
    pub fn page(&self) -> u64 {
        self.page
    }
}

/// Where the list is in its fetch cycle
#[derive(Debug)]
pub enum Phase {
    /// Nothing requested yet
    Idle,
    /// A request is outstanding
    Loading(PageTicket),
    /// The latest request succeeded; the page is in [`PaginationState::data`]
    Loaded,
    /// The latest request failed
    Failed(FetchError),
}

/// Page-state machine for a paginated list.
///
/// `current_page` only moves when a response is applied, so a failed or
/// superseded request leaves it untouched. Navigation visibility is derived
/// from `current_page` and the most recently loaded page.
#[derive(Debug)]
pub struct PaginationState {
    current_page: u64,
    phase: Phase,
    data: Option<Page>,
    issued: u64,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new()
    }
}

impl PaginationState {
    pub fn new() -> Self {
        Self {
            current_page: 0,
            phase: Phase::Idle,
            data: None,
            issued: 0,
        }
    }

    pub fn current_page(&self) -> u64 {
        self.current_page
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// The most recently loaded page, kept while a newer one loads or fails
    pub fn data(&self) -> Option<&Page> {
        self.data.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading(_))
    }

    pub fn error(&self) -> Option<&FetchError> {
        match &self.phase {
            Phase::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Whether a "next" action is available
    pub fn has_next(&self) -> bool {
        self.data
            .as_ref()
            .is_some_and(|data| self.current_page.saturating_add(1) < data.total_pages)
    }

    /// Whether a "previous" action is available
    pub fn has_previous(&self) -> bool {
        self.current_page > 0
    }

    /// Starts loading `page`, superseding any request still in flight.
    pub fn begin(&mut self, page: u64) -> PageTicket {
        if let Phase::Loading(stale) = self.phase {
            debug!(
                "Request for page {} superseded by request for page {}",
                stale.page, page
            );
        }

        self.issued += 1;
        let ticket = PageTicket {
            id: self.issued,
            page,
        };
        self.phase = Phase::Loading(ticket);
        ticket
    }

    /// Reloads the current page, e.g. on mount or to retry after a failure
    pub fn reload(&mut self) -> PageTicket {
        self.begin(self.current_page)
    }

    /// Starts loading the following page, if there is one
    pub fn request_next(&mut self) -> Option<PageTicket> {
        if !self.has_next() {
            return None;
        }
        Some(self.begin(self.current_page + 1))
    }

    /// Starts loading the preceding page, if there is one
    pub fn request_previous(&mut self) -> Option<PageTicket> {
        if !self.has_previous() {
            return None;
        }
        Some(self.begin(self.current_page - 1))
    }

    /// Applies the outcome of the request identified by `ticket`.
    ///
    /// Returns `false` and leaves the state untouched when `ticket` is not the
    /// latest request issued.
    pub fn complete(&mut self, ticket: PageTicket, result: Result<Page, FetchError>) -> bool {
        let latest = matches!(self.phase, Phase::Loading(current) if current == ticket);
        if !latest {
            debug!("Discarding stale response for page {}", ticket.page);
            return false;
        }

        match result {
            Ok(page) => {
                self.current_page = ticket.page;
                self.data = Some(page);
                self.phase = Phase::Loaded;
            }
            Err(err) => {
                warn!("Failed to load page {}: {}", ticket.page, err);
                self.phase = Phase::Failed(err);
            }
        }
        true
    }
}
