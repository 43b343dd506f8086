use crate::PageFetcher;
use crate::error::FetchError;
use crate::locale::Locale;
use crate::models::Page;
use crate::params::{DEFAULT_PAGE_SIZE, PageParams};
use crate::state::{PageTicket, PaginationState};
use crate::view::UserListView;
use log::{debug, info};
use std::sync::Arc;
use tokio::sync::mpsc;

type Response = (PageTicket, Result<Page, FetchError>);

/// Drives a [`PaginationState`] from navigation actions.
///
/// Each action spawns one fetch and returns immediately; responses are
/// applied in arrival order by [`UserList::settle`]. A response belonging to a
/// superseded request is dropped, so a slow early fetch can never overwrite
/// the page a later navigation asked for.
pub struct UserList<F> {
    fetcher: Arc<F>,
    state: PaginationState,
    page_size: u64,
    locale: Locale,
    responses_tx: mpsc::UnboundedSender<Response>,
    responses_rx: mpsc::UnboundedReceiver<Response>,
    in_flight: usize,
}

impl<F> UserList<F>
where
    F: PageFetcher + 'static,
{
    /// Creates a list over `fetcher` using the system locale
    pub fn new(fetcher: F) -> Self {
        Self::with_shared_fetcher(Arc::new(fetcher))
    }

    pub fn with_shared_fetcher(fetcher: Arc<F>) -> Self {
        let (responses_tx, responses_rx) = mpsc::unbounded_channel();
        Self {
            fetcher,
            state: PaginationState::new(),
            page_size: DEFAULT_PAGE_SIZE,
            locale: Locale::from_system(),
            responses_tx,
            responses_rx,
            in_flight: 0,
        }
    }

    /// Sets the number of users requested per page. Zero keeps the default.
    pub fn with_page_size(mut self, page_size: u64) -> Self {
        if page_size > 0 {
            self.page_size = page_size;
        }
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Issues the initial fetch for the current page
    pub fn mount(&mut self) {
        let ticket = self.state.reload();
        self.dispatch(ticket);
    }

    /// Re-requests the current page after a failure
    pub fn reload(&mut self) {
        self.mount();
    }

    /// Moves to the following page. Returns `false` if there is none.
    pub fn next(&mut self) -> bool {
        match self.state.request_next() {
            Some(ticket) => {
                self.dispatch(ticket);
                true
            }
            None => false,
        }
    }

    /// Moves to the preceding page. Returns `false` if there is none.
    pub fn previous(&mut self) -> bool {
        match self.state.request_previous() {
            Some(ticket) => {
                self.dispatch(ticket);
                true
            }
            None => false,
        }
    }

    /// Switches display language; the loaded page is kept as is.
    pub fn select_locale(&mut self, locale: Locale) {
        info!("Switching locale from {} to {}", self.locale, locale);
        self.locale = locale;
    }

    /// Waits for the next response and applies it.
    ///
    /// Returns `false` once nothing is in flight. A stale response still counts
    /// as settled even though it leaves the state unchanged.
    pub async fn settle(&mut self) -> bool {
        if self.in_flight == 0 {
            return false;
        }
        let Some((ticket, result)) = self.responses_rx.recv().await else {
            return false;
        };
        self.in_flight -= 1;
        self.state.complete(ticket, result);
        true
    }

    /// Settles responses until the latest request has been applied
    pub async fn wait_idle(&mut self) {
        while self.state.is_loading() {
            if !self.settle().await {
                break;
            }
        }
    }

    pub fn view(&self) -> UserListView {
        UserListView::new(&self.state, self.locale.labels())
    }

    fn dispatch(&mut self, ticket: PageTicket) {
        let params = PageParams::new(ticket.page(), self.page_size);
        let fetcher = Arc::clone(&self.fetcher);
        let responses_tx = self.responses_tx.clone();
        self.in_flight += 1;

        debug!("Dispatching fetch for page {}", ticket.page());
        tokio::spawn(async move {
            let result = fetcher.fetch_page(params).await;
            // The receiver lives as long as the list; a send error only means it was dropped
            let _ = responses_tx.send((ticket, result));
        });
    }
}
