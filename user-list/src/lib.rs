//! # user-list
//!
//! Paginated access to a user directory.
//!
//! ## Components
//!
//! - **Fetchers:** [`PageFetcher`] implementations over an in-memory collection
//!   ([`InMemoryPageSource`]) or a remote user service ([`HttpPageFetcher`]).
//! - **State:** [`PaginationState`], the page-state machine with stale-response
//!   protection.
//! - **Controller:** [`UserList`], which dispatches fetches for navigation
//!   actions and exposes a localized [`UserListView`].

pub mod controller;
pub mod error;
pub mod http;
pub mod locale;
pub mod memory;
pub mod models;
pub mod params;
pub mod state;
pub mod view;

use async_trait::async_trait;

pub use controller::UserList;
pub use error::{FetchError, SourceError, UnknownLocale};
pub use http::{HttpPageFetcher, HttpPageFetcherBuilder};
pub use locale::{Labels, Locale};
pub use memory::InMemoryPageSource;
pub use models::{Item, Page};
pub use params::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, PageParams};
pub use state::{PageTicket, PaginationState, Phase};
pub use view::UserListView;

/// A source of user pages
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches one page. Out-of-range pages yield empty content, not an error.
    async fn fetch_page(&self, params: PageParams) -> Result<Page, FetchError>;
}

#[async_trait]
impl<T: PageFetcher + ?Sized> PageFetcher for std::sync::Arc<T> {
    async fn fetch_page(&self, params: PageParams) -> Result<Page, FetchError> {
        (**self).fetch_page(params).await
    }
}
