use crate::params::PageParams;
use serde::{Deserialize, Serialize};

/// A single user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Item {
    /// Stable, unique identifier
    pub id: u64,
    pub username: String,
    pub email: String,
    /// Profile image reference, `null` when the user has none
    #[serde(default)]
    pub image: Option<String>,
}

impl Item {
    pub fn new(id: u64, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
            image: None,
        }
    }
}

/// One bounded slice of the user collection plus pagination metadata.
///
/// `content.len() <= size` always holds. A page index past the end of the
/// collection is answered with empty `content` rather than an error, so
/// `page < total_pages` only holds for in-range requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub content: Vec<Item>,
    pub page: u64,
    pub size: u64,
    pub total_pages: u64,
}

impl Page {
    /// Whether a page follows this one
    pub fn has_next(&self) -> bool {
        self.page.saturating_add(1) < self.total_pages
    }

    /// Whether a page precedes this one
    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    /// Usernames in display order
    pub fn usernames(&self) -> impl Iterator<Item = &str> {
        self.content.iter().map(|item| item.username.as_str())
    }

    /// Checks that this page is a well-formed answer to `params`.
    ///
    /// The page index must be echoed back. The size may be smaller than
    /// requested, since services cap oversized pages, but never zero.
    /// `content` must fit in `size`, and non-empty content is only allowed
    /// for in-range pages.
    pub fn check_answers(&self, params: PageParams) -> Result<(), String> {
        if self.page != params.page {
            return Err(format!(
                "requested page {} but received page {}",
                params.page, self.page
            ));
        }
        if self.size == 0 || self.size > params.size {
            return Err(format!(
                "requested size {} but received size {}",
                params.size, self.size
            ));
        }
        if self.content.len() as u64 > self.size {
            return Err(format!(
                "{} items exceed page size {}",
                self.content.len(),
                self.size
            ));
        }
        if !self.content.is_empty() && self.page >= self.total_pages {
            return Err(format!(
                "page {} holds items but only {} pages exist",
                self.page, self.total_pages
            ));
        }
        Ok(())
    }
}
