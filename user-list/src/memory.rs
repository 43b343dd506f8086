use crate::PageFetcher;
use crate::error::{FetchError, SourceError};
use crate::models::{Item, Page};
use crate::params::{PageParams, total_pages};
use async_trait::async_trait;
use log::debug;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

/// An immutable, ordered user collection answering page requests by slicing.
#[derive(Debug, Clone)]
pub struct InMemoryPageSource {
    items: Arc<[Item]>,
}

impl Default for InMemoryPageSource {
    fn default() -> Self {
        Self {
            items: Arc::from(Vec::new()),
        }
    }
}

impl InMemoryPageSource {
    /// Creates a source over `items` in insertion order, rejecting duplicate ids.
    pub fn new(items: Vec<Item>) -> Result<Self, SourceError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id) {
                return Err(SourceError::DuplicateId(item.id));
            }
        }
        Ok(Self {
            items: items.into(),
        })
    }

    /// Loads a JSON array of users from `path`
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        debug!("Loading users from {}", path.display());
        let raw = std::fs::read(path)?;
        let items: Vec<Item> = serde_json::from_slice(&raw)?;
        Self::new(items)
    }

    /// Total number of users in the collection
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Slices `[page * size, page * size + size)` out of the collection.
    pub fn page(&self, params: PageParams) -> Page {
        let total = self.items.len() as u64;
        let start = params.start().min(total) as usize;
        let end = params.end().min(total) as usize;

        Page {
            content: self.items[start..end].to_vec(),
            page: params.page,
            size: params.size,
            total_pages: total_pages(total, params.size),
        }
    }
}

#[async_trait]
impl PageFetcher for InMemoryPageSource {
    async fn fetch_page(&self, params: PageParams) -> Result<Page, FetchError> {
        Ok(self.page(params))
    }
}
