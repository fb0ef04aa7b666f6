//! Pagination math for category feeds.
//!
//! A feed endpoint returns the full ordered ID list; the client shows it in
//! fixed 30-item pages. Page numbers are 1-based to match the navigable
//! routes (`/{category}/{page}`).

use std::ops::Range;

use crate::api::{Category, Story};

pub const PAGE_SIZE: usize = 30;

/// Total number of pages for a feed of `id_count` ids.
pub fn total_pages(id_count: usize) -> usize {
    id_count.div_ceil(PAGE_SIZE)
}

/// Index range of the ids belonging to `page_number` (1-based), clamped to
/// the feed length. Out-of-range pages yield an empty range.
pub fn page_bounds(id_count: usize, page_number: usize) -> Range<usize> {
    let start = page_number.saturating_sub(1) * PAGE_SIZE;
    let start = start.min(id_count);
    let end = (start + PAGE_SIZE).min(id_count);
    start..end
}

/// A resolved page of stories, published to the UI as one unit.
#[derive(Debug, Clone)]
pub struct LoadedPage {
    pub stories: Vec<Story>,
    pub page: usize,
    pub total_pages: usize,
}

/// Which slice of which feed the story list is currently showing.
///
/// `total_pages` is derived from the last feed fetch and recomputed on every
/// page load; it is never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub category: Category,
    pub page: usize,
    pub total_pages: usize,
}

impl PageState {
    pub fn new(category: Category, page: usize) -> Self {
        Self {
            category,
            page: page.max(1),
            total_pages: 0,
        }
    }

    /// Navigation controls disable at the edges rather than clamping a
    /// requested page, matching the original pager behavior.
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(Category::default(), 1)
    }
}
