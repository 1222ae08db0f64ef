//! Pagination utilities for service layer
//!
//! `PageRequest` is the offset/limit descriptor (zero-based page index) and
//! `Page` the result envelope with totals and navigation flags.

use serde::{Deserialize, Serialize};

pub const MAX_PAGE_SIZE: u64 = 100;

/// Pagination parameters
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct PageRequest {
    /// 0-based page index
    #[serde(default)]
    pub page: u64,
    /// items per page
    #[serde(default = "default_size")]
    pub size: u64,
}

fn default_size() -> u64 { 10 }

impl PageRequest {
    pub fn of(page: u64, size: u64) -> Self { Self { page, size } }

    /// Clamp the page size into `1..=MAX_PAGE_SIZE`
    pub fn normalize(self) -> (u64, u64) {
        (self.page, self.size.clamp(1, MAX_PAGE_SIZE))
    }
}

impl Default for PageRequest {
    fn default() -> Self { Self { page: 0, size: default_size() } }
}

/// One page of results.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page_number: u64,
    pub page_size: u64,
    pub total_pages: u64,
    pub total_elements: u64,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T> Page<T> {
    /// `page_size` must already be normalized (non-zero).
    pub fn new(items: Vec<T>, page_number: u64, page_size: u64, total_elements: u64) -> Self {
        let total_pages = total_elements.div_ceil(page_size);
        Self {
            items,
            page_number,
            page_size,
            total_pages,
            total_elements,
            has_next: page_number.saturating_add(1) < total_pages,
            has_previous: page_number > 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Page, PageRequest};

    #[test]
    fn normalize_clamps_zero_size() {
        let (idx, per) = PageRequest::of(0, 0).normalize();
        assert_eq!(idx, 0);
        assert_eq!(per, 1);
    }

    #[test]
    fn normalize_clamps_upper_bound() {
        let (idx, per) = PageRequest::of(4, 1000).normalize();
        assert_eq!(idx, 4);
        assert_eq!(per, 100);
    }

    #[test]
    fn default_values_are_sane() {
        let d = PageRequest::default();
        assert_eq!(d.page, 0);
        assert_eq!(d.size, 10);
    }

    #[test]
    fn navigation_flags() {
        let first = Page::new(vec![1, 2], 0, 2, 5);
        assert_eq!(first.total_pages, 3);
        assert!(first.has_next);
        assert!(!first.has_previous);

        let last = Page::new(vec![5], 2, 2, 5);
        assert!(!last.has_next);
        assert!(last.has_previous);

        let beyond: Page<i32> = Page::new(vec![], 7, 2, 5);
        assert!(beyond.items.is_empty());
        assert!(!beyond.has_next);
        assert_eq!(beyond.total_elements, 5);
    }

    #[test]
    fn last_representable_page_does_not_overflow() {
        let p: Page<i32> = Page::new(vec![], u64::MAX, 1, 3);
        assert_eq!(p.total_pages, 3);
        assert!(!p.has_next);
        assert!(p.has_previous);
    }

    #[test]
    fn empty_store_has_no_pages() {
        let p: Page<i32> = Page::new(vec![], 0, 10, 0);
        assert_eq!(p.total_pages, 0);
        assert!(!p.has_next);
        assert!(!p.has_previous);
    }
}
