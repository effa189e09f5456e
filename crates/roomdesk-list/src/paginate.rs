//! Page slicing.

use tracing::debug;

use crate::error::{ListError, Result};

/// Default page size when none is configured.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Current page and page size over an ordered collection.
///
/// Pages are numbered from 1. Setting a page is not clamped against the
/// collection: a page past the end is simply empty. The one correction the
/// paginator makes on its own is to return to page 1 whenever the collection
/// holds fewer items than a page, so a narrowing search never leaves the
/// user on an empty trailing page.
///
/// # Example
///
/// ```
/// use roomdesk_list::Paginator;
///
/// let rooms: Vec<u32> = (1..=7).collect();
/// let mut pager = Paginator::new(6).unwrap();
///
/// assert_eq!(pager.page(&rooms), &[1, 2, 3, 4, 5, 6]);
/// pager.set_page(2).unwrap();
/// assert_eq!(pager.page(&rooms), &[7]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    current_page: usize,
    page_size: usize,
}

impl Paginator {
    /// Create a paginator on page 1.
    pub fn new(page_size: usize) -> Result<Self> {
        check_page_size(page_size)?;
        Ok(Self {
            current_page: 1,
            page_size,
        })
    }

    /// Create a paginator on a given page.
    pub fn with_page(page_size: usize, current_page: usize) -> Result<Self> {
        let mut pager = Self::new(page_size)?;
        pager.set_page(current_page)?;
        Ok(pager)
    }

    /// Change the page size and go back to page 1.
    pub fn set_page_size(&mut self, page_size: usize) -> Result<()> {
        check_page_size(page_size)?;
        self.page_size = page_size;
        self.current_page = 1;
        Ok(())
    }

    /// Go to `page` without checking it against any collection.
    pub fn set_page(&mut self, page: usize) -> Result<()> {
        if page == 0 {
            return Err(ListError::InvalidPage(page));
        }
        self.current_page = page;
        Ok(())
    }

    /// Apply the shrink rule for a collection of `len` items.
    ///
    /// Returns `true` if the current page was reset.
    pub fn observe_len(&mut self, len: usize) -> bool {
        if len < self.page_size && self.current_page != 1 {
            debug!(
                len,
                page_size = self.page_size,
                from_page = self.current_page,
                "collection shrank below one page, back to page 1"
            );
            self.current_page = 1;
            return true;
        }
        false
    }

    /// The current page of `items`.
    ///
    /// Applies [`observe_len`](Self::observe_len) first. The returned slice
    /// is shorter than a page on the last page and empty past the end.
    pub fn page<'a, T>(&mut self, items: &'a [T]) -> &'a [T] {
        self.observe_len(items.len());
        let (start, end) = self.bounds(items.len());
        &items[start..end]
    }

    /// Offsets of the current page in a collection of `len` items.
    pub fn bounds(&self, len: usize) -> (usize, usize) {
        let start = (self.current_page - 1).saturating_mul(self.page_size).min(len);
        let end = start.saturating_add(self.page_size).min(len);
        (start, end)
    }

    /// Number of pages needed for `len` items.
    pub fn page_count(&self, len: usize) -> usize {
        len.div_ceil(self.page_size)
    }

    /// The current page number.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// The page size.
    pub fn page_size(&self) -> usize {
        self.page_size
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self {
            current_page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

fn check_page_size(page_size: usize) -> Result<()> {
    if page_size == 0 {
        return Err(ListError::InvalidPageSize(page_size));
    }
    Ok(())
}
