//! Page window arithmetic shared by storefront listings.
//!
//! A [`PageWindow`] captures the one-based page currently on screen, the page
//! size, and the total number of items reported by the API. From that triple
//! it derives the item offset, the visible one-based item range, the number
//! of pages, and the "Showing X–Y of Z results" label rendered under lists.
//!
//! The window never clamps `current_page`: out-of-range pages are a caller
//! concern. All arithmetic saturates so that hostile inputs cannot overflow.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Label rendered when a listing has no results at all.
pub const EMPTY_RANGE_LABEL: &str = "Showing 0 of 0 results";

/// Position of a listing page within a result set.
///
/// # Examples
/// ```
/// use pagination::PageWindow;
///
/// let window = PageWindow::new(2, 10, 25);
/// assert_eq!(window.describe_range(), "Showing 11–20 of 25 results");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageWindow {
    /// One-based page number.
    pub current_page: u64,
    /// Maximum number of items on one page.
    pub items_per_page: u64,
    /// Total number of items across all pages.
    pub total_count: u64,
}

/// One-based, inclusive range of items visible on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemRange {
    /// First visible item, one-based.
    pub start: u64,
    /// Last visible item, one-based and inclusive.
    pub end: u64,
}

/// Errors raised by [`PageWindow::try_new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PageWindowError {
    /// Page numbers start at one.
    #[error("page number must be at least 1")]
    ZeroPage,
    /// A page must hold at least one item.
    #[error("items per page must be at least 1")]
    ZeroPageSize,
}

impl PageWindow {
    /// Build a window without validating its inputs.
    #[must_use]
    pub const fn new(current_page: u64, items_per_page: u64, total_count: u64) -> Self {
        Self {
            current_page,
            items_per_page,
            total_count,
        }
    }

    /// Build a window, rejecting a zero page number or a zero page size.
    ///
    /// # Errors
    ///
    /// Returns [`PageWindowError`] when either the page or the page size is
    /// zero.
    pub const fn try_new(
        current_page: u64,
        items_per_page: u64,
        total_count: u64,
    ) -> Result<Self, PageWindowError> {
        if current_page == 0 {
            return Err(PageWindowError::ZeroPage);
        }
        if items_per_page == 0 {
            return Err(PageWindowError::ZeroPageSize);
        }
        Ok(Self::new(current_page, items_per_page, total_count))
    }

    /// Number of items preceding the current page.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        self.current_page
            .saturating_sub(1)
            .saturating_mul(self.items_per_page)
    }

    /// Visible item range, or `None` when the result set is empty.
    #[must_use]
    pub const fn range(&self) -> Option<ItemRange> {
        if self.total_count == 0 {
            return None;
        }
        let start = self.offset().saturating_add(1);
        let page_end = self.current_page.saturating_mul(self.items_per_page);
        let end = if page_end < self.total_count {
            page_end
        } else {
            self.total_count
        };
        Some(ItemRange { start, end })
    }

    /// Number of pages needed to show every item. Zero when the page size is
    /// zero.
    #[must_use]
    pub const fn page_count(&self) -> u64 {
        if self.items_per_page == 0 {
            return 0;
        }
        self.total_count.div_ceil(self.items_per_page)
    }

    /// Whether a page follows the current one.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.current_page < self.page_count()
    }

    /// Render the range label shown beneath a listing.
    #[must_use]
    pub fn describe_range(&self) -> String {
        match self.range() {
            None => EMPTY_RANGE_LABEL.to_owned(),
            Some(ItemRange { start, end }) => {
                format!("Showing {start}–{end} of {} results", self.total_count)
            }
        }
    }

    /// Select the items that fall on the current page of `items`.
    ///
    /// # Examples
    /// ```
    /// use pagination::PageWindow;
    ///
    /// let items = [1, 2, 3, 4, 5];
    /// let window = PageWindow::new(2, 2, 5);
    /// let page: Vec<_> = window.paginate(&items).copied().collect();
    /// assert_eq!(page, vec![3, 4]);
    /// ```
    pub fn paginate<'a, T>(self, items: &'a [T]) -> impl Iterator<Item = &'a T> + 'a {
        let skip = usize::try_from(self.offset()).unwrap_or(usize::MAX);
        let take = usize::try_from(self.items_per_page).unwrap_or(usize::MAX);
        items.iter().skip(skip).take(take)
    }
}

/// Render the range label for a page without building a [`PageWindow`].
///
/// # Examples
/// ```
/// assert_eq!(pagination::describe_range(1, 10, 0), "Showing 0 of 0 results");
/// assert_eq!(
///     pagination::describe_range(3, 10, 25),
///     "Showing 21–25 of 25 results"
/// );
/// ```
#[must_use]
pub fn describe_range(current_page: u64, items_per_page: u64, total_count: u64) -> String {
    PageWindow::new(current_page, items_per_page, total_count).describe_range()
}
