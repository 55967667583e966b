//! Page number translation between the user-facing 1-based numbering and
//! the 0-based request index.
//!
//! The presentation layer speaks in display pages (`1..=total_pages`), the
//! server request uses a 0-based `page` parameter, and the server reports
//! `currentPage` 1-based again. All conversions saturate at zero.

use std::ops::RangeInclusive;

/// 0-based request index for a 1-based display page
pub fn to_page_index(display_page: u32) -> u32 {
    display_page.saturating_sub(1)
}

/// 1-based display page for a 0-based request index
pub fn to_display_page(page_index: u32) -> u32 {
    page_index.saturating_add(1)
}

/// Request index of the page after `display_page`.
///
/// The display page is one ahead of its own index, so the next index equals
/// the display page itself.
pub fn next_index(display_page: u32) -> u32 {
    display_page
}

/// Request index of the page before `display_page`
pub fn previous_index(display_page: u32) -> u32 {
    display_page.saturating_sub(2)
}

/// Cached 0-based index for a server-reported 1-based `currentPage`
pub fn cached_index(server_current_page: u32) -> u32 {
    server_current_page.saturating_sub(1)
}

/// Navigation data for rendering pagination controls
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaginationView {
    /// 1-based page currently requested
    pub display_page: u32,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_previous: bool,
}

impl PaginationView {
    /// Controls are only shown when there is more than one page
    pub fn visible(&self) -> bool {
        self.total_pages > 1
    }

    /// Every selectable display page
    pub fn page_numbers(&self) -> RangeInclusive<u32> {
        1..=self.total_pages
    }

    pub fn is_current(&self, display_page: u32) -> bool {
        self.display_page == display_page
    }
}
