//! Paginated list controller
//!
//! One controller owns the loading/error/data state for one resource type,
//! one page at a time. Every fetch (mount, page change, explicit refetch)
//! goes through a single `load` routine. Each load takes a generation
//! ticket; a resolution whose ticket is no longer current is discarded, so
//! a slow response for an old page never overwrites a newer one.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use tracing::{debug, info, warn};

use facility_api::{InvalidPageSize, PageRequest};

use crate::pagination::{self, PaginationView};
use crate::resource::Resource;
use crate::source::PageSource;

/// Observable state of one list controller
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
    pub total_count: u64,
    /// 0-based, converted from the server's 1-based `currentPage`
    pub current_page: u32,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T> ListState<T> {
    /// State before the first fetch has settled
    pub fn initial() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            error: None,
            total_count: 0,
            current_page: 0,
            total_pages: 0,
            has_next: false,
            has_previous: false,
        }
    }
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self::initial()
    }
}

pub struct ListController<R: Resource> {
    source: Arc<dyn PageSource<R>>,
    request: RwLock<PageRequest>,
    state: RwLock<ListState<R::Summary>>,
    generation: AtomicU64,
}

impl<R: Resource> ListController<R> {
    pub fn new(source: Arc<dyn PageSource<R>>, request: PageRequest) -> Self {
        Self {
            source,
            request: RwLock::new(request),
            state: RwLock::new(ListState::initial()),
            generation: AtomicU64::new(0),
        }
    }

    /// Initial fetch for the held request
    pub async fn mount(&self) {
        self.load().await;
    }

    /// Re-issue the fetch for the currently held page and size
    pub async fn refetch(&self) {
        self.load().await;
    }

    pub fn request(&self) -> PageRequest {
        *self.request.read()
    }

    pub fn state(&self) -> ListState<R::Summary> {
        self.state.read().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().loading
    }

    /// Replace the held request. Fetches only when it actually changed.
    pub async fn set_request(&self, request: PageRequest) {
        {
            let mut held = self.request.write();
            if *held == request {
                return;
            }
            *held = request;
        }
        self.load().await;
    }

    pub async fn set_page(&self, page_index: u32) {
        let request = self.request().with_page_index(page_index);
        self.set_request(request).await;
    }

    pub async fn set_page_size(&self, page_size: u32) -> Result<(), InvalidPageSize> {
        let request = PageRequest::new(self.request().page_index(), page_size)?;
        self.set_request(request).await;
        Ok(())
    }

    /// Jump to a 1-based display page
    pub async fn show_page(&self, display_page: u32) {
        self.set_page(pagination::to_page_index(display_page)).await;
    }

    pub async fn next(&self) {
        let display = self.request().display_page();
        self.set_page(pagination::next_index(display)).await;
    }

    pub async fn previous(&self) {
        let display = self.request().display_page();
        self.set_page(pagination::previous_index(display)).await;
    }

    /// Pagination controls for the held request and the last settled page
    pub fn pagination(&self) -> PaginationView {
        let display_page = self.request().display_page();
        let state = self.state.read();
        PaginationView {
            display_page,
            total_pages: state.total_pages,
            has_next: state.has_next,
            has_previous: state.has_previous,
        }
    }

    async fn load(&self) {
        let request = self.request();
        let ticket = {
            let mut state = self.state.write();
            state.loading = true;
            state.error = None;
            self.generation.fetch_add(1, Ordering::SeqCst) + 1
        };

        let result = self.source.fetch_page(request).await;

        let mut state = self.state.write();
        if self.generation.load(Ordering::SeqCst) != ticket {
            debug!(
                resource = R::NAME,
                page = request.page_index(),
                "Discarding stale page response"
            );
            return;
        }

        state.loading = false;
        match result {
            Some(page) => {
                info!(
                    resource = R::NAME,
                    page = request.page_index(),
                    size = request.page_size(),
                    items = page.items.len(),
                    "Page loaded"
                );
                state.items = page.items;
                state.total_count = page.total_count;
                state.current_page = pagination::cached_index(page.current_page);
                state.total_pages = page.total_pages;
                state.has_next = page.has_next;
                state.has_previous = page.has_previous;
            }
            None => {
                // Items from the last successful load stay visible
                warn!(
                    resource = R::NAME,
                    page = request.page_index(),
                    "Page load failed"
                );
                state.error = Some(R::LIST_ERROR.to_string());
            }
        }
    }
}
