//! ListController tests against in-memory page sources

use std::collections::{HashMap, VecDeque};
use std::pin::pin;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::oneshot;

use facility_api::{NoticeSummary, PageRequest, PageResult};
use facility_console::{ListController, ListState, Notices, PageSource};

// ============================================================================
// Fixtures
// ============================================================================

fn notice(id: u64) -> NoticeSummary {
    NoticeSummary {
        id,
        title: format!("Notice {}", id),
        author_name: "Kim".to_string(),
        created_at: None,
        formatted_date: "2024.03.02".to_string(),
    }
}

fn page(ids: &[u64], current_page: u32, total_pages: u32) -> PageResult<NoticeSummary> {
    PageResult {
        items: ids.iter().copied().map(notice).collect(),
        total_count: 12,
        current_page,
        total_pages,
        has_next: current_page < total_pages,
        has_previous: current_page > 1,
    }
}

/// Replays queued responses in order; an exhausted queue fails the fetch
#[derive(Default)]
struct ScriptedPages {
    calls: Mutex<Vec<PageRequest>>,
    responses: Mutex<VecDeque<Option<PageResult<NoticeSummary>>>>,
}

impl ScriptedPages {
    fn new(responses: Vec<Option<PageResult<NoticeSummary>>>) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            responses: Mutex::new(responses.into()),
        })
    }

    fn calls(&self) -> Vec<PageRequest> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl PageSource<Notices> for ScriptedPages {
    async fn fetch_page(&self, request: PageRequest) -> Option<PageResult<NoticeSummary>> {
        self.calls.lock().push(request);
        self.responses.lock().pop_front().flatten()
    }
}

/// Each page index resolves only when the test releases it
#[derive(Default)]
struct GatedPages {
    gates: Mutex<HashMap<u32, oneshot::Receiver<Option<PageResult<NoticeSummary>>>>>,
}

impl GatedPages {
    fn gate(&self, page_index: u32) -> oneshot::Sender<Option<PageResult<NoticeSummary>>> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().insert(page_index, rx);
        tx
    }
}

#[async_trait]
impl PageSource<Notices> for GatedPages {
    async fn fetch_page(&self, request: PageRequest) -> Option<PageResult<NoticeSummary>> {
        let gate = self.gates.lock().remove(&request.page_index());
        match gate {
            Some(rx) => rx.await.ok().flatten(),
            None => None,
        }
    }
}

fn controller(source: Arc<ScriptedPages>) -> ListController<Notices> {
    ListController::<Notices>::new(source, PageRequest::default())
}

// ============================================================================
// Lifecycle
// ============================================================================

#[test]
fn test_initial_state_is_loading() {
    let list = controller(ScriptedPages::new(vec![]));
    assert!(list.is_loading());
    let state = list.state();
    assert!(state.items.is_empty());
    assert_eq!(state.error, None);
    assert_eq!(state, ListState::initial());
}

#[tokio::test]
async fn test_mount_stores_page_with_zero_based_current_page() {
    let source = ScriptedPages::new(vec![Some(page(&[6, 7, 8], 2, 3))]);
    let list = ListController::<Notices>::new(source.clone(), PageRequest::new(1, 5).unwrap());

    list.mount().await;

    assert_eq!(source.calls(), vec![PageRequest::new(1, 5).unwrap()]);
    let state = list.state();
    assert!(!state.loading);
    assert_eq!(state.error, None);
    assert_eq!(state.items.len(), 3);
    assert_eq!(state.total_count, 12);
    assert_eq!(state.current_page, 1);
    assert_eq!(state.total_pages, 3);
    assert!(state.has_next);
    assert!(state.has_previous);
}

#[tokio::test]
async fn test_server_flags_are_stored_verbatim() {
    let mut inconsistent = page(&[1], 1, 1);
    inconsistent.has_next = true;
    let list = controller(ScriptedPages::new(vec![Some(inconsistent)]));

    list.mount().await;

    let state = list.state();
    assert!(state.has_next);
    assert_eq!(state.total_pages, 1);
}

#[tokio::test]
async fn test_failure_keeps_previous_items() {
    let source = ScriptedPages::new(vec![Some(page(&[1, 2, 3, 4, 5], 1, 3)), None]);
    let list = controller(source.clone());

    list.mount().await;
    list.set_page(1).await;

    let state = list.state();
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("Failed to load notices."));
    assert_eq!(state.items.len(), 5);
    assert_eq!(state.current_page, 0);
}

#[tokio::test]
async fn test_failed_mount_settles_with_error() {
    let list = controller(ScriptedPages::new(vec![None]));

    list.mount().await;

    let state = list.state();
    assert!(!state.loading);
    assert!(state.items.is_empty());
    assert!(state.error.is_some());
}

#[tokio::test]
async fn test_next_load_clears_error() {
    let source = ScriptedPages::new(vec![None, Some(page(&[1], 1, 1))]);
    let list = controller(source);

    list.mount().await;
    assert!(list.state().error.is_some());

    list.refetch().await;
    assert_eq!(list.state().error, None);
    assert_eq!(list.state().items.len(), 1);
}

// ============================================================================
// Refetch
// ============================================================================

#[tokio::test]
async fn test_refetch_uses_held_request() {
    let source = ScriptedPages::new(vec![
        Some(page(&[1], 1, 3)),
        Some(page(&[11], 3, 3)),
        Some(page(&[11, 12], 3, 3)),
    ]);
    let list = controller(source.clone());

    list.mount().await;
    list.set_page(2).await;
    list.refetch().await;

    let calls = source.calls();
    assert_eq!(calls.len(), 3);
    assert_eq!(calls[2], PageRequest::new(2, 5).unwrap());
    assert_eq!(list.request().page_index(), 2);
    assert_eq!(list.state().items.len(), 2);
}

#[tokio::test]
async fn test_refetch_is_idempotent() {
    let source = ScriptedPages::new(vec![
        Some(page(&[1, 2], 1, 1)),
        Some(page(&[1, 2], 1, 1)),
    ]);
    let list = controller(source);

    list.refetch().await;
    let once = list.state();
    list.refetch().await;

    assert_eq!(list.state(), once);
}

#[tokio::test]
async fn test_unchanged_request_does_not_fetch() {
    let source = ScriptedPages::new(vec![Some(page(&[1], 1, 1))]);
    let list = controller(source.clone());

    list.mount().await;
    list.set_page(0).await;
    list.set_request(PageRequest::default()).await;

    assert_eq!(source.calls().len(), 1);
}

// ============================================================================
// Navigation
// ============================================================================

#[tokio::test]
async fn test_navigation_from_display_page_three() {
    let source = ScriptedPages::new(vec![
        Some(page(&[11], 3, 3)),
        Some(page(&[6], 2, 3)),
    ]);
    let list = controller(source.clone());

    list.show_page(3).await;
    assert_eq!(list.request().page_index(), 2);
    assert_eq!(list.pagination().display_page, 3);

    list.previous().await;
    assert_eq!(list.request().page_index(), 1);

    let calls = source.calls();
    assert_eq!(calls[0].page_index(), 2);
    assert_eq!(calls[1].page_index(), 1);
}

#[tokio::test]
async fn test_next_requests_following_page() {
    let source = ScriptedPages::new(vec![Some(page(&[6], 2, 3))]);
    let list = controller(source.clone());

    list.next().await;

    assert_eq!(source.calls()[0].page_index(), 1);
}

#[tokio::test]
async fn test_previous_on_first_page_stays() {
    let source = ScriptedPages::new(vec![Some(page(&[1], 1, 1))]);
    let list = controller(source.clone());

    list.mount().await;
    list.previous().await;

    assert_eq!(list.request().page_index(), 0);
    assert_eq!(source.calls().len(), 1);
}

#[tokio::test]
async fn test_page_size_change_refetches() {
    let source = ScriptedPages::new(vec![Some(page(&[1], 1, 3)), Some(page(&[1], 1, 2))]);
    let list = controller(source.clone());

    list.mount().await;
    list.set_page_size(10).await.unwrap();

    assert_eq!(source.calls()[1].page_size(), 10);
    assert!(list.set_page_size(0).await.is_err());
    assert_eq!(source.calls().len(), 2);
}

#[tokio::test]
async fn test_pagination_view_hidden_for_single_page() {
    let list = controller(ScriptedPages::new(vec![Some(page(&[1, 2], 1, 1))]));

    list.mount().await;

    let view = list.pagination();
    assert!(!view.visible());
    assert!(!view.has_next);
    assert!(!view.has_previous);
}

#[tokio::test]
async fn test_last_page_index_does_not_overflow() {
    let source = ScriptedPages::new(vec![]);
    let list = controller(source.clone());

    list.set_page(u32::MAX).await;
    let view = list.pagination();
    list.next().await;

    assert_eq!(view.display_page, u32::MAX);
    assert_eq!(list.request().page_index(), u32::MAX);
    assert_eq!(source.calls().len(), 1);
}

// ============================================================================
// Stale responses
// ============================================================================

#[tokio::test]
async fn test_stale_response_is_discarded() {
    let source = Arc::new(GatedPages::default());
    let first_gate = source.gate(1);
    let second_gate = source.gate(2);
    let list = ListController::<Notices>::new(source.clone(), PageRequest::default());

    let mut first = pin!(list.set_page(1));
    let mut second = pin!(list.set_page(2));
    assert!(futures::poll!(first.as_mut()).is_pending());
    assert!(futures::poll!(second.as_mut()).is_pending());

    second_gate.send(Some(page(&[11, 12], 3, 3))).unwrap();
    second.await;
    assert_eq!(list.state().current_page, 2);

    first_gate.send(Some(page(&[6, 7, 8, 9, 10], 2, 3))).unwrap();
    first.await;

    let state = list.state();
    assert_eq!(state.current_page, 2);
    assert_eq!(state.items.len(), 2);
    assert!(!state.loading);
}

#[tokio::test]
async fn test_stale_failure_does_not_set_error() {
    let source = Arc::new(GatedPages::default());
    let first_gate = source.gate(1);
    let second_gate = source.gate(2);
    let list = ListController::<Notices>::new(source.clone(), PageRequest::default());

    let mut first = pin!(list.set_page(1));
    let mut second = pin!(list.set_page(2));
    assert!(futures::poll!(first.as_mut()).is_pending());
    assert!(futures::poll!(second.as_mut()).is_pending());

    second_gate.send(Some(page(&[11], 3, 3))).unwrap();
    second.await;
    first_gate.send(None).unwrap();
    first.await;

    assert_eq!(list.state().error, None);
}
