// Single-entity fetcher keyed by an optional identifier

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::resource::Resource;
use crate::source::DetailSource;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailState<T> {
    pub entity: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> DetailState<T> {
    fn cleared() -> Self {
        Self {
            entity: None,
            loading: false,
            error: None,
        }
    }
}

impl<T> Default for DetailState<T> {
    fn default() -> Self {
        Self::cleared()
    }
}

pub struct DetailFetcher<R: Resource> {
    source: Arc<dyn DetailSource<R>>,
    id: RwLock<Option<u64>>,
    state: RwLock<DetailState<R::Detail>>,
    generation: AtomicU64,
}

impl<R: Resource> DetailFetcher<R> {
    pub fn new(source: Arc<dyn DetailSource<R>>) -> Self {
        Self {
            source,
            id: RwLock::new(None),
            state: RwLock::new(DetailState::cleared()),
            generation: AtomicU64::new(0),
        }
    }

    pub fn id(&self) -> Option<u64> {
        *self.id.read()
    }

    pub fn state(&self) -> DetailState<R::Detail> {
        self.state.read().clone()
    }

    /// Select the entity to show.
    ///
    /// `None` (and the id `0`, which the server never issues) clears the
    /// state before the first await point and issues no call. Selecting the
    /// id already held does nothing.
    pub async fn set_id(&self, id: Option<u64>) {
        let id = id.filter(|id| *id != 0);
        {
            let mut held = self.id.write();
            if *held == id {
                return;
            }
            *held = id;
        }

        match id {
            Some(id) => self.load(id).await,
            None => {
                let mut state = self.state.write();
                self.generation.fetch_add(1, Ordering::SeqCst);
                *state = DetailState::cleared();
            }
        }
    }

    /// Fetch the held entity again
    pub async fn reload(&self) {
        if let Some(id) = self.id() {
            self.load(id).await;
        }
    }

    async fn load(&self, id: u64) {
        let ticket = {
            let mut state = self.state.write();
            state.loading = true;
            state.error = None;
            self.generation.fetch_add(1, Ordering::SeqCst) + 1
        };

        let result = self.source.fetch_detail(id).await;

        let mut state = self.state.write();
        if self.generation.load(Ordering::SeqCst) != ticket {
            debug!(resource = R::NAME, id, "Discarding stale detail response");
            return;
        }

        state.loading = false;
        match result {
            Some(entity) => state.entity = Some(entity),
            None => {
                warn!(resource = R::NAME, id, "Detail load failed");
                state.error = Some(R::DETAIL_ERROR.to_string());
            }
        }
    }
}
