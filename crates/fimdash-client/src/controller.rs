// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// List query controller.
//
// Owns the search / filter / page state of one list view and turns edits
// into backend fetches:
//   - search text and live filters are debounced (last write wins),
//   - page changes, refresh and applied filter panels fetch immediately,
//   - every fetch takes a new generation and only the latest generation's
//     response is applied; superseded responses are dropped.
// Snapshots are published on a `watch` channel for the UI to render.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use fimdash_core::error::FimError;
use fimdash_core::human_errors::humanize_error;
use fimdash_core::{DashboardConfig, ListQuery, PaginationInfo};

use crate::source::ListSource;

/// How filter edits reach the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    /// A single dropdown: every change is debounced like search text.
    Live,
    /// A filter panel: changes sit in a draft until `apply_filters`.
    Deferred,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Idle,
    Loading,
    Loaded,
    Errored,
}

/// What a list view renders.
#[derive(Debug, Clone)]
pub struct ListState<R> {
    /// The query of the most recent fetch (or edit).
    pub query: ListQuery,
    /// Unapplied filter panel values (`FilterMode::Deferred` only).
    pub draft_filters: BTreeMap<String, String>,
    pub status: LoadStatus,
    pub items: Vec<R>,
    pub pagination: Option<PaginationInfo>,
    pub error: Option<String>,
}

impl<R> Default for ListState<R> {
    fn default() -> Self {
        Self {
            query: ListQuery::default(),
            draft_filters: BTreeMap::new(),
            status: LoadStatus::Idle,
            items: Vec::new(),
            pagination: None,
            error: None,
        }
    }
}

impl<R> ListState<R> {
    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    /// Loaded successfully but the backend had nothing to show.
    pub fn is_empty(&self) -> bool {
        self.status == LoadStatus::Loaded && self.items.is_empty()
    }

    pub fn total_pages(&self) -> u32 {
        self.pagination.map(|p| p.total_pages).unwrap_or(0)
    }
}

/// Timing and filter behaviour of one controller.
#[derive(Debug, Clone, Copy)]
pub struct ControllerOptions {
    pub debounce: Duration,
    pub request_timeout: Duration,
    pub filter_mode: FilterMode,
}

impl ControllerOptions {
    pub fn from_config(config: &DashboardConfig, filter_mode: FilterMode) -> Self {
        Self {
            debounce: config.search_debounce(),
            request_timeout: config.request_timeout(),
            filter_mode,
        }
    }
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self::from_config(&DashboardConfig::default(), FilterMode::Live)
    }
}

struct Shared {
    query: ListQuery,
    draft: BTreeMap<String, String>,
    /// Page count of the last successful fetch.
    total_pages: Option<u32>,
    pending: Option<JoinHandle<()>>,
    /// Bumped whenever a pending debounce is cancelled. A debounce task that
    /// already woke up cannot be aborted, so it checks this before fetching.
    debounce_token: u64,
}

struct Inner<S: ListSource> {
    source: S,
    options: ControllerOptions,
    shared: Mutex<Shared>,
    generation: AtomicU64,
    tx: watch::Sender<ListState<S::Row>>,
}

impl<S: ListSource> Drop for Inner<S> {
    fn drop(&mut self) {
        if let Ok(mut shared) = self.shared.lock()
            && let Some(handle) = shared.pending.take()
        {
            handle.abort();
        }
    }
}

/// Drives one list view. Cheap to clone; clones share state.
pub struct ListController<S: ListSource> {
    inner: Arc<Inner<S>>,
}

impl<S: ListSource> Clone for ListController<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: ListSource> ListController<S> {
    /// Create an idle controller. Nothing is fetched until the first edit,
    /// `refresh` or `reset`.
    pub fn new(source: S, options: ControllerOptions) -> Self {
        let (tx, _rx) = watch::channel(ListState::default());
        Self {
            inner: Arc::new(Inner {
                source,
                options,
                shared: Mutex::new(Shared {
                    query: ListQuery::default(),
                    draft: BTreeMap::new(),
                    total_pages: None,
                    pending: None,
                    debounce_token: 0,
                }),
                generation: AtomicU64::new(0),
                tx,
            }),
        }
    }

    pub fn options(&self) -> ControllerOptions {
        self.inner.options
    }

    pub fn subscribe(&self) -> watch::Receiver<ListState<S::Row>> {
        self.inner.tx.subscribe()
    }

    pub fn snapshot(&self) -> ListState<S::Row> {
        self.inner.tx.borrow().clone()
    }

    // -- Edits ---------------------------------------------------------------

    /// Replace the search text and fetch page 1 after the debounce interval.
    pub fn set_search_text(&self, text: impl Into<String>) {
        let mut shared = self.lock();
        shared.query.set_search(text);
        self.publish_query(&shared);
        self.schedule(&mut shared);
    }

    /// Change one filter. Live filters debounce like search; deferred ones
    /// only update the draft.
    pub fn set_filter(&self, name: impl Into<String>, value: impl Into<String>) {
        let mut shared = self.lock();
        match self.inner.options.filter_mode {
            FilterMode::Live => {
                shared.query.set_filter(name, value);
                self.publish_query(&shared);
                self.schedule(&mut shared);
            }
            FilterMode::Deferred => {
                let (name, value) = (name.into(), value.into());
                if value.is_empty() {
                    shared.draft.remove(&name);
                } else {
                    shared.draft.insert(name, value);
                }
                let draft = shared.draft.clone();
                self.inner.tx.send_modify(|s| s.draft_filters = draft);
            }
        }
    }

    /// Commit the draft filters and fetch page 1 now.
    pub fn apply_filters(&self) {
        let mut shared = self.lock();
        shared.query.filters = shared.draft.clone();
        shared.query.page = 1;
        self.fetch_now(&mut shared);
    }

    /// Clear draft and applied filters, then fetch page 1 after the debounce.
    pub fn reset_filters(&self) {
        let mut shared = self.lock();
        shared.draft.clear();
        shared.query.filters.clear();
        shared.query.page = 1;
        self.inner.tx.send_modify(|s| s.draft_filters.clear());
        self.publish_query(&shared);
        self.schedule(&mut shared);
    }

    /// Jump to `page`. Pages outside `1..=total_pages` (unknown counts as 1)
    /// are ignored and `false` is returned.
    pub fn set_page(&self, page: u32) -> bool {
        let mut shared = self.lock();
        let total = shared.total_pages.unwrap_or(1).max(1);
        if page < 1 || page > total {
            debug!(source = self.inner.source.name(), page, total, "page out of range");
            return false;
        }
        shared.query.page = page;
        self.fetch_now(&mut shared);
        true
    }

    /// Fetch the current query again, now.
    pub fn refresh(&self) {
        let mut shared = self.lock();
        self.fetch_now(&mut shared);
    }

    /// Back to an empty query on page 1, fetched now.
    pub fn reset(&self) {
        let mut shared = self.lock();
        shared.query = ListQuery::default();
        shared.draft.clear();
        self.inner.tx.send_modify(|s| s.draft_filters.clear());
        self.fetch_now(&mut shared);
    }

    // -- Internals -----------------------------------------------------------

    fn lock(&self) -> std::sync::MutexGuard<'_, Shared> {
        self.inner.shared.lock().expect("list query lock poisoned")
    }

    fn publish_query(&self, shared: &Shared) {
        let query = shared.query.clone();
        self.inner.tx.send_modify(|s| s.query = query);
    }

    fn cancel_pending(shared: &mut Shared) {
        shared.debounce_token = shared.debounce_token.wrapping_add(1);
        if let Some(handle) = shared.pending.take() {
            handle.abort();
        }
    }

    /// (Re)start the debounce timer.
    fn schedule(&self, shared: &mut Shared) {
        Self::cancel_pending(shared);
        let weak: Weak<Inner<S>> = Arc::downgrade(&self.inner);
        let delay = self.inner.options.debounce;
        let token = shared.debounce_token;
        shared.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Some(inner) = weak.upgrade() {
                let mut shared = inner.shared.lock().expect("list query lock poisoned");
                if shared.debounce_token != token {
                    return;
                }
                shared.pending = None;
                start_fetch(&inner, &mut shared);
            }
        }));
    }

    fn fetch_now(&self, shared: &mut Shared) {
        Self::cancel_pending(shared);
        start_fetch(&self.inner, shared);
    }
}

/// Issue a fetch for the current query under a fresh generation.
fn start_fetch<S: ListSource>(inner: &Arc<Inner<S>>, shared: &mut Shared) {
    let generation = inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
    let query = shared.query.clone();
    debug!(source = inner.source.name(), generation, page = query.page, "fetching");

    let published = query.clone();
    inner.tx.send_modify(|s| {
        s.query = published;
        s.status = LoadStatus::Loading;
        s.error = None;
    });

    let inner = Arc::clone(inner);
    tokio::spawn(async move {
        let timeout = inner.options.request_timeout;
        let outcome = tokio::time::timeout(timeout, inner.source.fetch(&query)).await;

        let mut shared = inner.shared.lock().expect("list query lock poisoned");
        let latest = inner.generation.load(Ordering::SeqCst);
        if generation != latest {
            debug!(
                source = inner.source.name(),
                generation, latest, "discarding superseded response"
            );
            return;
        }

        let result = match outcome {
            Ok(result) => result,
            Err(_) => Err(FimError::Timeout {
                secs: timeout.as_secs(),
            }),
        };
        match result {
            Ok(page) => {
                let info = page.info();
                shared.total_pages = Some(info.total_pages);
                info!(
                    source = inner.source.name(),
                    generation,
                    count = info.count,
                    page = info.current_page,
                    "list loaded"
                );
                inner.tx.send_modify(|s| {
                    s.status = LoadStatus::Loaded;
                    s.items = page.results;
                    s.pagination = Some(info);
                    s.error = None;
                });
            }
            Err(e) => {
                warn!(source = inner.source.name(), generation, error = %e, "list fetch failed");
                shared.total_pages = None;
                let message = humanize_error(&e).message;
                inner.tx.send_modify(|s| {
                    s.status = LoadStatus::Errored;
                    s.items.clear();
                    s.pagination = None;
                    s.error = Some(message);
                });
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::atomic::AtomicBool;

    use async_trait::async_trait;
    use fimdash_core::error::Result;
    use fimdash_core::{PageResult, Row};
    use tokio::time::sleep;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: String,
    }

    impl Row for Item {
        fn id(&self) -> &str {
            &self.id
        }
    }

    /// Records every query; answers with one row naming the call number.
    #[derive(Default)]
    struct MockSource {
        calls: Mutex<Vec<ListQuery>>,
        delays: Mutex<VecDeque<Duration>>,
        fail: AtomicBool,
        total_pages: u32,
    }

    impl MockSource {
        fn with_pages(total_pages: u32) -> Self {
            Self {
                total_pages,
                ..Default::default()
            }
        }
    }

    #[async_trait]
    impl ListSource for Arc<MockSource> {
        type Row = Item;

        fn name(&self) -> &'static str {
            "mock"
        }

        async fn fetch(&self, query: &ListQuery) -> Result<PageResult<Item>> {
            let call = {
                let mut calls = self.calls.lock().unwrap();
                calls.push(query.clone());
                calls.len()
            };
            let delay = self.delays.lock().unwrap().pop_front().unwrap_or_default();
            sleep(delay).await;
            if self.fail.load(Ordering::SeqCst) {
                return Err(FimError::Api {
                    status: 500,
                    message: "boom".into(),
                });
            }
            Ok(PageResult {
                results: vec![Item {
                    id: format!("call{call}"),
                }],
                count: u64::from(self.total_pages) * 10,
                total_pages: self.total_pages,
                current_page: query.page,
            })
        }
    }

    fn controller(
        source: &Arc<MockSource>,
        filter_mode: FilterMode,
    ) -> ListController<Arc<MockSource>> {
        let options = ControllerOptions {
            debounce: Duration::from_millis(500),
            request_timeout: Duration::from_secs(15),
            filter_mode,
        };
        ListController::new(Arc::clone(source), options)
    }

    fn calls(source: &MockSource) -> Vec<ListQuery> {
        source.calls.lock().unwrap().clone()
    }

    #[tokio::test(start_paused = true)]
    async fn debounce_collapses_typing() {
        let source = Arc::new(MockSource::with_pages(1));
        let ctl = controller(&source, FilterMode::Live);

        ctl.set_search_text("a");
        sleep(Duration::from_millis(100)).await;
        ctl.set_search_text("ab");
        sleep(Duration::from_millis(100)).await;
        ctl.set_search_text("abc");
        sleep(Duration::from_millis(400)).await;
        assert!(calls(&source).is_empty());

        sleep(Duration::from_millis(200)).await;
        let calls = calls(&source);
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].search, "abc");

        let state = ctl.snapshot();
        assert_eq!(state.status, LoadStatus::Loaded);
        assert_eq!(state.items[0].id, "call1");
    }

    #[tokio::test(start_paused = true)]
    async fn stale_response_is_discarded() {
        let source = Arc::new(MockSource::with_pages(2));
        source
            .delays
            .lock()
            .unwrap()
            .extend([Duration::from_millis(1000), Duration::from_millis(10)]);
        let ctl = controller(&source, FilterMode::Live);

        ctl.refresh();
        sleep(Duration::from_millis(1)).await;
        ctl.refresh();

        sleep(Duration::from_millis(50)).await;
        assert_eq!(ctl.snapshot().items[0].id, "call2");

        // The slow first response lands now and must not overwrite call2.
        sleep(Duration::from_millis(1500)).await;
        let state = ctl.snapshot();
        assert_eq!(state.items[0].id, "call2");
        assert_eq!(state.status, LoadStatus::Loaded);
        assert_eq!(calls(&source).len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn slow_page_fetch_loses_to_newer_search() {
        let source = Arc::new(MockSource::with_pages(3));
        source.delays.lock().unwrap().extend([
            Duration::ZERO,
            Duration::from_millis(2000),
            Duration::from_millis(10),
        ]);
        let ctl = controller(&source, FilterMode::Live);
        ctl.refresh();
        sleep(Duration::from_millis(1)).await;

        // Page 2 of the empty search is slow to answer...
        assert!(ctl.set_page(2));
        sleep(Duration::from_millis(100)).await;
        // ...and the operator searches meanwhile.
        ctl.set_search_text("wp-config");
        sleep(Duration::from_millis(600)).await;

        let state = ctl.snapshot();
        assert_eq!(state.status, LoadStatus::Loaded);
        assert_eq!(state.items[0].id, "call3");
        assert_eq!(state.query.search, "wp-config");
        assert_eq!(state.query.page, 1);

        // The page-2 answer for the old search arrives last.
        sleep(Duration::from_millis(2000)).await;
        let state = ctl.snapshot();
        assert_eq!(calls(&source).len(), 3);
        assert_eq!(state.items[0].id, "call3");
        assert_eq!(state.pagination.unwrap().current_page, 1);
        assert_eq!((state.query.page, state.query.search.as_str()), (1, "wp-config"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn woken_debounce_yields_to_immediate_fetch() {
        let source = Arc::new(MockSource::with_pages(1));
        let ctl = ListController::new(
            Arc::clone(&source),
            ControllerOptions {
                debounce: Duration::from_millis(20),
                request_timeout: Duration::from_secs(15),
                filter_mode: FilterMode::Live,
            },
        );

        ctl.set_search_text("a");
        {
            // Hold the lock past the debounce so its task is already waiting
            // on it when the immediate fetch cancels it.
            let mut shared = ctl.lock();
            std::thread::sleep(Duration::from_millis(150));
            ctl.fetch_now(&mut shared);
        }
        sleep(Duration::from_millis(200)).await;

        let calls = calls(&source);
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].search, "a");
    }

    #[tokio::test(start_paused = true)]
    async fn out_of_range_pages_are_ignored() {
        let source = Arc::new(MockSource::with_pages(3));
        let ctl = controller(&source, FilterMode::Live);

        // Unknown page count behaves as a single page.
        assert!(!ctl.set_page(2));
        assert!(ctl.set_page(1));
        sleep(Duration::from_millis(10)).await;
        assert_eq!(calls(&source).len(), 1);

        assert!(!ctl.set_page(0));
        assert!(!ctl.set_page(4));
        sleep(Duration::from_millis(10)).await;
        assert_eq!(calls(&source).len(), 1);
        assert_eq!(ctl.snapshot().query.page, 1);

        assert!(ctl.set_page(3));
        sleep(Duration::from_millis(10)).await;
        assert_eq!(calls(&source).last().unwrap().page, 3);
        assert_eq!(ctl.snapshot().pagination.unwrap().current_page, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn search_returns_to_first_page() {
        let source = Arc::new(MockSource::with_pages(5));
        let ctl = controller(&source, FilterMode::Live);
        ctl.refresh();
        sleep(Duration::from_millis(10)).await;
        assert!(ctl.set_page(4));
        sleep(Duration::from_millis(10)).await;

        ctl.set_search_text("index.php");
        assert_eq!(ctl.snapshot().query.page, 1);
        sleep(Duration::from_millis(600)).await;
        let last = calls(&source).pop().unwrap();
        assert_eq!((last.page, last.search.as_str()), (1, "index.php"));
    }

    #[tokio::test(start_paused = true)]
    async fn page_change_cancels_pending_debounce() {
        let source = Arc::new(MockSource::with_pages(1));
        let ctl = controller(&source, FilterMode::Live);

        ctl.set_search_text("a");
        assert!(ctl.set_page(1));
        sleep(Duration::from_millis(1000)).await;

        let calls = calls(&source);
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].search, "a");
    }

    #[tokio::test(start_paused = true)]
    async fn live_filter_debounces() {
        let source = Arc::new(MockSource::with_pages(1));
        let ctl = controller(&source, FilterMode::Live);

        ctl.set_filter("status", "bahaya");
        sleep(Duration::from_millis(100)).await;
        ctl.set_filter("status", "normal");
        sleep(Duration::from_millis(600)).await;

        let calls = calls(&source);
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].filter("status"), Some("normal"));
    }

    #[tokio::test(start_paused = true)]
    async fn deferred_filters_wait_for_apply() {
        let source = Arc::new(MockSource::with_pages(1));
        let ctl = controller(&source, FilterMode::Deferred);

        ctl.set_filter("category", "Login");
        ctl.set_filter("user", "admin");
        sleep(Duration::from_millis(1000)).await;
        assert!(calls(&source).is_empty());
        assert_eq!(ctl.snapshot().draft_filters.len(), 2);

        ctl.apply_filters();
        sleep(Duration::from_millis(1)).await;
        let applied = calls(&source);
        assert_eq!(applied.len(), 1);
        assert_eq!(applied[0].filter("category"), Some("Login"));
        assert_eq!(applied[0].page, 1);

        ctl.reset_filters();
        assert!(ctl.snapshot().draft_filters.is_empty());
        sleep(Duration::from_millis(100)).await;
        assert_eq!(calls(&source).len(), 1);
        sleep(Duration::from_millis(500)).await;
        let after = calls(&source);
        assert_eq!(after.len(), 2);
        assert!(after[1].filters.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn failure_clears_rows_and_pagination() {
        let source = Arc::new(MockSource::with_pages(2));
        let ctl = controller(&source, FilterMode::Live);
        ctl.refresh();
        sleep(Duration::from_millis(10)).await;
        assert_eq!(ctl.snapshot().items.len(), 1);

        source.fail.store(true, Ordering::SeqCst);
        ctl.refresh();
        sleep(Duration::from_millis(10)).await;
        let state = ctl.snapshot();
        assert_eq!(state.status, LoadStatus::Errored);
        assert!(state.items.is_empty());
        assert!(state.pagination.is_none());
        assert_eq!(state.error.as_deref(), Some("boom"));

        // Page count is unknown again after a failure.
        assert!(!ctl.set_page(2));
    }

    #[tokio::test(start_paused = true)]
    async fn slow_backend_times_out() {
        let source = Arc::new(MockSource::with_pages(1));
        source
            .delays
            .lock()
            .unwrap()
            .push_back(Duration::from_secs(60));
        let ctl = controller(&source, FilterMode::Live);

        ctl.refresh();
        sleep(Duration::from_secs(16)).await;
        let state = ctl.snapshot();
        assert_eq!(state.status, LoadStatus::Errored);
        assert!(state.error.unwrap().contains("15"));
    }

    #[tokio::test(start_paused = true)]
    async fn reset_restores_default_query() {
        let source = Arc::new(MockSource::with_pages(3));
        let ctl = controller(&source, FilterMode::Live);
        ctl.set_search_text("x");
        ctl.set_filter("status", "bahaya");
        ctl.reset();
        sleep(Duration::from_millis(1000)).await;

        let calls = calls(&source);
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], ListQuery::default());
    }

    #[tokio::test(start_paused = true)]
    async fn subscribers_see_loading_then_loaded() {
        let source = Arc::new(MockSource::with_pages(1));
        source
            .delays
            .lock()
            .unwrap()
            .push_back(Duration::from_millis(100));
        let ctl = controller(&source, FilterMode::Live);
        let mut rx = ctl.subscribe();
        assert_eq!(rx.borrow().status, LoadStatus::Idle);

        ctl.refresh();
        assert!(rx.borrow_and_update().is_loading());
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().status, LoadStatus::Loaded);
    }
}
