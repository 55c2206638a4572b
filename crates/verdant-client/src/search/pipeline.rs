//! Debounced, asynchronous driver for a [`SearchSession`].

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use verdant_commerce::catalog::ProductSuggestion;

use crate::runtime::{Debouncer, Runtime};
use crate::search::{SearchSession, SearchSnapshot, Settled, SuggestionRequest, SuggestionSource};

/// Called with a fresh snapshot after every state change.
pub type SnapshotObserver = Rc<dyn Fn(&SearchSnapshot)>;

/// Called with the listing URL when a search is submitted.
pub type Navigator = Rc<dyn Fn(&str)>;

/// Default quiet period before a query is evaluated.
const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Wires a session to a debounce timer and a suggestion source.
///
/// Handles are cheap to clone. When the last one is dropped the pending
/// debounce timer is cancelled and completions still in flight are ignored.
pub struct SearchPipeline<R: Runtime> {
    inner: Rc<PipelineInner<R>>,
}

impl<R: Runtime> Clone for SearchPipeline<R> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

struct PipelineInner<R: Runtime> {
    session: RefCell<SearchSession>,
    debouncer: RefCell<Debouncer<R>>,
    source: Rc<dyn SuggestionSource>,
    runtime: R,
    observer: Option<SnapshotObserver>,
    navigator: Option<Navigator>,
}

/// Builder for [`SearchPipeline`].
pub struct SearchPipelineBuilder<R: Runtime> {
    session: SearchSession,
    source: Rc<dyn SuggestionSource>,
    runtime: R,
    debounce: Duration,
    observer: Option<SnapshotObserver>,
    navigator: Option<Navigator>,
}

impl<R: Runtime> SearchPipelineBuilder<R> {
    pub fn debounce(mut self, delay: Duration) -> Self {
        self.debounce = delay;
        self
    }

    pub fn on_change(mut self, observer: impl Fn(&SearchSnapshot) + 'static) -> Self {
        self.observer = Some(Rc::new(observer));
        self
    }

    pub fn on_navigate(mut self, navigator: impl Fn(&str) + 'static) -> Self {
        self.navigator = Some(Rc::new(navigator));
        self
    }

    pub fn build(self) -> SearchPipeline<R> {
        SearchPipeline {
            inner: Rc::new(PipelineInner {
                session: RefCell::new(self.session),
                debouncer: RefCell::new(Debouncer::new(self.runtime.clone(), self.debounce)),
                source: self.source,
                runtime: self.runtime,
                observer: self.observer,
                navigator: self.navigator,
            }),
        }
    }
}

impl<R: Runtime> SearchPipeline<R> {
    pub fn builder(
        session: SearchSession,
        source: Rc<dyn SuggestionSource>,
        runtime: R,
    ) -> SearchPipelineBuilder<R> {
        SearchPipelineBuilder {
            session,
            source,
            runtime,
            debounce: DEFAULT_DEBOUNCE,
            observer: None,
            navigator: None,
        }
    }

    pub fn snapshot(&self) -> SearchSnapshot {
        self.inner.session.borrow().snapshot()
    }

    /// Keystroke in the search input.
    pub fn input(&self, value: &str) {
        self.inner.input(value);
    }

    pub fn focus(&self) {
        self.inner.update(SearchSession::focus);
    }

    /// Click outside the widget.
    pub fn dismiss(&self) {
        self.inner.update(SearchSession::dismiss);
    }

    /// Clear button.
    pub fn clear(&self) {
        self.inner.debouncer.borrow_mut().cancel();
        self.inner.update(SearchSession::clear);
    }

    pub fn clear_recent(&self) {
        self.inner.update(SearchSession::clear_recent);
    }

    /// Submit `query` and navigate to the listing page.
    pub fn submit(&self, query: &str) -> Option<String> {
        self.inner.navigate_with(|session| session.submit(query))
    }

    pub fn select_suggestion(&self, suggestion: &ProductSuggestion) -> Option<String> {
        self.inner
            .navigate_with(|session| session.select_suggestion(suggestion))
    }

    pub fn select_recent(&self, query: &str) -> Option<String> {
        self.inner.navigate_with(|session| session.select_recent(query))
    }

    /// "View all results" for the current query.
    pub fn view_all(&self) -> Option<String> {
        self.inner.navigate_with(SearchSession::view_all)
    }
}

impl<R: Runtime> PipelineInner<R> {
    fn input(self: &Rc<Self>, value: &str) {
        let generation = self.session.borrow_mut().input(value);

        let weak = Rc::downgrade(self);
        self.debouncer.borrow_mut().call(move || {
            if let Some(inner) = weak.upgrade() {
                inner.settle(generation);
            }
        });

        self.notify();
    }

    fn settle(self: &Rc<Self>, generation: u64) {
        let settled = self.session.borrow_mut().settle(generation);
        match settled {
            Settled::Stale => return,
            Settled::Cleared => {}
            Settled::Evaluate(request) => self.evaluate(request),
        }
        self.notify();
    }

    fn evaluate(self: &Rc<Self>, request: SuggestionRequest) {
        let weak: Weak<Self> = Rc::downgrade(self);
        let source = self.source.clone();

        self.runtime.spawn(Box::pin(async move {
            let result = source.suggest(&request.query, request.limit).await;

            let Some(inner) = weak.upgrade() else {
                return;
            };
            let applied = match result {
                Ok(suggestions) => inner.session.borrow_mut().complete(request.id, suggestions),
                Err(e) => {
                    tracing::warn!(query = %request.query, error = %e, "suggestion lookup failed");
                    inner.session.borrow_mut().fail(request.id)
                }
            };
            if applied {
                inner.notify();
            }
        }));
    }

    fn update(&self, f: impl FnOnce(&mut SearchSession)) {
        f(&mut self.session.borrow_mut());
        self.notify();
    }

    fn navigate_with(&self, f: impl FnOnce(&mut SearchSession) -> Option<String>) -> Option<String> {
        self.debouncer.borrow_mut().cancel();
        let url = f(&mut self.session.borrow_mut());
        self.notify();

        if let (Some(url), Some(navigator)) = (&url, &self.navigator) {
            navigator(url);
        }
        url
    }

    fn notify(&self) {
        if let Some(observer) = &self.observer {
            let snapshot = self.session.borrow().snapshot();
            observer(&snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchConfig;
    use crate::error::ClientError;
    use crate::runtime::TokioRuntime;
    use crate::search::remote::testing::serve_once;
    use crate::search::{filter_catalog, PanelControl, RemoteSuggestions, SearchPhase};
    use async_trait::async_trait;
    use std::cell::Cell;
    use tokio::task::LocalSet;
    use tokio::time::sleep;
    use verdant_cache::{Cache, MemoryStore};

    fn suggestion(name: &str, category: &str) -> ProductSuggestion {
        ProductSuggestion {
            id: name.into(),
            name: name.to_string(),
            slug: String::new(),
            price: 300.0,
            sale_price: None,
            image: None,
            category: Some(category.to_string()),
            rating: None,
            is_best_seller: None,
        }
    }

    /// Catalog source that records every query and can delay per query.
    #[derive(Default)]
    struct RecordingSource {
        queries: RefCell<Vec<String>>,
        slow_query: Option<(&'static str, Duration)>,
    }

    #[async_trait(?Send)]
    impl SuggestionSource for RecordingSource {
        async fn suggest(&self, query: &str, limit: usize) -> Result<Vec<ProductSuggestion>, ClientError> {
            self.queries.borrow_mut().push(query.to_string());
            if let Some((slow, delay)) = self.slow_query {
                if slow == query {
                    sleep(delay).await;
                }
            }
            let catalog = [
                suggestion("Olive Oil", "Oils"),
                suggestion("Green Tea", "Teas"),
                suggestion("Clove Oil", "Oils"),
                suggestion("Teapot", "Kitchen"),
            ];
            Ok(filter_catalog(&catalog, query, limit))
        }
    }

    fn session() -> SearchSession {
        SearchSession::new(
            &SearchConfig::default(),
            Cache::new(MemoryStore::new()),
            PanelControl::internal(),
        )
    }

    fn names(snapshot: &SearchSnapshot) -> Vec<String> {
        snapshot.suggestions.iter().map(|s| s.name.clone()).collect()
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_keystrokes_evaluate_once() {
        LocalSet::new()
            .run_until(async {
                let source = Rc::new(RecordingSource::default());
                let pipeline = SearchPipeline::builder(session(), source.clone(), TokioRuntime).build();

                for value in ["o", "oi", "oil"] {
                    pipeline.input(value);
                    sleep(Duration::from_millis(100)).await;
                }
                assert!(source.queries.borrow().is_empty());
                assert_eq!(pipeline.snapshot().phase, SearchPhase::Typing);

                sleep(Duration::from_millis(400)).await;
                assert_eq!(*source.queries.borrow(), ["oil"]);

                let snapshot = pipeline.snapshot();
                assert_eq!(snapshot.debounced_query, "oil");
                assert_eq!(names(&snapshot), ["Olive Oil", "Clove Oil"]);
                assert!(snapshot.is_open);
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_response_is_discarded() {
        LocalSet::new()
            .run_until(async {
                let source = Rc::new(RecordingSource {
                    slow_query: Some(("o", Duration::from_secs(2))),
                    ..Default::default()
                });
                let pipeline = SearchPipeline::builder(session(), source.clone(), TokioRuntime).build();

                pipeline.input("o");
                sleep(Duration::from_millis(350)).await;
                assert!(pipeline.snapshot().is_loading);

                pipeline.input("oil");
                sleep(Duration::from_millis(350)).await;
                assert_eq!(names(&pipeline.snapshot()), ["Olive Oil", "Clove Oil"]);

                // The slow "o" lookup would also match "Teapot".
                sleep(Duration::from_secs(3)).await;
                assert_eq!(*source.queries.borrow(), ["o", "oil"]);
                assert_eq!(pipeline.snapshot().debounced_query, "oil");
                assert_eq!(names(&pipeline.snapshot()), ["Olive Oil", "Clove Oil"]);
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_clear_cancels_pending_debounce() {
        LocalSet::new()
            .run_until(async {
                let source = Rc::new(RecordingSource::default());
                let pipeline = SearchPipeline::builder(session(), source.clone(), TokioRuntime).build();

                pipeline.input("oil");
                pipeline.clear();
                sleep(Duration::from_secs(1)).await;

                assert!(source.queries.borrow().is_empty());
                let snapshot = pipeline.snapshot();
                assert_eq!(snapshot.raw_query, "");
                assert!(!snapshot.is_open);
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_pending_debounce() {
        LocalSet::new()
            .run_until(async {
                let source = Rc::new(RecordingSource::default());
                let pipeline = SearchPipeline::builder(session(), source.clone(), TokioRuntime).build();

                pipeline.input("oil");
                drop(pipeline);
                sleep(Duration::from_secs(1)).await;

                assert!(source.queries.borrow().is_empty());
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_navigates_and_notifies() {
        LocalSet::new()
            .run_until(async {
                let visited = Rc::new(RefCell::new(Vec::new()));
                let notifications = Rc::new(Cell::new(0));

                let pipeline = SearchPipeline::builder(
                    session(),
                    Rc::new(RecordingSource::default()),
                    TokioRuntime,
                )
                .debounce(Duration::from_millis(150))
                .on_change({
                    let notifications = notifications.clone();
                    move |_| notifications.set(notifications.get() + 1)
                })
                .on_navigate({
                    let visited = visited.clone();
                    move |url| visited.borrow_mut().push(url.to_string())
                })
                .build();

                pipeline.input("green tea");
                assert_eq!(pipeline.submit("green tea").as_deref(), Some("/shop?search=green%20tea"));
                assert_eq!(pipeline.submit("  "), None);

                sleep(Duration::from_secs(1)).await;
                assert_eq!(*visited.borrow(), ["/shop?search=green%20tea"]);
                assert_eq!(pipeline.snapshot().recent, ["green tea"]);
                assert!(notifications.get() >= 2);
            })
            .await;
    }

    fn slow_oil() -> Rc<RecordingSource> {
        Rc::new(RecordingSource {
            slow_query: Some(("oil", Duration::from_secs(2))),
            ..Default::default()
        })
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_while_loading_keeps_panel_closed() {
        LocalSet::new()
            .run_until(async {
                let source = slow_oil();
                let pipeline = SearchPipeline::builder(session(), source.clone(), TokioRuntime).build();

                pipeline.input("oil");
                sleep(Duration::from_millis(350)).await;
                assert!(pipeline.snapshot().is_loading);

                pipeline.submit("oil");
                assert!(!pipeline.snapshot().is_open);

                sleep(Duration::from_secs(3)).await;
                assert_eq!(*source.queries.borrow(), ["oil"]);
                let snapshot = pipeline.snapshot();
                assert!(!snapshot.is_open);
                assert!(!snapshot.is_loading);
                assert!(snapshot.suggestions.is_empty());
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_select_suggestion_while_loading_keeps_panel_closed() {
        LocalSet::new()
            .run_until(async {
                let pipeline = SearchPipeline::builder(session(), slow_oil(), TokioRuntime).build();

                pipeline.input("oil");
                sleep(Duration::from_millis(350)).await;
                assert!(pipeline.snapshot().is_loading);

                let url = pipeline.select_suggestion(&suggestion("Clove Oil", "Oils"));
                assert_eq!(url.as_deref(), Some("/shop?search=Clove%20Oil"));

                sleep(Duration::from_secs(3)).await;
                let snapshot = pipeline.snapshot();
                assert!(!snapshot.is_open);
                assert_eq!(snapshot.raw_query, "Clove Oil");
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_view_all_while_loading_keeps_panel_closed() {
        LocalSet::new()
            .run_until(async {
                let pipeline = SearchPipeline::builder(session(), slow_oil(), TokioRuntime).build();

                pipeline.input("oil");
                sleep(Duration::from_millis(350)).await;
                assert_eq!(pipeline.view_all().as_deref(), Some("/shop?search=oil"));

                sleep(Duration::from_secs(3)).await;
                let snapshot = pipeline.snapshot();
                assert!(!snapshot.is_open);
                assert!(snapshot.recent.is_empty());
            })
            .await;
    }

    #[tokio::test]
    async fn test_remote_server_error_yields_no_suggestions() {
        LocalSet::new()
            .run_until(async {
                let (base, server) = serve_once("500 Internal Server Error", "{}").await;
                let remote = RemoteSuggestions::new(&base, &SearchConfig::default()).unwrap();

                let pipeline = SearchPipeline::builder(session(), Rc::new(remote), TokioRuntime)
                    .debounce(Duration::from_millis(10))
                    .build();

                pipeline.input("tea");
                server.await.unwrap();

                let mut snapshot = pipeline.snapshot();
                for _ in 0..200 {
                    if snapshot.debounced_query == "tea" && !snapshot.is_loading {
                        break;
                    }
                    sleep(Duration::from_millis(10)).await;
                    snapshot = pipeline.snapshot();
                }

                assert!(!snapshot.is_loading);
                assert!(snapshot.suggestions.is_empty());
                assert_eq!(snapshot.phase, SearchPhase::ShowingEmpty);
            })
            .await;
    }
}
