//! Paginated, filterable, searchable list backed by one API endpoint.

use crate::{Debouncer, RequestSequence, ViewState};

use bb_api::Required;
use bb_config::DashboardConfig;
use bb_core::{CoreResult, CsvRecord, Page, PageRequest, write_csv};

use std::path::{Path, PathBuf};
use std::sync::{Arc, Weak};

use async_trait::async_trait;
use chrono::Local;
use log::debug;
use tokio::sync::{Mutex, watch};

/// One paginated API listing
#[async_trait]
pub trait ListSource: Send + Sync + 'static {
    type Filters: Clone + Default + Send + Sync + 'static;
    type Row: CsvRecord + Clone + Send + Sync + 'static;

    /// File stem of client-side CSV exports
    const EXPORT_STEM: &'static str;

    async fn fetch(&self, filters: &Self::Filters, page: PageRequest)
    -> Required<Page<Self::Row>>;

    /// Store settled search text in the filters; blank clears the search
    fn set_search(filters: &mut Self::Filters, search: String);
}

/// Filters plus 0-based page position
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery<F> {
    pub filters: F,
    pub page: u32,
    pub page_size: u32,
}

impl<F: Default> ListQuery<F> {
    pub fn new(page_size: u32) -> Self {
        Self {
            filters: F::default(),
            page: 0,
            page_size,
        }
    }
}

impl<F> ListQuery<F> {
    /// The server counts pages from 1
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page + 1, self.page_size)
    }
}

pub struct ListPage<S: ListSource> {
    source: S,
    query: Mutex<ListQuery<S::Filters>>,
    state_tx: watch::Sender<ViewState<Page<S::Row>>>,
    state_rx: watch::Receiver<ViewState<Page<S::Row>>>,
    sequence: RequestSequence,
    search: Debouncer<String>,
}

impl<S: ListSource> ListPage<S> {
    pub fn new(source: S, config: &DashboardConfig) -> Arc<Self> {
        let page_size = config.default_page_size;
        let delay = config.search_debounce();

        Arc::new_cyclic(|weak: &Weak<Self>| {
            let weak = weak.clone();
            let search = Debouncer::new(delay, move |text: String| {
                let weak = weak.clone();
                async move {
                    if let Some(page) = weak.upgrade() {
                        page.apply_search(text).await;
                    }
                }
            });
            let (state_tx, state_rx) = watch::channel(ViewState::Loading);

            Self {
                source,
                query: Mutex::new(ListQuery::new(page_size)),
                state_tx,
                state_rx,
                sequence: RequestSequence::new(),
                search,
            }
        })
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState<Page<S::Row>>> {
        self.state_rx.clone()
    }

    pub fn snapshot(&self) -> ViewState<Page<S::Row>> {
        self.state_rx.borrow().clone()
    }

    pub async fn query(&self) -> ListQuery<S::Filters> {
        self.query.lock().await.clone()
    }

    /// Refetch with the current query
    pub async fn refresh(&self) {
        let query = self.query().await;
        self.load(query).await;
    }

    pub async fn set_page(&self, page: u32) {
        let query = {
            let mut current = self.query.lock().await;
            current.page = page;
            current.clone()
        };
        self.load(query).await;
    }

    pub async fn set_page_size(&self, page_size: u32) {
        let query = {
            let mut current = self.query.lock().await;
            current.page_size = page_size;
            current.page = 0;
            current.clone()
        };
        self.load(query).await;
    }

    /// Edit the filters, back to the first page, and refetch
    pub async fn update_filters<F>(&self, update: F)
    where
        F: FnOnce(&mut S::Filters) + Send,
    {
        let query = {
            let mut current = self.query.lock().await;
            update(&mut current.filters);
            current.page = 0;
            current.clone()
        };
        self.load(query).await;
    }

    /// Replace filters and position in one step, then refetch
    pub async fn set_query(&self, query: ListQuery<S::Filters>) {
        *self.query.lock().await = query.clone();
        self.load(query).await;
    }

    /// Feed one keystroke's worth of search text; applied after the quiet period
    pub fn search_input(&self, text: impl Into<String>) {
        self.search.push(text.into());
    }

    pub fn cancel_search(&self) {
        self.search.cancel();
    }

    async fn apply_search(&self, text: String) {
        debug!("Applying {} search", S::EXPORT_STEM);
        self.update_filters(|filters| S::set_search(filters, text))
            .await;
    }

    async fn load(&self, query: ListQuery<S::Filters>) {
        let ticket = self.sequence.next();
        let _ = self.state_tx.send(ViewState::Loading);

        let result = self
            .source
            .fetch(&query.filters, query.page_request())
            .await;

        if !self.sequence.is_current(ticket) {
            debug!(
                "Discarding stale {} response for page {}",
                S::EXPORT_STEM,
                query.page + 1
            );
            return;
        }

        let _ = self.state_tx.send(ViewState::from_page(result));
    }

    /// Rows of the page currently shown
    pub fn loaded_rows(&self) -> Vec<S::Row> {
        self.state_rx.borrow().rows().to_vec()
    }

    /// Write the loaded page to a timestamped CSV in `dir`; `None` when nothing is loaded.
    pub fn export_csv(&self, dir: &Path) -> CoreResult<Option<PathBuf>> {
        let rows = self.loaded_rows();
        write_csv(&rows, dir, S::EXPORT_STEM, Local::now())
    }
}
