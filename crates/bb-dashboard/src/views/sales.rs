use crate::{RequestSequence, ViewState};

use bb_api::{Api, Required, SalesService};
use bb_core::{CoreResult, SalesFilters, SalesPerformance, write_csv};

use std::path::{Path, PathBuf};

use chrono::Local;
use log::debug;
use tokio::sync::{Mutex, watch};

const EXPORT_STEM: &str = "sales_performance";

/// Column sums shown under the sales table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesTotals {
    pub customers_onboarded: u64,
    pub revenue_generated: f64,
    pub kirana_count: u64,
    pub restaurant_count: u64,
    pub active_count: u64,
    pub expired_count: u64,
}

impl SalesTotals {
    pub fn of(rows: &[SalesPerformance]) -> Self {
        rows.iter().fold(Self::default(), |mut acc, row| {
            acc.customers_onboarded += row.customers_onboarded;
            acc.revenue_generated += row.revenue_generated;
            acc.kirana_count += row.kirana_count;
            acc.restaurant_count += row.restaurant_count;
            acc.active_count += row.active_count;
            acc.expired_count += row.expired_count;
            acc
        })
    }
}

/// Sales performance per salesperson; filter-driven, not paginated
pub struct SalesPage {
    service: SalesService,
    filters: Mutex<SalesFilters>,
    state_tx: watch::Sender<ViewState<Vec<SalesPerformance>>>,
    state_rx: watch::Receiver<ViewState<Vec<SalesPerformance>>>,
    sequence: RequestSequence,
}

impl SalesPage {
    pub fn new(service: SalesService) -> Self {
        let (state_tx, state_rx) = watch::channel(ViewState::Loading);

        Self {
            service,
            filters: Mutex::new(SalesFilters::default()),
            state_tx,
            state_rx,
            sequence: RequestSequence::new(),
        }
    }

    pub fn for_api(api: &Api) -> Self {
        Self::new(api.sales())
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState<Vec<SalesPerformance>>> {
        self.state_rx.clone()
    }

    pub fn snapshot(&self) -> ViewState<Vec<SalesPerformance>> {
        self.state_rx.borrow().clone()
    }

    pub async fn filters(&self) -> SalesFilters {
        self.filters.lock().await.clone()
    }

    pub async fn refresh(&self) {
        let filters = self.filters().await;
        self.load(filters).await;
    }

    pub async fn update_filters<F>(&self, update: F)
    where
        F: FnOnce(&mut SalesFilters) + Send,
    {
        let filters = {
            let mut current = self.filters.lock().await;
            update(&mut current);
            current.clone()
        };
        self.load(filters).await;
    }

    async fn load(&self, filters: SalesFilters) {
        let ticket = self.sequence.next();
        let _ = self.state_tx.send(ViewState::Loading);

        let result = self.service.performance(&filters).await;

        if !self.sequence.is_current(ticket) {
            debug!("Discarding stale sales response");
            return;
        }

        let _ = self.state_tx.send(ViewState::from_rows(result));
    }

    pub fn totals(&self) -> SalesTotals {
        SalesTotals::of(self.state_rx.borrow().rows())
    }

    pub fn export_csv(&self, dir: &Path) -> CoreResult<Option<PathBuf>> {
        let rows = self.state_rx.borrow().rows().to_vec();
        write_csv(&rows, dir, EXPORT_STEM, Local::now())
    }

    /// Server-side export for the current filters
    pub async fn export_all(&self) -> Required<Vec<u8>> {
        let filters = self.filters().await;
        self.service.export(&filters).await
    }
}
