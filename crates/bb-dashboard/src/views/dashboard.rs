use crate::{RefreshHandle, RequestSequence, ViewState};

use bb_api::{Api, DEFAULT_GROWTH_DAYS, ReportService};
use bb_core::{ChartData, CustomerGrowthData, DashboardKpis};

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Local};
use log::{debug, warn};
use tokio::sync::watch;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub kpis: DashboardKpis,
    pub customer_growth: Vec<CustomerGrowthData>,
    pub subscription_distribution: Vec<ChartData>,
    pub business_type_distribution: Vec<ChartData>,
    pub last_updated: DateTime<Local>,
}

/// KPI cards and charts of the landing page
pub struct DashboardView {
    reports: ReportService,
    state_tx: watch::Sender<ViewState<DashboardData>>,
    state_rx: watch::Receiver<ViewState<DashboardData>>,
    sequence: RequestSequence,
}

impl DashboardView {
    pub fn new(reports: ReportService) -> Self {
        let (state_tx, state_rx) = watch::channel(ViewState::Loading);

        Self {
            reports,
            state_tx,
            state_rx,
            sequence: RequestSequence::new(),
        }
    }

    pub fn for_api(api: &Api) -> Self {
        Self::new(api.reports())
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState<DashboardData>> {
        self.state_rx.clone()
    }

    pub fn snapshot(&self) -> ViewState<DashboardData> {
        self.state_rx.borrow().clone()
    }

    /// KPIs on screen; all zero unless the last load succeeded
    pub fn kpis(&self) -> DashboardKpis {
        self.state_rx
            .borrow()
            .data()
            .map(|data| data.kpis.clone())
            .unwrap_or_default()
    }

    /// Load everything at once; the distributions never fail the page
    pub async fn refresh(&self) {
        let ticket = self.sequence.next();
        let _ = self.state_tx.send(ViewState::Loading);

        let (kpis, growth, subscriptions, business_types) = tokio::join!(
            self.reports.dashboard_kpis(),
            self.reports.customer_growth(DEFAULT_GROWTH_DAYS),
            self.reports.subscription_distribution(),
            self.reports.business_type_distribution(),
        );

        let state = match (kpis, growth) {
            (Ok(kpis), Ok(customer_growth)) => ViewState::Populated(DashboardData {
                kpis,
                customer_growth,
                subscription_distribution: subscriptions.into_inner(),
                business_type_distribution: business_types.into_inner(),
                last_updated: Local::now(),
            }),
            (Err(e), _) | (_, Err(e)) => {
                warn!("Dashboard load failed: {}", e.user_message());
                ViewState::Error(e.user_message())
            }
        };

        if !self.sequence.is_current(ticket) {
            debug!("Discarding stale dashboard response");
            return;
        }

        let _ = self.state_tx.send(state);
    }

    /// Reload every `period` until the returned handle is dropped
    pub fn start_auto_refresh(self: &Arc<Self>, period: Duration) -> RefreshHandle {
        debug!("Dashboard auto refresh every {:?}", period);
        let view = Arc::downgrade(self);

        RefreshHandle::spawn(period, move || {
            let view = view.clone();
            async move {
                if let Some(view) = view.upgrade() {
                    view.refresh().await;
                }
            }
        })
    }
}
