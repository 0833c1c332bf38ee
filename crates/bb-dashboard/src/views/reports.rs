use crate::{RequestSequence, ViewState};

use bb_api::{Api, DEFAULT_TREND_MONTHS, ReportService};
use bb_core::{ChartData, PlanDistribution, RevenueReport};

use log::{debug, warn};
use tokio::sync::watch;

#[derive(Debug, Clone, PartialEq)]
pub struct ReportsData {
    pub revenue: RevenueReport,
    pub plan_distribution: Vec<PlanDistribution>,
    /// Empty when the trend endpoint is unavailable
    pub revenue_trend: Vec<ChartData>,
}

pub struct ReportsView {
    reports: ReportService,
    state_tx: watch::Sender<ViewState<ReportsData>>,
    state_rx: watch::Receiver<ViewState<ReportsData>>,
    sequence: RequestSequence,
}

impl ReportsView {
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

    pub fn subscribe(&self) -> watch::Receiver<ViewState<ReportsData>> {
        self.state_rx.clone()
    }

    pub fn snapshot(&self) -> ViewState<ReportsData> {
        self.state_rx.borrow().clone()
    }

    pub async fn refresh(&self) {
        let ticket = self.sequence.next();
        let _ = self.state_tx.send(ViewState::Loading);

        let (revenue, plan_distribution, revenue_trend) = tokio::join!(
            self.reports.revenue(),
            self.reports.plan_distribution(),
            self.reports.revenue_trend(DEFAULT_TREND_MONTHS),
        );

        let state = match (revenue, plan_distribution) {
            (Ok(revenue), Ok(plan_distribution)) => ViewState::Populated(ReportsData {
                revenue,
                plan_distribution,
                revenue_trend: revenue_trend.into_inner(),
            }),
            (Err(e), _) | (_, Err(e)) => {
                warn!("Reports load failed: {}", e.user_message());
                ViewState::Error(e.user_message())
            }
        };

        if !self.sequence.is_current(ticket) {
            debug!("Discarding stale reports response");
            return;
        }

        let _ = self.state_tx.send(state);
    }
}
