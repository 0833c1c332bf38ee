use bb_api::{DEFAULT_GROWTH_DAYS, DEFAULT_TREND_MONTHS};

use clap::Subcommand;

#[derive(Subcommand)]
pub enum ReportCommands {
    /// Revenue, plan distribution and revenue trend together
    Summary,

    /// Dashboard KPI counters
    Dashboard,

    /// Revenue for the current month
    Revenue,

    /// Subscribers and revenue per plan
    Plans,

    /// New customers per day
    Growth {
        #[arg(long, default_value_t = DEFAULT_GROWTH_DAYS)]
        days: u32,
    },

    /// Revenue per month
    Trend {
        #[arg(long, default_value_t = DEFAULT_TREND_MONTHS)]
        months: u32,
    },
}
