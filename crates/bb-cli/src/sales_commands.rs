use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Shared sales filters; dates as YYYY-MM-DD
#[derive(Args, Debug, Clone, Default)]
pub struct SalesFilterArgs {
    #[arg(long)]
    pub start_date: Option<String>,

    #[arg(long)]
    pub end_date: Option<String>,

    #[arg(long)]
    pub city: Option<String>,

    #[arg(long)]
    pub district: Option<String>,
}

#[derive(Subcommand)]
pub enum SalesCommands {
    /// Per-salesperson performance with totals
    Performance {
        #[command(flatten)]
        filters: SalesFilterArgs,
    },

    /// Download the server-side CSV export
    Export {
        #[arg(long)]
        out: PathBuf,

        #[command(flatten)]
        filters: SalesFilterArgs,
    },
}
