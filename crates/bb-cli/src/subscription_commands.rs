use crate::cli::parse_page_size;

use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum SubscriptionCommands {
    /// List one page of subscriptions
    List {
        /// Page number, starting at 1
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,

        /// Rows per page: 25, 50 or 100 (default from config)
        #[arg(long, value_parser = parse_page_size)]
        page_size: Option<u32>,

        /// ACTIVE, EXPIRING_SOON or EXPIRED
        #[arg(long)]
        status: Option<String>,

        #[arg(long)]
        search: Option<String>,
    },

    /// Get a subscription by ID
    Get { id: String },

    /// Available plans
    Plans,

    /// Download the server-side CSV export
    Export {
        #[arg(long)]
        out: PathBuf,

        #[arg(long)]
        status: Option<String>,
    },
}
