use crate::cli::parse_page_size;

use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum CustomerCommands {
    /// List one page of customers
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

        /// KIRANA or RESTAURANT
        #[arg(long)]
        business_type: Option<String>,

        #[arg(long)]
        plan: Option<String>,

        /// Repeat to match any of several cities
        #[arg(long)]
        city: Vec<String>,

        /// Repeat to match any of several talukas
        #[arg(long)]
        taluka: Vec<String>,

        /// Shop name, owner name or mobile number
        #[arg(long)]
        search: Option<String>,
    },

    /// Get a customer by ID
    Get { id: String },

    /// Cities available as filters
    Cities,

    /// Talukas available as filters
    Talukas,

    /// Download the server-side CSV export
    Export {
        #[arg(long)]
        out: PathBuf,

        #[arg(long)]
        status: Option<String>,
    },
}
