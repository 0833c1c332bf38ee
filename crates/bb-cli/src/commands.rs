use crate::{
    customer_commands::CustomerCommands, report_commands::ReportCommands,
    sales_commands::SalesCommands, subscription_commands::SubscriptionCommands,
};

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Log in and persist the session
    Login {
        #[arg(long)]
        email: String,

        /// Password (prefer the BB_PASSWORD environment variable)
        #[arg(long, env = "BB_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// End the session, even if the server is unreachable
    Logout,

    /// Show the persisted session
    Whoami,

    /// Change the account password
    ChangePassword {
        #[arg(long = "old")]
        old_password: String,

        #[arg(long = "new")]
        new_password: String,

        #[arg(long = "confirm")]
        confirm_password: String,
    },

    /// Customer operations
    Customers {
        #[command(subcommand)]
        action: CustomerCommands,
    },

    /// Subscription operations
    Subscriptions {
        #[command(subcommand)]
        action: SubscriptionCommands,
    },

    /// Sales performance
    Sales {
        #[command(subcommand)]
        action: SalesCommands,
    },

    /// Revenue and distribution reports
    Reports {
        #[command(subcommand)]
        action: ReportCommands,
    },

    /// KPI overview
    Dashboard {
        /// Keep refreshing at the configured interval until Ctrl-C
        #[arg(long)]
        watch: bool,
    },
}
