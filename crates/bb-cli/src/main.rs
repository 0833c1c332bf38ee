//! bb - BillBharat owner dashboard CLI
//!
//! # Examples
//!
//! ```bash
//! # Log in once; the session is kept under ~/.billbharat
//! BB_PASSWORD=... bb login --email owner@example.com
//!
//! # Second page of active customers in Pune, also saved as CSV
//! bb --pretty --csv ./out customers list --page 2 --status ACTIVE --city Pune
//!
//! # KPIs, refreshed until Ctrl-C
//! bb dashboard --watch
//! ```

use bb_cli::{App, Cli, CliResult, logger, output};
use bb_config::Config;

use std::process::ExitCode;

use clap::Parser;
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let pretty = cli.pretty;

    match run(cli).await.and_then(|value| output::print(&value, pretty)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<Value> {
    let config = Config::load()?;
    config.validate()?;

    // Relative log files live next to config.toml
    let log_file = match config.logging.file {
        Some(ref file) => Some(Config::config_dir()?.join(file)),
        None => None,
    };
    logger::initialize(config.logging.level, log_file, config.logging.colored)?;
    config.log_summary();

    let app = App::bootstrap(config)?;
    app.run(cli).await
}
