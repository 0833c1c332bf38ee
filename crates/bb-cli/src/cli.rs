use crate::commands::Commands;

use bb_core::PAGE_SIZE_OPTIONS;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "bb")]
#[command(about = "BillBharat owner dashboard CLI")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Also write the loaded rows of list commands as CSV into this directory
    #[arg(long, global = true, value_name = "DIR")]
    pub csv: Option<PathBuf>,
}

/// Accept only the page sizes the list views offer
pub fn parse_page_size(value: &str) -> Result<u32, String> {
    let size: u32 = value
        .parse()
        .map_err(|_| format!("`{value}` is not a number"))?;

    if PAGE_SIZE_OPTIONS.contains(&size) {
        Ok(size)
    } else {
        Err(format!("page size must be one of {:?}", PAGE_SIZE_OPTIONS))
    }
}
