//! bb-cli library
//!
//! Command definitions, output shapes and the composition root behind the `bb` binary.

pub mod app;
pub mod cli;
pub mod commands;
pub mod customer_commands;
pub mod error;
pub mod logger;
pub mod output;
pub mod report_commands;
pub mod sales_commands;
pub mod subscription_commands;

#[cfg(test)]
mod tests;

pub use app::App;
pub use cli::Cli;
pub use error::{CliError, Result as CliResult};
