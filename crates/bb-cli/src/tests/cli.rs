use crate::{
    cli::{Cli, parse_page_size},
    commands::Commands,
    customer_commands::CustomerCommands,
    report_commands::ReportCommands,
    sales_commands::SalesCommands,
    tests::parse,
};

use bb_api::{DEFAULT_GROWTH_DAYS, DEFAULT_TREND_MONTHS};

use std::path::PathBuf;

use clap::Parser;

#[test]
fn test_customer_list_defaults_to_first_page() {
    let cli = parse(&["customers", "list"]);

    match cli.command {
        Commands::Customers {
            action:
                CustomerCommands::List {
                    page,
                    page_size,
                    city,
                    ..
                },
        } => {
            assert_eq!(page, 1);
            assert_eq!(page_size, None);
            assert!(city.is_empty());
        }
        _ => panic!("expected customers list"),
    }
}

#[test]
fn test_customer_list_collects_repeated_cities() {
    let cli = parse(&[
        "customers", "list", "--city", "Pune", "--city", "Nashik", "--page-size", "50",
    ]);

    match cli.command {
        Commands::Customers {
            action: CustomerCommands::List { city, page_size, .. },
        } => {
            assert_eq!(city, vec!["Pune".to_string(), "Nashik".to_string()]);
            assert_eq!(page_size, Some(50));
        }
        _ => panic!("expected customers list"),
    }
}

#[test]
fn test_page_zero_is_rejected() {
    assert!(Cli::try_parse_from(["bb", "customers", "list", "--page", "0"]).is_err());
}

#[test]
fn test_page_size_outside_options_is_rejected() {
    assert!(Cli::try_parse_from(["bb", "subscriptions", "list", "--page-size", "30"]).is_err());
    assert!(parse_page_size("abc").is_err());
    assert_eq!(parse_page_size("100"), Ok(100));
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = parse(&["sales", "performance", "--pretty", "--csv", "/tmp/out"]);

    assert!(cli.pretty);
    assert_eq!(cli.csv, Some(PathBuf::from("/tmp/out")));
}

#[test]
fn test_sales_filters_are_flattened() {
    let cli = parse(&[
        "sales",
        "performance",
        "--start-date",
        "2024-01-01",
        "--end-date",
        "2024-01-31",
        "--district",
        "Pune",
    ]);

    match cli.command {
        Commands::Sales {
            action: SalesCommands::Performance { filters },
        } => {
            assert_eq!(filters.start_date.as_deref(), Some("2024-01-01"));
            assert_eq!(filters.end_date.as_deref(), Some("2024-01-31"));
            assert_eq!(filters.district.as_deref(), Some("Pune"));
            assert_eq!(filters.city, None);
        }
        _ => panic!("expected sales performance"),
    }
}

#[test]
fn test_report_windows_default() {
    match parse(&["reports", "growth"]).command {
        Commands::Reports {
            action: ReportCommands::Growth { days },
        } => assert_eq!(days, DEFAULT_GROWTH_DAYS),
        _ => panic!("expected reports growth"),
    }

    match parse(&["reports", "trend", "--months", "12"]).command {
        Commands::Reports {
            action: ReportCommands::Trend { months },
        } => {
            assert_ne!(months, DEFAULT_TREND_MONTHS);
            assert_eq!(months, 12);
        }
        _ => panic!("expected reports trend"),
    }
}

#[test]
fn test_change_password_flags() {
    match parse(&["change-password", "--old", "a", "--new", "b", "--confirm", "c"]).command {
        Commands::ChangePassword {
            old_password,
            new_password,
            confirm_password,
        } => {
            assert_eq!(old_password, "a");
            assert_eq!(new_password, "b");
            assert_eq!(confirm_password, "c");
        }
        _ => panic!("expected change-password"),
    }
}

#[test]
fn test_dashboard_watch_flag() {
    match parse(&["dashboard", "--watch"]).command {
        Commands::Dashboard { watch } => assert!(watch),
        _ => panic!("expected dashboard"),
    }
}
