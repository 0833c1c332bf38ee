//! Client-side CSV export of the rows a view currently holds.

use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};
use error_location::ErrorLocation;
use log::{info, warn};

/// A row type with a fixed set of CSV columns
pub trait CsvRecord {
    fn headers() -> &'static [&'static str];
    fn fields(&self) -> Vec<String>;
}

/// Render rows as CSV text, or `None` when there is nothing to export.
pub fn to_csv<R: CsvRecord>(rows: &[R]) -> Option<String> {
    if rows.is_empty() {
        return None;
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(
        R::headers()
            .iter()
            .map(|h| escape_field(h))
            .collect::<Vec<_>>()
            .join(","),
    );
    for row in rows {
        lines.push(
            row.fields()
                .iter()
                .map(|f| escape_field(f))
                .collect::<Vec<_>>()
                .join(","),
        );
    }

    Some(lines.join("\n"))
}

/// Write rows to `<dir>/<stem>_<YYYY-MM-DD_HHmmss>.csv`.
///
/// Returns `Ok(None)` without touching the filesystem when `rows` is empty.
#[track_caller]
pub fn write_csv<R, Tz>(
    rows: &[R],
    dir: &Path,
    stem: &str,
    now: DateTime<Tz>,
) -> CoreResult<Option<PathBuf>>
where
    R: CsvRecord,
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let Some(contents) = to_csv(rows) else {
        warn!("No data to export");
        return Ok(None);
    };

    let path = dir.join(export_filename(stem, now));
    std::fs::write(&path, contents).map_err(|e| CoreError::Io {
        path: path.clone(),
        source: e,
        location: ErrorLocation::from(Location::caller()),
    })?;

    info!("Exported {} rows to {}", rows.len(), path.display());
    Ok(Some(path))
}

pub fn export_filename<Tz>(stem: &str, now: DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!("{}_{}.csv", stem, now.format("%Y-%m-%d_%H%M%S"))
}

fn escape_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
