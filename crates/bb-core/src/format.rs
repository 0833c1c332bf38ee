//! Display helpers shared by the views and the CLI output.

use crate::SubscriptionStatus;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Days before a subscription end date at which it counts as expiring
const EXPIRING_SOON_DAYS: i64 = 7;

/// Format a rupee amount with Indian digit grouping and no decimals, e.g. `₹12,34,567`.
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}₹{}", sign, group_indian(rounded.abs() as u64))
}

/// Format a number with Indian digit grouping, keeping up to three decimals.
pub fn format_number(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let scaled = (value.abs() * 1000.0).round() as u64;
    let whole = group_indian(scaled / 1000);
    let fraction = scaled % 1000;

    if fraction == 0 {
        format!("{}{}", sign, whole)
    } else {
        let digits = format!("{:03}", fraction);
        format!("{}{}.{}", sign, whole, digits.trim_end_matches('0'))
    }
}

/// Render a server date as `DD MMM YYYY`, or `N/A` when it is missing or unreadable.
pub fn format_date(value: &str) -> String {
    match parse_date(value) {
        Some(date) => date.format("%d %b %Y").to_string(),
        None => String::from("N/A"),
    }
}

/// Accepts RFC 3339 timestamps, naive `YYYY-MM-DDTHH:MM:SS` and plain `YYYY-MM-DD`.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

pub fn days_remaining(end_date: &str, today: NaiveDate) -> Option<i64> {
    parse_date(end_date).map(|end| (end - today).num_days())
}

pub fn subscription_status_for(end_date: &str, today: NaiveDate) -> Option<SubscriptionStatus> {
    days_remaining(end_date, today).map(|days| {
        if days < 0 {
            SubscriptionStatus::Expired
        } else if days <= EXPIRING_SOON_DAYS {
            SubscriptionStatus::ExpiringSoon
        } else {
            SubscriptionStatus::Active
        }
    })
}

/// Colour for a status chip; unknown statuses are grey.
pub fn status_color(status: &str) -> &'static str {
    status
        .parse::<SubscriptionStatus>()
        .map(|s| s.color())
        .unwrap_or("#9e9e9e")
}

/// Keep the first and last two digits of a mobile number, e.g. `98******10`.
pub fn mask_mobile(mobile: &str) -> String {
    let chars: Vec<char> = mobile.chars().collect();
    if chars.len() < 10 {
        return mobile.to_string();
    }

    let head: String = chars[..2].iter().collect();
    let tail: String = chars[chars.len() - 2..].iter().collect();
    format!("{}{}{}", head, "*".repeat(chars.len() - 4), tail)
}

pub fn percentage_change(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        return if current > 0.0 { 100.0 } else { 0.0 };
    }
    (current - previous) / previous * 100.0
}

pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let head: String = text.chars().take(max_len).collect();
    format!("{}...", head)
}

/// Initials of the first and last name parts, upper-cased.
pub fn initials(name: &str) -> String {
    let parts: Vec<&str> = name.split_whitespace().collect();
    let first_char = |s: &str| s.chars().next().map(|c| c.to_uppercase().to_string());

    match parts.as_slice() {
        [] => String::new(),
        [only] => first_char(*only).unwrap_or_default(),
        [first, .., last] => format!(
            "{}{}",
            first_char(*first).unwrap_or_default(),
            first_char(*last).unwrap_or_default()
        ),
    }
}

fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, last_three) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), last_three)
}
