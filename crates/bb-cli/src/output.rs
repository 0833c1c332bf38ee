//! JSON shapes printed on stdout.

use crate::error::{CliError, Result as CliResult};

use bb_core::{Page, User};
use bb_dashboard::{DashboardData, ReportsData, SalesTotals, Session, ViewState};

use serde::Serialize;
use serde_json::{Value, json};

pub fn render(value: &Value, pretty: bool) -> CliResult<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

pub fn print(value: &Value, pretty: bool) -> CliResult<()> {
    println!("{}", render(value, pretty)?);
    Ok(())
}

/// Settled view state as data; the error state becomes the command's failure
pub fn settled<T>(state: ViewState<T>) -> CliResult<Option<T>> {
    match state {
        ViewState::Populated(data) => Ok(Some(data)),
        ViewState::Empty | ViewState::Loading => Ok(None),
        ViewState::Error(message) => Err(CliError::View(message)),
    }
}

/// Never includes the token
pub fn user_json(user: &User) -> Value {
    json!({
        "id": user.id,
        "name": user.name,
        "email": user.email,
        "role": user.role,
    })
}

pub fn session_json(session: &Session) -> Value {
    json!({
        "authenticated": session.authenticated,
        "user": session.user.as_ref().map(user_json),
    })
}

/// One list page; an empty result keeps the requested position
pub fn page_json<T: Serialize>(
    state: ViewState<Page<T>>,
    page: u32,
    page_size: u32,
) -> CliResult<Value> {
    let page = settled(state)?.unwrap_or_else(|| Page {
        data: Vec::new(),
        total: 0,
        page,
        page_size,
    });
    Ok(serde_json::to_value(page)?)
}

pub fn sales_json<T: Serialize>(state: ViewState<Vec<T>>, totals: &SalesTotals) -> CliResult<Value> {
    let rows = settled(state)?.unwrap_or_default();
    Ok(json!({
        "rows": serde_json::to_value(rows)?,
        "totals": {
            "customersOnboarded": totals.customers_onboarded,
            "revenueGenerated": totals.revenue_generated,
            "kiranaCount": totals.kirana_count,
            "restaurantCount": totals.restaurant_count,
            "activeCount": totals.active_count,
            "expiredCount": totals.expired_count,
        },
    }))
}

pub fn dashboard_json(data: &DashboardData) -> CliResult<Value> {
    Ok(json!({
        "kpis": serde_json::to_value(&data.kpis)?,
        "customerGrowth": serde_json::to_value(&data.customer_growth)?,
        "subscriptionDistribution": serde_json::to_value(&data.subscription_distribution)?,
        "businessTypeDistribution": serde_json::to_value(&data.business_type_distribution)?,
        "lastUpdated": data.last_updated.to_rfc3339(),
    }))
}

pub fn reports_json(data: &ReportsData) -> CliResult<Value> {
    Ok(json!({
        "revenue": serde_json::to_value(&data.revenue)?,
        "planDistribution": serde_json::to_value(&data.plan_distribution)?,
        "revenueTrend": serde_json::to_value(&data.revenue_trend)?,
    }))
}
