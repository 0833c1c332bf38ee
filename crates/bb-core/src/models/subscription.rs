use crate::CsvRecord;
use crate::format::format_date;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Subscription {
    pub id: String,
    pub customer_id: String,
    pub customer_name: String,
    pub plan_name: String,
    pub amount_paid: f64,
    pub start_date: String,
    pub end_date: String,
    pub status: String,
    pub days_remaining: i64,
}

impl CsvRecord for Subscription {
    fn headers() -> &'static [&'static str] {
        &[
            "Customer Name",
            "Plan Name",
            "Amount Paid",
            "Start Date",
            "End Date",
            "Status",
            "Days Remaining",
        ]
    }

    fn fields(&self) -> Vec<String> {
        vec![
            self.customer_name.clone(),
            self.plan_name.clone(),
            self.amount_paid.to_string(),
            format_date(&self.start_date),
            format_date(&self.end_date),
            self.status.clone(),
            self.days_remaining.to_string(),
        ]
    }
}
