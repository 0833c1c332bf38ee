use crate::CsvRecord;

use serde::{Deserialize, Serialize};

/// Onboarding and revenue totals for one salesperson
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SalesPerformance {
    pub salesperson_id: String,
    pub salesperson_name: String,
    pub customers_onboarded: u64,
    pub revenue_generated: f64,
    pub kirana_count: u64,
    pub restaurant_count: u64,
    pub active_count: u64,
    pub expired_count: u64,
}

impl CsvRecord for SalesPerformance {
    fn headers() -> &'static [&'static str] {
        &[
            "Salesperson",
            "Customers Onboarded",
            "Revenue Generated",
            "Kirana Count",
            "Restaurant Count",
            "Active Count",
            "Expired Count",
        ]
    }

    fn fields(&self) -> Vec<String> {
        vec![
            self.salesperson_name.clone(),
            self.customers_onboarded.to_string(),
            self.revenue_generated.to_string(),
            self.kirana_count.to_string(),
            self.restaurant_count.to_string(),
            self.active_count.to_string(),
            self.expired_count.to_string(),
        ]
    }
}
